//! Display sub-grouping of options within designated groups.
//!
//! A bucket is a named predicate over option ids. Buckets are evaluated in
//! table order and an option joins the first bucket it matches, so it appears
//! at most once. Options matching no bucket are left out of the bucketed view
//! and reported in [`BucketedGroup::unmatched`] for content review. Empty
//! buckets are omitted.

use serde::Serialize;
use tracing::warn;

use cafe_model::{MenuOption, OptionGroup, OptionId};

use crate::category::CategoryKind;

/// Predicate deciding bucket membership from an option id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketPredicate {
    Prefix(&'static str),
    OneOf(&'static [&'static str]),
}

impl BucketPredicate {
    pub fn matches(&self, id: &OptionId) -> bool {
        match self {
            BucketPredicate::Prefix(prefix) => id.as_str().starts_with(prefix),
            BucketPredicate::OneOf(ids) => ids.contains(&id.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketRule {
    pub name: &'static str,
    pub predicate: BucketPredicate,
}

const fn prefix(name: &'static str, prefix: &'static str) -> BucketRule {
    BucketRule {
        name,
        predicate: BucketPredicate::Prefix(prefix),
    }
}

const fn one_of(name: &'static str, ids: &'static [&'static str]) -> BucketRule {
    BucketRule {
        name,
        predicate: BucketPredicate::OneOf(ids),
    }
}

const SWEET_TREATS: &[BucketRule] = &[
    prefix("Cookies", "cookie-"),
    prefix("Cakes", "cake-"),
    prefix("Cinnamon Rolls", "cinnamonroll"),
    prefix("Cheesecake", "cheesecake"),
    prefix("Tarts", "tart-"),
    prefix("Muffins", "muffin-"),
];

pub const FRUIT_FLAVORS: &[&str] = &[
    "strawberry",
    "raspberry",
    "blueberry",
    "blackberry",
    "cherry",
    "peach",
    "mango",
    "pineapple",
    "passionfruit",
    "watermelon",
    "kiwi",
    "pomegranate",
    "lemon",
    "lime",
    "orange",
];

pub const HERB_FLOWER_FLAVORS: &[&str] = &[
    "lavender",
    "rose",
    "hibiscus",
    "mint",
    "basil",
    "elderflower",
    "jasmine",
];

pub const OTHER_FLAVORS: &[&str] = &["vanilla", "caramel", "hazelnut", "cinnamon", "honey"];

const DRINK_FLAVORS: &[BucketRule] = &[
    one_of("Fruit", FRUIT_FLAVORS),
    one_of("Herb & Flower", HERB_FLOWER_FLAVORS),
    one_of("Other", OTHER_FLAVORS),
];

const SALAD_CHEESES: &[BucketRule] = &[
    one_of("Crumbled/Soft", &["feta", "goat", "bleu", "burrata"]),
    one_of("Shredded/Hard", &["parmesan", "cheddar", "mozzarella"]),
];

/// Bucket rules for a (category, group) pair, if that pair is bucketed.
pub fn bucket_rules(kind: &CategoryKind, group_name: &str) -> Option<&'static [BucketRule]> {
    match (kind, group_name) {
        (CategoryKind::Sweet, "Treats") => Some(SWEET_TREATS),
        (CategoryKind::Drink, "Flavors") => Some(DRINK_FLAVORS),
        (CategoryKind::Salad, "Cheeses") => Some(SALAD_CHEESES),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionBucket {
    pub name: &'static str,
    pub options: Vec<MenuOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketedGroup {
    /// Non-empty buckets in rule order.
    pub buckets: Vec<OptionBucket>,
    /// Ids of options that matched no bucket and are not shown.
    pub unmatched: Vec<OptionId>,
}

/// Partition a group's options into buckets, or `None` if the pair is not bucketed.
///
/// The group is matched by display name first, then by its record key.
pub fn bucket_options(kind: &CategoryKind, group: &OptionGroup) -> Option<BucketedGroup> {
    let rules = bucket_rules(kind, &group.name).or_else(|| bucket_rules(kind, &group.key))?;
    Some(partition(rules, &group.options, kind, &group.name))
}

fn partition(
    rules: &[BucketRule],
    options: &[MenuOption],
    kind: &CategoryKind,
    group_name: &str,
) -> BucketedGroup {
    let mut buckets: Vec<OptionBucket> = rules
        .iter()
        .map(|rule| OptionBucket {
            name: rule.name,
            options: Vec::new(),
        })
        .collect();
    let mut unmatched = Vec::new();

    for option in options {
        match rules.iter().position(|rule| rule.predicate.matches(&option.id)) {
            Some(index) => buckets[index].options.push(option.clone()),
            None => unmatched.push(option.id.clone()),
        }
    }

    if !unmatched.is_empty() {
        let ids: Vec<&str> = unmatched.iter().map(OptionId::as_str).collect();
        warn!(
            category = %kind,
            group = group_name,
            unmatched = ?ids,
            "options match no display bucket and are hidden"
        );
    }

    buckets.retain(|bucket| !bucket.options.is_empty());
    BucketedGroup { buckets, unmatched }
}
