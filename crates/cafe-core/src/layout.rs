//! Deterministic presentation structure for a category menu.
//!
//! Groups listed in the category kind's preferred sequence come first, in
//! that sequence; every other group follows in alphabetical order. Designated
//! groups are further split into buckets (see [`crate::buckets`]).

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use cafe_model::{Cardinality, CategoryMenu, Menu, MenuOption, OptionGroup};

use crate::buckets::{BucketedGroup, bucket_options};
use crate::category::CategoryKind;

/// Order a category's groups for display.
///
/// A group takes its preferred position by display name or by record key,
/// the same way [`bucket_options`] recognizes designated groups.
pub fn order_groups<'a>(
    groups: &'a BTreeMap<String, OptionGroup>,
    kind: &CategoryKind,
) -> Vec<(&'a str, &'a OptionGroup)> {
    let preferred = kind.preferred_groups();
    let rank = |name: &str, group: &OptionGroup| {
        preferred
            .iter()
            .position(|p| *p == name || *p == group.key)
    };

    let mut ordered: Vec<(&str, &OptionGroup)> = groups
        .iter()
        .map(|(name, group)| (name.as_str(), group))
        .collect();
    ordered.sort_by(|(left, left_group), (right, right_group)| {
        match (rank(*left, *left_group), rank(*right, *right_group)) {
            (Some(l), Some(r)) => l.cmp(&r).then_with(|| left.cmp(right)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => left.cmp(right),
        }
    });
    ordered
}

/// How a group's options are presented.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupOptions {
    Flat { options: Vec<MenuOption> },
    Bucketed(BucketedGroup),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupView {
    pub name: String,
    pub cardinality: Cardinality,
    pub options: GroupOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryLayout {
    pub key: String,
    pub kind: CategoryKind,
    pub label: String,
    pub base_price: f64,
    pub groups: Vec<GroupView>,
}

/// Build the ordered, bucketed view of one category.
pub fn layout_category(menu: &CategoryMenu) -> CategoryLayout {
    let kind = CategoryKind::from_key(&menu.key);
    let groups = order_groups(&menu.groups, &kind)
        .into_iter()
        .map(|(name, group)| GroupView {
            name: name.to_string(),
            cardinality: group.cardinality,
            options: match bucket_options(&kind, group) {
                Some(bucketed) => GroupOptions::Bucketed(bucketed),
                None => GroupOptions::Flat {
                    options: group.options.clone(),
                },
            },
        })
        .collect();

    CategoryLayout {
        key: menu.key.clone(),
        label: menu.category.clone(),
        base_price: menu.base_price,
        kind,
        groups,
    }
}

/// Lay out every category: known kinds in display order, then the rest by key.
pub fn layout_menu(menu: &Menu) -> Vec<CategoryLayout> {
    let mut layouts: Vec<CategoryLayout> = menu.iter().map(layout_category).collect();
    layouts.sort_by(|a, b| {
        a.kind
            .display_rank()
            .cmp(&b.kind.display_rank())
            .then_with(|| a.key.cmp(&b.key))
    });
    layouts
}
