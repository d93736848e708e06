//! Flat attribute records → category-keyed menu model.
//!
//! The normalizer makes a single pass over the records and dispatches on the
//! sort-key role. Groups are created lazily on first reference by either a
//! `GROUP#` or an `OPTION#` row, so an option never depends on its group row
//! having been seen first. A later `GROUP#` row only fills in the display name
//! and cardinality of the group it names.
//!
//! The resulting categories, groups, cardinalities, labels, prices and option
//! membership do not depend on record order. Options keep their arrival order
//! within a group.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use cafe_model::{
    AttributeRecord, Cardinality, CategoryMenu, MalformedRecord, Menu, MenuOption, OptionGroup,
    OptionId, RecordRole,
};

use crate::records::RecordBatch;

/// A record that was discarded, with its position in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub reason: MalformedRecord,
}

/// Counts collected while normalizing one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub accepted: usize,
    pub skipped: Vec<SkippedRecord>,
    pub undecodable: usize,
    /// Options dropped because their group already held the same id.
    pub duplicate_options: usize,
    /// Groups that never received a `GROUP#` row and kept placeholder metadata.
    pub placeholder_groups: usize,
}

impl NormalizeReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len() + self.undecodable
    }
}

#[derive(Debug, Default)]
struct GroupBuilder {
    defined: bool,
    display_name: Option<String>,
    cardinality: Option<Cardinality>,
    options: Vec<MenuOption>,
}

#[derive(Debug, Default)]
struct CategoryBuilder {
    label: Option<String>,
    base_price: Option<f64>,
    groups: BTreeMap<String, GroupBuilder>,
}

/// Normalize records into a menu, discarding malformed ones.
pub fn normalize_records(records: &[AttributeRecord]) -> Menu {
    normalize_with_report(records).0
}

/// Normalize a decoded batch, carrying its undecodable count into the report.
pub fn normalize_batch(batch: &RecordBatch) -> (Menu, NormalizeReport) {
    let (menu, mut report) = normalize_with_report(&batch.records);
    report.undecodable = batch.undecodable;
    (menu, report)
}

pub fn normalize_with_report(records: &[AttributeRecord]) -> (Menu, NormalizeReport) {
    let mut report = NormalizeReport::default();
    let mut categories: BTreeMap<String, CategoryBuilder> = BTreeMap::new();

    for (index, record) in records.iter().enumerate() {
        match apply_record(&mut categories, record, &mut report) {
            Ok(()) => report.accepted += 1,
            Err(reason) => {
                debug!(index, %reason, "skipping malformed menu record");
                report.skipped.push(SkippedRecord { index, reason });
            }
        }
    }

    let menu: Menu = categories
        .into_iter()
        .map(|(key, builder)| finish_category(key, builder, &mut report))
        .collect();

    debug!(
        categories = menu.len(),
        accepted = report.accepted,
        skipped = report.skipped.len(),
        duplicate_options = report.duplicate_options,
        placeholder_groups = report.placeholder_groups,
        "normalized menu records"
    );
    (menu, report)
}

fn apply_record(
    categories: &mut BTreeMap<String, CategoryBuilder>,
    record: &AttributeRecord,
    report: &mut NormalizeReport,
) -> Result<(), MalformedRecord> {
    let (category_key, role) = record.classify()?;

    // Resolve the option id before touching any state so a bad row leaves no trace.
    let option = match &role {
        RecordRole::Option { option_id, .. } => Some(parse_option(record, option_id.as_deref())?),
        _ => None,
    };

    let category = categories.entry(category_key.to_string()).or_default();
    match role {
        RecordRole::Meta => {
            if let Some(label) = record.text_attr("category") {
                category.label = Some(label);
            }
            if let Some(price) = record.number_attr("basePrice") {
                category.base_price = Some(price);
            }
        }
        RecordRole::Group { key } => {
            let group = category.groups.entry(key).or_default();
            group.defined = true;
            if let Some(name) = record.text_attr("group") {
                group.display_name = Some(name);
            }
            if let Some(kind) = record.text_attr("type") {
                match kind.parse::<Cardinality>() {
                    Ok(cardinality) => group.cardinality = Some(cardinality),
                    Err(error) => debug!(%error, "unknown group type; keeping single-select"),
                }
            }
        }
        RecordRole::Option { group_key, .. } => {
            let group = category.groups.entry(group_key).or_default();
            if let Some(option) = option {
                if group.options.iter().any(|existing| existing.id == option.id) {
                    debug!(option_id = %option.id, "dropping duplicate option");
                    report.duplicate_options += 1;
                } else {
                    group.options.push(option);
                }
            }
        }
    }
    Ok(())
}

fn parse_option(
    record: &AttributeRecord,
    sort_key_id: Option<&str>,
) -> Result<MenuOption, MalformedRecord> {
    let raw_id = record
        .text_attr("id")
        .or_else(|| sort_key_id.map(str::to_string));
    let id = raw_id
        .and_then(|raw| OptionId::new(raw).ok())
        .ok_or_else(|| {
            MalformedRecord::MissingOptionId(record.sort_key.clone().unwrap_or_default())
        })?;
    let label = record
        .text_attr("label")
        .unwrap_or_else(|| id.as_str().to_string());
    // Sweets carry `price` instead of `priceDelta`.
    let price_delta = record
        .number_attr("priceDelta")
        .or_else(|| record.number_attr("price"))
        .unwrap_or(0.0);
    Ok(MenuOption {
        id,
        label,
        price_delta,
    })
}

fn finish_category(
    key: String,
    builder: CategoryBuilder,
    report: &mut NormalizeReport,
) -> CategoryMenu {
    let mut menu = CategoryMenu::new(key);
    if let Some(label) = builder.label {
        menu.category = label;
    }
    menu.base_price = builder.base_price.unwrap_or(0.0);

    // Builders iterate in key order, which makes name collisions resolve deterministically.
    for (group_key, group) in builder.groups {
        if !group.defined {
            debug!(
                category = %menu.key,
                group_key = %group_key,
                "group has options but no definition row; using placeholder"
            );
            report.placeholder_groups += 1;
        }
        let mut name = group.display_name.unwrap_or_else(|| group_key.clone());
        if menu.groups.contains_key(&name) {
            warn!(
                category = %menu.key,
                group_key = %group_key,
                name = %name,
                "group display name already taken; exposing group under its key"
            );
            name = if menu.groups.contains_key(&group_key) {
                free_name(&menu, &name, &group_key)
            } else {
                group_key.clone()
            };
        }
        let mut option_group = OptionGroup::placeholder(group_key);
        option_group.name = name.clone();
        option_group.cardinality = group.cardinality.unwrap_or_default();
        option_group.options = group.options;
        menu.groups.insert(name, option_group);
    }
    menu
}

/// First of `name (key)`, `name (key 2)`, ... not yet used in `menu`.
fn free_name(menu: &CategoryMenu, name: &str, group_key: &str) -> String {
    let mut candidate = format!("{name} ({group_key})");
    let mut suffix = 2;
    while menu.groups.contains_key(&candidate) {
        candidate = format!("{name} ({group_key} {suffix})");
        suffix += 1;
    }
    candidate
}
