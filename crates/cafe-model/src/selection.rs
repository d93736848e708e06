//! Per-category selection values.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::ids::OptionId;
use crate::menu::Cardinality;

/// The selected value of one group.
///
/// Serialized untagged: a single selection is a bare string, a multi
/// selection is an array. Readers match on the variant instead of
/// inspecting the shape of the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    Single(OptionId),
    Multi(BTreeSet<OptionId>),
}

impl Selection {
    pub fn cardinality(&self) -> Cardinality {
        match self {
            Selection::Single(_) => Cardinality::Single,
            Selection::Multi(_) => Cardinality::Multi,
        }
    }

    pub fn contains(&self, id: &OptionId) -> bool {
        match self {
            Selection::Single(selected) => selected == id,
            Selection::Multi(selected) => selected.contains(id),
        }
    }

    pub fn option_ids(&self) -> Vec<&OptionId> {
        match self {
            Selection::Single(selected) => vec![selected],
            Selection::Multi(selected) => selected.iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(_) => false,
            Selection::Multi(selected) => selected.is_empty(),
        }
    }
}

/// Selections for one category builder, keyed by group name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    groups: BTreeMap<String, Selection>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, group: &str) -> Option<&Selection> {
        self.groups.get(group)
    }

    pub fn insert(&mut self, group: impl Into<String>, selection: Selection) -> Option<Selection> {
        self.groups.insert(group.into(), selection)
    }

    pub fn remove(&mut self, group: &str) -> Option<Selection> {
        self.groups.remove(group)
    }

    pub fn is_selected(&self, group: &str, id: &OptionId) -> bool {
        self.get(group).is_some_and(|selection| selection.contains(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Selection)> {
        self.groups.iter().map(|(group, selection)| (group.as_str(), selection))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }

    /// Keep only the groups for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &mut Selection) -> bool) {
        self.groups.retain(|group, selection| keep(group, selection));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(value: &str) -> OptionId {
        OptionId::new(value).unwrap()
    }

    #[test]
    fn wire_shape_depends_on_variant() {
        let mut state = SelectionState::new();
        state.insert("Broth", Selection::Single(id("chicken")));
        state.insert(
            "Toppings",
            Selection::Multi([id("croutons"), id("chives")].into_iter().collect()),
        );

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "Broth": "chicken",
                "Toppings": ["chives", "croutons"],
            })
        );

        let back: SelectionState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
        assert_eq!(
            back.get("Toppings").map(Selection::cardinality),
            Some(Cardinality::Multi)
        );
    }

    #[test]
    fn membership_checks() {
        let mut state = SelectionState::new();
        state.insert("Broth", Selection::Single(id("chicken")));
        assert!(state.is_selected("Broth", &id("chicken")));
        assert!(!state.is_selected("Broth", &id("miso")));
        assert!(!state.is_selected("Noodles", &id("chicken")));
    }
}
