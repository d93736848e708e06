//! Hierarchical menu model: category → option group → option.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::OptionId;

/// A selectable option inside a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuOption {
    pub id: OptionId,
    pub label: String,
    pub price_delta: f64,
}

/// How many options of a group may be selected at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// At most one option.
    #[default]
    Single,
    /// Any number of options.
    Multi,
}

impl Cardinality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::Single => "single",
            Cardinality::Multi => "multi",
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cardinality {
    type Err = String;

    /// Parse the group row's `type` attribute (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "single" | "one" | "radio" => Ok(Cardinality::Single),
            "multi" | "multiple" | "many" | "checkbox" => Ok(Cardinality::Multi),
            _ => Err(format!("Unknown group cardinality: {s}")),
        }
    }
}

/// A named group of options sharing one cardinality rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionGroup {
    /// Display name; also the key of the group in [`CategoryMenu::groups`].
    pub name: String,
    /// Short key used by option records (`OPTION#<key>#<id>`).
    pub key: String,
    pub cardinality: Cardinality,
    /// Options in arrival order.
    pub options: Vec<MenuOption>,
}

impl OptionGroup {
    /// Placeholder group created on first reference: named after its key, single-select.
    pub fn placeholder(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            name: key.clone(),
            key,
            cardinality: Cardinality::Single,
            options: Vec::new(),
        }
    }

    pub fn option(&self, id: &OptionId) -> Option<&MenuOption> {
        self.options.iter().find(|option| &option.id == id)
    }

    pub fn contains(&self, id: &OptionId) -> bool {
        self.option(id).is_some()
    }

    /// Append an option unless one with the same id is already present.
    ///
    /// Returns `false` when the option was a duplicate and was dropped.
    pub fn push_option(&mut self, option: MenuOption) -> bool {
        if self.contains(&option.id) {
            return false;
        }
        self.options.push(option);
        true
    }
}

/// Menu for one category (sandwich, soup, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMenu {
    /// Category key taken from the partition key (`ITEM#<key>`).
    pub key: String,
    /// Display label; falls back to `key`.
    pub category: String,
    pub base_price: f64,
    pub groups: BTreeMap<String, OptionGroup>,
}

impl CategoryMenu {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            category: key.clone(),
            key,
            base_price: 0.0,
            groups: BTreeMap::new(),
        }
    }

    pub fn group(&self, name: &str) -> Option<&OptionGroup> {
        self.groups.get(name)
    }

    pub fn group_by_key(&self, key: &str) -> Option<&OptionGroup> {
        self.groups.values().find(|group| group.key == key)
    }

    pub fn option_count(&self) -> usize {
        self.groups.values().map(|group| group.options.len()).sum()
    }
}

/// The full menu, keyed by category key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    categories: BTreeMap<String, CategoryMenu>,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, menu: CategoryMenu) -> Option<CategoryMenu> {
        self.categories.insert(menu.key.clone(), menu)
    }

    pub fn get(&self, key: &str) -> Option<&CategoryMenu> {
        self.categories.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryMenu> {
        self.categories.values()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl FromIterator<CategoryMenu> for Menu {
    fn from_iter<I: IntoIterator<Item = CategoryMenu>>(iter: I) -> Self {
        let mut menu = Menu::new();
        for category in iter {
            menu.insert(category);
        }
        menu
    }
}
