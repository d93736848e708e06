//! Category type tags and their preferred group order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type tag of a menu category, derived from its partition-key category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Sandwich,
    Soup,
    Salad,
    Drink,
    Sweet,
    /// Any category without dedicated layout rules.
    Other(String),
}

impl CategoryKind {
    /// Kinds with dedicated layout rules, in menu display order.
    pub const KNOWN: [CategoryKind; 5] = [
        CategoryKind::Sandwich,
        CategoryKind::Soup,
        CategoryKind::Salad,
        CategoryKind::Drink,
        CategoryKind::Sweet,
    ];

    pub fn from_key(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "sandwich" | "sandwiches" => CategoryKind::Sandwich,
            "soup" | "soups" => CategoryKind::Soup,
            "salad" | "salads" => CategoryKind::Salad,
            "drink" | "drinks" => CategoryKind::Drink,
            "sweet" | "sweets" => CategoryKind::Sweet,
            _ => CategoryKind::Other(key.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryKind::Sandwich => "sandwich",
            CategoryKind::Soup => "soup",
            CategoryKind::Salad => "salad",
            CategoryKind::Drink => "drink",
            CategoryKind::Sweet => "sweet",
            CategoryKind::Other(key) => key,
        }
    }

    /// Fixed display order of groups for this kind. Unlisted groups sort after these.
    pub fn preferred_groups(&self) -> &'static [&'static str] {
        match self {
            CategoryKind::Sandwich => &["Bread", "Meat", "Cheese", "Veggies", "Spreads", "Extras"],
            CategoryKind::Soup => &["Size", "Broth", "Protein", "Veggies", "Toppings"],
            CategoryKind::Salad => &["Base", "Protein", "Cheeses", "Veggies", "Toppings", "Dressing"],
            CategoryKind::Drink => &["Type", "Size", "Milk", "Flavors", "Sweetener", "Extras"],
            CategoryKind::Sweet => &["Treats", "Toppings"],
            CategoryKind::Other(_) => &[],
        }
    }

    /// Menu display rank: known kinds first in [`Self::KNOWN`] order.
    pub fn display_rank(&self) -> usize {
        Self::KNOWN
            .iter()
            .position(|kind| kind == self)
            .unwrap_or(Self::KNOWN.len())
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_key(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_key_is_case_insensitive() {
        assert_eq!(CategoryKind::from_key("Soup"), CategoryKind::Soup);
        assert_eq!(CategoryKind::from_key("SWEETS"), CategoryKind::Sweet);
        assert_eq!(
            CategoryKind::from_key("breakfast"),
            CategoryKind::Other("breakfast".to_string())
        );
    }

    #[test]
    fn display_rank_puts_unknown_last() {
        assert!(CategoryKind::Sandwich.display_rank() < CategoryKind::Sweet.display_rank());
        assert_eq!(
            CategoryKind::Other("bowls".to_string()).display_rank(),
            CategoryKind::KNOWN.len()
        );
    }
}
