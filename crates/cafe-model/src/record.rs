//! Flat attribute records as delivered by the menu endpoint.
//!
//! Each record carries a partition key (`ITEM#<category>`) naming the menu
//! category and a sort key naming the record's role within that category:
//!
//! - `META#`: category metadata (base price, display label)
//! - `GROUP#<groupKey>`: option group definition (cardinality, display name)
//! - `OPTION#<groupKey>#<optionId>`: a single option in a group
//!
//! Everything else on the record is a loosely typed attribute bag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::MalformedRecord;

pub const PARTITION_PREFIX: &str = "ITEM#";
pub const META_SORT_KEY: &str = "META#";
pub const GROUP_PREFIX: &str = "GROUP#";
pub const OPTION_PREFIX: &str = "OPTION#";

/// One flat record from the record source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeRecord {
    #[serde(rename = "PK", default, skip_serializing_if = "Option::is_none")]
    pub partition_key: Option<String>,
    #[serde(rename = "SK", default, skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Role of a record, parsed from its sort key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordRole {
    Meta,
    Group {
        key: String,
    },
    Option {
        group_key: String,
        /// Id segment of the sort key; `None` when the segment is empty.
        option_id: Option<String>,
    },
}

impl RecordRole {
    /// Parse a sort key into a role.
    pub fn parse(sort_key: &str) -> Result<Self, MalformedRecord> {
        if sort_key == META_SORT_KEY {
            return Ok(RecordRole::Meta);
        }
        if let Some(rest) = sort_key.strip_prefix(GROUP_PREFIX) {
            let key = rest.split('#').next().unwrap_or_default().trim();
            if key.is_empty() {
                return Err(MalformedRecord::EmptyGroupKey(sort_key.to_string()));
            }
            return Ok(RecordRole::Group {
                key: key.to_string(),
            });
        }
        if let Some(rest) = sort_key.strip_prefix(OPTION_PREFIX) {
            let (group_key, option_id) = match rest.split_once('#') {
                Some((group_key, option_id)) => (group_key.trim(), option_id.trim()),
                None => (rest.trim(), ""),
            };
            if group_key.is_empty() {
                return Err(MalformedRecord::EmptyGroupKey(sort_key.to_string()));
            }
            return Ok(RecordRole::Option {
                group_key: group_key.to_string(),
                option_id: (!option_id.is_empty()).then(|| option_id.to_string()),
            });
        }
        Err(MalformedRecord::UnknownRole(sort_key.to_string()))
    }
}

impl AttributeRecord {
    /// Build a record from its keys; attributes are added with [`Self::with_attr`].
    pub fn new(partition_key: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            partition_key: Some(partition_key.into()),
            sort_key: Some(sort_key.into()),
            attributes: Map::new(),
        }
    }

    #[must_use]
    pub fn with_attr(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Category named by the partition key (`ITEM#soup` → `soup`).
    pub fn category_key(&self) -> Result<&str, MalformedRecord> {
        let pk = self
            .partition_key
            .as_deref()
            .filter(|pk| !pk.trim().is_empty())
            .ok_or(MalformedRecord::MissingPartitionKey)?;
        let category = pk
            .strip_prefix(PARTITION_PREFIX)
            .and_then(|rest| rest.split('#').next())
            .map(str::trim)
            .unwrap_or_default();
        if category.is_empty() {
            return Err(MalformedRecord::InvalidPartitionKey(pk.to_string()));
        }
        Ok(category)
    }

    pub fn role(&self) -> Result<RecordRole, MalformedRecord> {
        let sk = self
            .sort_key
            .as_deref()
            .filter(|sk| !sk.trim().is_empty())
            .ok_or(MalformedRecord::MissingSortKey)?;
        RecordRole::parse(sk)
    }

    /// Category key and role together; the normalizer's single entry point.
    pub fn classify(&self) -> Result<(&str, RecordRole), MalformedRecord> {
        let category = self.category_key()?;
        let role = self.role()?;
        Ok((category, role))
    }

    /// Non-blank string attribute. Numbers are rendered as text.
    pub fn text_attr(&self, name: &str) -> Option<String> {
        match self.attributes.get(name)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Numeric attribute; accepts JSON numbers and numeric strings.
    pub fn number_attr(&self, name: &str) -> Option<f64> {
        match self.attributes.get(name)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_role() {
        assert_eq!(RecordRole::parse("META#"), Ok(RecordRole::Meta));
        assert_eq!(
            RecordRole::parse("GROUP#Bread"),
            Ok(RecordRole::Group {
                key: "Bread".to_string()
            })
        );
        assert_eq!(
            RecordRole::parse("OPTION#Bread#wheat"),
            Ok(RecordRole::Option {
                group_key: "Bread".to_string(),
                option_id: Some("wheat".to_string()),
            })
        );
        assert_eq!(
            RecordRole::parse("OPTION#Bread"),
            Ok(RecordRole::Option {
                group_key: "Bread".to_string(),
                option_id: None,
            })
        );
    }

    #[test]
    fn rejects_unknown_roles_and_empty_keys() {
        assert!(matches!(
            RecordRole::parse("PRICE#1"),
            Err(MalformedRecord::UnknownRole(_))
        ));
        assert!(matches!(
            RecordRole::parse("META#extra"),
            Err(MalformedRecord::UnknownRole(_))
        ));
        assert!(matches!(
            RecordRole::parse("GROUP#"),
            Err(MalformedRecord::EmptyGroupKey(_))
        ));
        assert!(matches!(
            RecordRole::parse("OPTION##wheat"),
            Err(MalformedRecord::EmptyGroupKey(_))
        ));
    }

    #[test]
    fn category_key_requires_item_prefix() {
        let record = AttributeRecord::new("ITEM#soup", "META#");
        assert_eq!(record.category_key(), Ok("soup"));

        let record = AttributeRecord::new("USER#soup", "META#");
        assert!(matches!(
            record.category_key(),
            Err(MalformedRecord::InvalidPartitionKey(_))
        ));

        let record = AttributeRecord::new("ITEM#", "META#");
        assert!(matches!(
            record.category_key(),
            Err(MalformedRecord::InvalidPartitionKey(_))
        ));

        let record = AttributeRecord {
            sort_key: Some("META#".to_string()),
            ..AttributeRecord::default()
        };
        assert_eq!(
            record.category_key(),
            Err(MalformedRecord::MissingPartitionKey)
        );
    }

    #[test]
    fn attributes_are_read_leniently() {
        let record: AttributeRecord = serde_json::from_value(serde_json::json!({
            "PK": "ITEM#soup",
            "SK": "META#",
            "basePrice": "4.50",
            "category": "  Soup ",
            "label": "",
        }))
        .unwrap();

        assert_eq!(record.number_attr("basePrice"), Some(4.5));
        assert_eq!(record.text_attr("category").as_deref(), Some("Soup"));
        assert_eq!(record.text_attr("label"), None);
        assert_eq!(record.number_attr("missing"), None);
    }
}
