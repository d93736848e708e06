#![deny(unsafe_code)]

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use cafe_model::AttributeRecord;

use crate::error::IngestError;

/// Records decoded from one menu payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordBatch {
    pub records: Vec<AttributeRecord>,
    /// Array entries that could not be read as a record at all
    /// (not an object, or non-string `PK`/`SK`).
    pub undecodable: usize,
}

impl RecordBatch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<AttributeRecord>> for RecordBatch {
    fn from(records: Vec<AttributeRecord>) -> Self {
        Self {
            records,
            undecodable: 0,
        }
    }
}

/// Decode already-parsed JSON values into records, skipping entries that do not fit.
pub fn records_from_values(values: Vec<Value>) -> RecordBatch {
    let mut batch = RecordBatch::default();
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<AttributeRecord>(value) {
            Ok(record) => batch.records.push(record),
            Err(error) => {
                debug!(index, %error, "skipping undecodable menu record");
                batch.undecodable += 1;
            }
        }
    }
    batch
}

/// Parse a menu payload: a JSON array of attribute records.
pub fn parse_records_json(json: &str) -> Result<RecordBatch, IngestError> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(values) => Ok(records_from_values(values)),
        other => Err(IngestError::NotAnArray {
            found: json_kind(&other),
        }),
    }
}

/// Read a menu payload from a file (e.g. a saved `GET /menu` response).
pub fn read_records_file(path: &Path) -> Result<RecordBatch, IngestError> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let batch = parse_records_json(&contents)?;
    debug!(
        path = %path.display(),
        records = batch.len(),
        undecodable = batch.undecodable,
        "read menu records"
    );
    Ok(batch)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_entries_that_are_not_records() {
        let batch = parse_records_json(
            r#"[
                {"PK": "ITEM#soup", "SK": "META#", "basePrice": 4.5},
                42,
                "ITEM#soup",
                {"PK": 7, "SK": "META#"},
                {"SK": "META#"}
            ]"#,
        )
        .unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.undecodable, 3);
        assert_eq!(batch.records[1].partition_key, None);
    }

    #[test]
    fn rejects_non_array_payload() {
        let err = parse_records_json(r#"{"items": []}"#).unwrap_err();
        assert!(matches!(err, IngestError::NotAnArray { found: "an object" }));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            parse_records_json("[{"),
            Err(IngestError::Json(_))
        ));
    }
}
