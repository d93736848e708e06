pub mod error;
pub mod normalize;
pub mod records;

pub use error::IngestError;
pub use normalize::{
    NormalizeReport, SkippedRecord, normalize_batch, normalize_records, normalize_with_report,
};
pub use records::{RecordBatch, parse_records_json, read_records_file, records_from_values};
