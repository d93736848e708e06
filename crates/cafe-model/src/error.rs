use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid option id: {0:?}")]
    InvalidOptionId(String),
}

/// Reasons an attribute record is discarded during normalization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedRecord {
    #[error("record has no partition key")]
    MissingPartitionKey,
    #[error("record has no sort key")]
    MissingSortKey,
    #[error("partition key {0:?} is not of the form ITEM#<category>")]
    InvalidPartitionKey(String),
    #[error("sort key {0:?} has an unknown role")]
    UnknownRole(String),
    #[error("sort key {0:?} names an empty group key")]
    EmptyGroupKey(String),
    #[error("option record {0:?} carries no option id")]
    MissingOptionId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
