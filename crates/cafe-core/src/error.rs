use thiserror::Error;

/// Errors raised by [`crate::session::OrderSession`] actions that reference
/// menu content which is not loaded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("menu has not been loaded")]
    MenuNotLoaded,

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("category '{category}' has no group '{group}'")]
    UnknownGroup { category: String, group: String },

    #[error("group '{group}' has no option '{option}'")]
    UnknownOption { group: String, option: String },
}

pub type Result<T> = std::result::Result<T, SessionError>;
