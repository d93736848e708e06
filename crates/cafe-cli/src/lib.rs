//! Library components of the café ordering CLI.

pub mod item_spec;
pub mod logging;
