//! Error types for the rowforge crate
//!
//! All failures cross the public API as typed outcomes; these errors are the
//! internal taxonomy those outcomes are built from.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowforgeError {
    #[error("Field with value {value} has no name. {model} was not saved.")]
    Naming { model: String, value: String },

    #[error("Failed to prepare statement `{statement}`. Reason: {reason}")]
    Prepare { statement: String, reason: String },

    #[error("Failed to execute prepared statement `{name}`. Reason: {reason}")]
    Execute { name: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Connection error: {0}")]
    Connection(String),
}
