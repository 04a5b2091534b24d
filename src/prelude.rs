//! Convenience re-exports for common rowforge usage
//!
//! This prelude module re-exports the most commonly used items from the
//! rowforge ecosystem, making it easier to import everything you need with a
//! single use statement.
//!
//! # Example
//!
//! ```rust
//! use rowforge::prelude::*;
//!
//! // Now you have access to all the common rowforge types and traits
//! ```

// Core rowforge components
pub use crate::core::{Rowforge, SavePlan};
pub use crate::errors::RowforgeError;
pub use crate::executor::{Diagnostic, RowSet, StatementExecutor};
pub use crate::model::{Field, Model};
pub use crate::outcome::{
    ConnectOutcome, EraseOutcome, FetchOutcome, SaveOutcome, SchemaDiff, ValidationOutcome,
};

// Re-export centralized config
pub use config::{AppConfig, ConnectionParameter, DatabaseConfig, SslMode};

// Commonly used wire types
pub use pg_types::{
    BigSerial, ByteArray, IntervalField, Json, Jsonb, Numeric, NumericParseError, Serial,
    SmallSerial, SqlArray, SqlType, ToSqlLiteral, Xml,
};
