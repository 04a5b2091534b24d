//! Unified mapping between Rust values and PostgreSQL literal text
//!
//! This crate provides the type descriptor algebra ([`SqlType`]), the literal
//! encoding contract ([`ToSqlLiteral`]), and the wrapper types for columns
//! that have no direct Rust scalar equivalent.

pub mod array;
pub mod bytes;
pub mod document;
pub mod literal;
pub mod numeric;
pub mod serial;
pub mod sql_type;

pub use array::SqlArray;
pub use bytes::ByteArray;
pub use document::{Json, Jsonb, Xml};
pub use literal::ToSqlLiteral;
pub use numeric::{Numeric, NumericParseError};
pub use serial::{BigSerial, Serial, SmallSerial};
pub use sql_type::{IntervalField, SqlType};
