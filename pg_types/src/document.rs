//! Structured document values
//!
//! Containers for XML, JSON, and binary JSON content. No validation is done
//! at construction; malformed content surfaces when a database transaction is
//! performed. Content is wrapped in single quotes verbatim.

use crate::literal::ToSqlLiteral;
use crate::sql_type::SqlType;

macro_rules! document_type {
    ($(#[$doc:meta])* $name:ident, $sql_type:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            content: String,
        }

        impl $name {
            pub fn new(content: impl Into<String>) -> Self {
                Self {
                    content: content.into(),
                }
            }

            pub fn content(&self) -> &str {
                &self.content
            }
        }

        impl ToSqlLiteral for $name {
            fn sql_type() -> SqlType {
                $sql_type
            }
            fn to_literal(&self) -> String {
                format!("'{}'", self.content)
            }
        }
    };
}

document_type!(
    /// A container for XML documents.
    Xml,
    SqlType::Xml
);

document_type!(
    /// A container for JSON documents stored as text.
    Json,
    SqlType::Json
);

document_type!(
    /// Identical to [`Json`] but stored as binary JSON.
    Jsonb,
    SqlType::Jsonb
);

impl Json {
    /// Serialize an in-memory JSON value into a document.
    pub fn from_value(value: &serde_json::Value) -> Self {
        Self::new(value.to_string())
    }
}

impl Jsonb {
    /// Serialize an in-memory JSON value into a document.
    pub fn from_value(value: &serde_json::Value) -> Self {
        Self::new(value.to_string())
    }
}
