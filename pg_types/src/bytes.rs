//! Binary values
//!
//! A wrapper for the PostgreSQL bytea type using the hex input format.

use crate::literal::ToSqlLiteral;
use crate::sql_type::SqlType;
use std::fmt::Write;

/// An ordered sequence of bytes. Equality is by content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteArray {
    bytes: Vec<u8>,
}

impl ByteArray {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Construct from signed bytes, reinterpreting the bit pattern.
    pub fn from_signed(bytes: &[i8]) -> Self {
        Self {
            bytes: bytes.iter().map(|b| *b as u8).collect(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for ByteArray {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl ToSqlLiteral for ByteArray {
    fn sql_type() -> SqlType {
        SqlType::Bytea
    }

    fn to_literal(&self) -> String {
        let mut literal = String::with_capacity(6 + self.bytes.len() * 2);
        literal.push_str("E'\\x");
        for byte in &self.bytes {
            let _ = write!(literal, "{:02X}", byte);
        }
        literal.push('\'');
        literal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_type() {
        assert_eq!(<ByteArray as ToSqlLiteral>::sql_type(), SqlType::Bytea);
    }

    #[test]
    fn test_hex_literal_uppercase_zero_padded() {
        let signed = ByteArray::from_signed(&[1, 10, 100, -1]);
        let unsigned = ByteArray::new(vec![1, 10, 100, 255]);

        assert_eq!(signed, unsigned);
        assert_eq!(unsigned.to_literal(), "E'\\x010A64FF'");
        assert_eq!(signed.to_literal(), "E'\\x010A64FF'");
        assert_eq!(signed.bytes(), unsigned.bytes());
    }

    #[test]
    fn test_empty() {
        let empty = ByteArray::new(vec![]);
        assert_eq!(empty.to_literal(), "E'\\x'");
        assert_eq!(empty, ByteArray::from_signed(&[]));
        assert!(empty.bytes().is_empty());
    }
}
