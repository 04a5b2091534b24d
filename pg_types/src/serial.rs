//! Auto-incrementing integer values
//!
//! Thin wrappers over fixed-width signed integers whose columns are declared
//! with the serial pseudo-types. Equality is by value.

use crate::literal::ToSqlLiteral;
use crate::sql_type::SqlType;

/// An auto-incrementing 64-bit (signed) integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigSerial(pub i64);

/// An auto-incrementing 32-bit (signed) integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Serial(pub i32);

/// An auto-incrementing 16-bit (signed) integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmallSerial(pub i16);

impl BigSerial {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl Serial {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl SmallSerial {
    pub fn value(&self) -> i16 {
        self.0
    }
}

impl From<i64> for BigSerial {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<i32> for Serial {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<i16> for SmallSerial {
    fn from(value: i16) -> Self {
        Self(value)
    }
}

impl ToSqlLiteral for BigSerial {
    fn sql_type() -> SqlType {
        SqlType::BigSerial
    }
    fn to_literal(&self) -> String {
        self.0.to_string()
    }
}

impl ToSqlLiteral for Serial {
    fn sql_type() -> SqlType {
        SqlType::Serial
    }
    fn to_literal(&self) -> String {
        self.0.to_string()
    }
}

impl ToSqlLiteral for SmallSerial {
    fn sql_type() -> SqlType {
        SqlType::SmallSerial
    }
    fn to_literal(&self) -> String {
        self.0.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_big_serial() {
        let a = BigSerial(1);
        let b = BigSerial::from(1i64);
        assert_eq!(<BigSerial as ToSqlLiteral>::sql_type(), SqlType::BigSerial);
        assert_eq!(a.to_literal(), "1");
        assert_eq!(a, b);
        assert_eq!(a.value(), 1);
    }

    #[test]
    fn test_serial() {
        let a = Serial(1);
        let b = Serial::from(1i32);
        assert_eq!(<Serial as ToSqlLiteral>::sql_type(), SqlType::Serial);
        assert_eq!(a.to_literal(), "1");
        assert_eq!(a, b);
    }

    #[test]
    fn test_small_serial() {
        let a = SmallSerial(1);
        let b = SmallSerial::from(1i16);
        assert_eq!(<SmallSerial as ToSqlLiteral>::sql_type(), SqlType::SmallSerial);
        assert_eq!(a.to_literal(), "1");
        assert_eq!(a, b);
    }
}
