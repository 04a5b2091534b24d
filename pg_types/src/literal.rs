//! The literal encoding capability
//!
//! This module defines the `ToSqlLiteral` contract and implements it for the
//! ordinary Rust scalar types. Wrapper types with richer encodings live in
//! their own modules.

use crate::sql_type::SqlType;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A value that can be stored in a PostgreSQL column.
///
/// Implementers produce the column type used to represent the Rust type and
/// the raw SQL characters that insert a value into the database, e.g. `1`,
/// `1.0001`, or `'a varchar'`. Any quotation marks SQL expects are part of
/// the literal. Both methods are pure and total.
///
/// rowforge implements this for many basic Rust types on your behalf; have a
/// look at those implementations before writing your own.
pub trait ToSqlLiteral {
    /// The column type representing this Rust type. Independent of any
    /// particular instance; the `Sized` bound keeps the trait object safe.
    fn sql_type() -> SqlType
    where
        Self: Sized;

    /// The exact SQL literal text for this value.
    fn to_literal(&self) -> String;
}

impl ToSqlLiteral for bool {
    fn sql_type() -> SqlType {
        SqlType::Boolean
    }
    fn to_literal(&self) -> String {
        if *self { "TRUE".to_string() } else { "FALSE".to_string() }
    }
}

impl ToSqlLiteral for i8 {
    fn sql_type() -> SqlType {
        SqlType::SmallInt
    }
    fn to_literal(&self) -> String {
        self.to_string()
    }
}

impl ToSqlLiteral for i16 {
    fn sql_type() -> SqlType {
        SqlType::SmallInt
    }
    fn to_literal(&self) -> String {
        self.to_string()
    }
}

impl ToSqlLiteral for i32 {
    fn sql_type() -> SqlType {
        SqlType::Integer
    }
    fn to_literal(&self) -> String {
        self.to_string()
    }
}

impl ToSqlLiteral for i64 {
    fn sql_type() -> SqlType {
        SqlType::BigInt
    }
    fn to_literal(&self) -> String {
        self.to_string()
    }
}

/// Imprecise by design. For a guarantee of digits before and after the
/// decimal point use [`crate::Numeric`].
impl ToSqlLiteral for f32 {
    fn sql_type() -> SqlType {
        SqlType::Real
    }
    fn to_literal(&self) -> String {
        float_literal(self, self.is_nan(), self.is_infinite(), self.is_sign_negative())
    }
}

/// Imprecise by design. For a guarantee of digits before and after the
/// decimal point use [`crate::Numeric`].
impl ToSqlLiteral for f64 {
    fn sql_type() -> SqlType {
        SqlType::DoublePrecision
    }
    fn to_literal(&self) -> String {
        float_literal(self, self.is_nan(), self.is_infinite(), self.is_sign_negative())
    }
}

// Formats the value at its own width; an f32 widened to f64 would emit the
// shortest-decimal form of the widened value instead.
fn float_literal(
    value: impl std::fmt::Display,
    nan: bool,
    infinite: bool,
    negative: bool,
) -> String {
    if nan {
        return "'NaN'".to_string();
    }
    if infinite {
        return if negative {
            "'-infinity'".to_string()
        } else {
            "'infinity'".to_string()
        };
    }
    value.to_string()
}

impl ToSqlLiteral for String {
    fn sql_type() -> SqlType {
        SqlType::Text
    }
    fn to_literal(&self) -> String {
        self.as_str().to_literal()
    }
}

impl ToSqlLiteral for &str {
    fn sql_type() -> SqlType {
        SqlType::Text
    }
    fn to_literal(&self) -> String {
        // Embedded quotes are escaped by doubling
        format!("'{}'", self.replace('\'', "''"))
    }
}

impl ToSqlLiteral for Uuid {
    fn sql_type() -> SqlType {
        SqlType::Uuid
    }
    fn to_literal(&self) -> String {
        format!("'{}'", self)
    }
}

impl ToSqlLiteral for NaiveDate {
    fn sql_type() -> SqlType {
        SqlType::Date
    }
    fn to_literal(&self) -> String {
        format!("'{}'", self.format("%Y-%m-%d"))
    }
}

impl ToSqlLiteral for DateTime<Utc> {
    fn sql_type() -> SqlType {
        SqlType::TimestampWithTimeZone(None)
    }
    fn to_literal(&self) -> String {
        format!("'{}'", self.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_bools() {
        assert_eq!(<bool as ToSqlLiteral>::sql_type(), SqlType::Boolean);
        assert_eq!(true.to_literal(), "TRUE");
        assert_eq!(false.to_literal(), "FALSE");
    }

    #[test]
    fn test_ints() {
        assert_eq!(<i64 as ToSqlLiteral>::sql_type(), SqlType::BigInt);
        assert_eq!(<i32 as ToSqlLiteral>::sql_type(), SqlType::Integer);
        assert_eq!(<i16 as ToSqlLiteral>::sql_type(), SqlType::SmallInt);
        assert_eq!(<i8 as ToSqlLiteral>::sql_type(), SqlType::SmallInt);

        assert_eq!(1i64.to_literal(), "1");
        assert_eq!((-42i32).to_literal(), "-42");
        assert_eq!(1i16.to_literal(), "1");
        assert_eq!(1i8.to_literal(), "1");
    }

    #[test]
    fn test_floats_finite() {
        assert_eq!(<f32 as ToSqlLiteral>::sql_type(), SqlType::Real);
        assert_eq!(<f64 as ToSqlLiteral>::sql_type(), SqlType::DoublePrecision);
        assert_eq!(1.532f32.to_literal(), "1.532");
        assert_eq!(1.532532f64.to_literal(), "1.532532");
        assert_eq!(0.1f32.to_literal(), "0.1");
        assert_eq!((-2.5f32).to_literal(), "-2.5");
        assert_eq!(1.0f64.to_literal(), "1");
    }

    #[test]
    fn test_floats_non_finite() {
        assert_eq!(f32::NAN.to_literal(), "'NaN'");
        assert_eq!(f64::NAN.to_literal(), "'NaN'");
        assert_eq!(f32::INFINITY.to_literal(), "'infinity'");
        assert_eq!(f64::INFINITY.to_literal(), "'infinity'");
        assert_eq!(f32::NEG_INFINITY.to_literal(), "'-infinity'");
        assert_eq!(f64::NEG_INFINITY.to_literal(), "'-infinity'");
    }

    #[test]
    fn test_strings() {
        assert_eq!(<String as ToSqlLiteral>::sql_type(), SqlType::Text);
        assert_eq!("ABC".to_literal(), "'ABC'");
        assert_eq!("".to_literal(), "''");
        assert_eq!("'ab'cd'ef'".to_literal(), "'''ab''cd''ef'''");
        assert_eq!(String::from("it's").to_literal(), "'it''s'");
    }

    #[test]
    fn test_uuid() {
        let id = Uuid::nil();
        assert_eq!(<Uuid as ToSqlLiteral>::sql_type(), SqlType::Uuid);
        assert_eq!(id.to_literal(), "'00000000-0000-0000-0000-000000000000'");
    }

    #[test]
    fn test_temporals() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(<NaiveDate as ToSqlLiteral>::sql_type(), SqlType::Date);
        assert_eq!(date.to_literal(), "'2024-03-09'");

        let ts = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(
            <DateTime<Utc> as ToSqlLiteral>::sql_type(),
            SqlType::TimestampWithTimeZone(None)
        );
        assert_eq!(ts.to_literal(), "'2024-03-09T12:00:00+00:00'");
    }
}
