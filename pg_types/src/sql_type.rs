//! PostgreSQL type descriptors
//!
//! This module defines the closed set of column types known to rowforge and
//! their DDL spellings.

use serde::{Deserialize, Serialize};

/// The fields accepted by the interval type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntervalField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    YearToMonth,
    DayToHour,
    DayToMinute,
    DayToSecond,
    HourToMinute,
    HourToSecond,
    MinuteToSecond,
}

impl IntervalField {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalField::Year => "YEAR",
            IntervalField::Month => "MONTH",
            IntervalField::Day => "DAY",
            IntervalField::Hour => "HOUR",
            IntervalField::Minute => "MINUTE",
            IntervalField::Second => "SECOND",
            IntervalField::YearToMonth => "YEAR TO MONTH",
            IntervalField::DayToHour => "DAY TO HOUR",
            IntervalField::DayToMinute => "DAY TO MINUTE",
            IntervalField::DayToSecond => "DAY TO SECOND",
            IntervalField::HourToMinute => "HOUR TO MINUTE",
            IntervalField::HourToSecond => "HOUR TO SECOND",
            IntervalField::MinuteToSecond => "MINUTE TO SECOND",
        }
    }
}

/// All PostgreSQL column types rowforge can describe. Where a type takes a
/// parameter, e.g. `varchar(n)`, it is carried as payload.
///
/// Not every descriptor has a dedicated Rust wrapper; only the most common or
/// best-practice ones do. `character(n)` for example has no wrapper as `text`
/// does everything it does with no performance penalty in PostgreSQL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SqlType {
    Boolean,
    SmallInt,
    Integer,
    BigInt,
    Real,
    DoublePrecision,
    SmallSerial,
    Serial,
    BigSerial,
    Money,

    /// (precision, scale). Values of 0 imply the maximum possible.
    Numeric(u32, u32),

    /// `Varchar(0)` implies a string of any length. `Character(0)` renders
    /// the bare type name. `Text` is a PostgreSQL extension equivalent to
    /// `Varchar(0)`, and the two compare equal.
    Varchar(u32),
    Character(u32),
    Text,

    Bytea,

    /// Sub-second precision can be 0-6. `None` implies the default (no bound).
    TimestampWithoutTimeZone(Option<u32>),
    TimestampWithTimeZone(Option<u32>),
    TimeWithoutTimeZone(Option<u32>),
    TimeWithTimeZone(Option<u32>),
    Date,
    Interval(IntervalField, Option<u32>),

    // Geometric types
    Point,
    Line,
    LineSegment,
    Box,
    Path,
    Polygon,
    Circle,

    // Network types
    Cidr,
    Inet,
    MacAddress,

    /// Bit vector types. A `Bit` width below 1 clamps to 1.
    Bit(u32),
    BitVarying(u32),

    // Full text search types
    TextSearchVector,
    TextSearchQuery,

    Uuid,

    // Structured document types
    Xml,
    Json,
    Jsonb,

    /// An array of the inner type, of optional fixed length.
    /// Nest for multi-dimensional arrays.
    Array(std::boxed::Box<SqlType>, Option<u32>),
}

impl SqlType {
    /// Maximum total digits of the numeric type.
    pub const MAX_NUMERIC_PRECISION: u32 = 147_455;
    /// Maximum fractional digits of the numeric type.
    pub const MAX_NUMERIC_SCALE: u32 = 16_383;

    /// The DDL spelling of this type. Total and pure: parameters render only
    /// when they differ from the implicit default.
    pub fn ddl(&self) -> String {
        match self {
            SqlType::Boolean => "boolean".to_string(),
            SqlType::SmallInt => "smallint".to_string(),
            SqlType::Integer => "integer".to_string(),
            SqlType::BigInt => "bigint".to_string(),
            SqlType::Real => "real".to_string(),
            SqlType::DoublePrecision => "double precision".to_string(),
            SqlType::SmallSerial => "smallserial".to_string(),
            SqlType::Serial => "serial".to_string(),
            SqlType::BigSerial => "bigserial".to_string(),
            SqlType::Money => "money".to_string(),
            SqlType::Numeric(precision, scale) => {
                if *precision == 0 && *scale == 0 {
                    "numeric".to_string()
                } else if *scale == 0 {
                    format!("numeric({})", precision)
                } else {
                    format!("numeric({}, {})", precision, scale)
                }
            }
            SqlType::Varchar(n) => {
                if *n == 0 || *n == u32::MAX {
                    "character varying".to_string()
                } else {
                    format!("character varying({})", n)
                }
            }
            SqlType::Character(n) => {
                if *n == 0 {
                    "character".to_string()
                } else {
                    format!("character({})", n)
                }
            }
            SqlType::Text => "text".to_string(),
            SqlType::Bytea => "bytea".to_string(),
            SqlType::TimestampWithoutTimeZone(p) => match p {
                Some(precision) => {
                    format!("timestamp({}) without time zone", precision.min(&6))
                }
                None => "timestamp without time zone".to_string(),
            },
            SqlType::TimestampWithTimeZone(p) => match p {
                Some(precision) => {
                    format!("timestamp({}) with time zone", precision.min(&6))
                }
                None => "timestamp with time zone".to_string(),
            },
            SqlType::TimeWithoutTimeZone(p) => match p {
                Some(precision) => format!("time({}) without time zone", precision.min(&6)),
                None => "time without time zone".to_string(),
            },
            SqlType::TimeWithTimeZone(p) => match p {
                Some(precision) => format!("time({}) with time zone", precision.min(&6)),
                None => "time with time zone".to_string(),
            },
            SqlType::Date => "date".to_string(),
            SqlType::Interval(field, p) => match p {
                Some(precision) => format!("interval {}({})", field.as_str(), precision.min(&6)),
                None => format!("interval {}", field.as_str()),
            },
            SqlType::Point => "point".to_string(),
            SqlType::Line => "line".to_string(),
            SqlType::LineSegment => "lseg".to_string(),
            SqlType::Box => "box".to_string(),
            SqlType::Path => "path".to_string(),
            SqlType::Polygon => "polygon".to_string(),
            SqlType::Circle => "circle".to_string(),
            SqlType::Cidr => "cidr".to_string(),
            SqlType::Inet => "inet".to_string(),
            SqlType::MacAddress => "macaddr".to_string(),
            SqlType::Bit(n) => {
                if *n <= 1 {
                    "bit(1)".to_string()
                } else {
                    format!("bit({})", n)
                }
            }
            SqlType::BitVarying(n) => {
                if *n == 0 {
                    "bit varying".to_string()
                } else {
                    format!("bit varying({})", n)
                }
            }
            SqlType::TextSearchVector => "tsvector".to_string(),
            SqlType::TextSearchQuery => "tsquery".to_string(),
            SqlType::Uuid => "uuid".to_string(),
            SqlType::Xml => "xml".to_string(),
            SqlType::Json => "json".to_string(),
            SqlType::Jsonb => "jsonb".to_string(),
            SqlType::Array(inner, length) => match length {
                Some(n) if *n > 0 => format!("{}[{}]", inner.ddl(), n),
                _ => format!("{}[]", inner.ddl()),
            },
        }
    }
}

/// Structural equality, with one special case: `Text` and unbounded
/// `Varchar(0)` compare equal in both directions as both render to an
/// unbounded text column.
impl PartialEq for SqlType {
    fn eq(&self, other: &Self) -> bool {
        use SqlType::*;
        match (self, other) {
            (Boolean, Boolean) => true,
            (SmallInt, SmallInt) => true,
            (Integer, Integer) => true,
            (BigInt, BigInt) => true,
            (Real, Real) => true,
            (DoublePrecision, DoublePrecision) => true,
            (SmallSerial, SmallSerial) => true,
            (Serial, Serial) => true,
            (BigSerial, BigSerial) => true,
            (Money, Money) => true,
            (Numeric(p1, s1), Numeric(p2, s2)) => p1 == p2 && s1 == s2,
            (Varchar(n1), Varchar(n2)) => n1 == n2,
            (Character(n1), Character(n2)) => n1 == n2,
            (Text, Text) => true,
            (Bytea, Bytea) => true,
            (TimestampWithoutTimeZone(p1), TimestampWithoutTimeZone(p2)) => p1 == p2,
            (TimestampWithTimeZone(p1), TimestampWithTimeZone(p2)) => p1 == p2,
            (TimeWithoutTimeZone(p1), TimeWithoutTimeZone(p2)) => p1 == p2,
            (TimeWithTimeZone(p1), TimeWithTimeZone(p2)) => p1 == p2,
            (Date, Date) => true,
            (Interval(f1, p1), Interval(f2, p2)) => f1 == f2 && p1 == p2,
            (Point, Point) => true,
            (Line, Line) => true,
            (LineSegment, LineSegment) => true,
            (Box, Box) => true,
            (Path, Path) => true,
            (Polygon, Polygon) => true,
            (Circle, Circle) => true,
            (Cidr, Cidr) => true,
            (Inet, Inet) => true,
            (MacAddress, MacAddress) => true,
            (Bit(n1), Bit(n2)) => n1 == n2,
            (BitVarying(n1), BitVarying(n2)) => n1 == n2,
            (TextSearchVector, TextSearchVector) => true,
            (TextSearchQuery, TextSearchQuery) => true,
            (Uuid, Uuid) => true,
            (Xml, Xml) => true,
            (Json, Json) => true,
            (Jsonb, Jsonb) => true,
            (Array(t1, l1), Array(t2, l2)) => t1 == t2 && l1 == l2,

            (Text, Varchar(n)) | (Varchar(n), Text) => *n == 0,

            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_ddl() {
        assert_eq!(SqlType::Boolean.ddl(), "boolean");
        assert_eq!(SqlType::SmallInt.ddl(), "smallint");
        assert_eq!(SqlType::Integer.ddl(), "integer");
        assert_eq!(SqlType::BigInt.ddl(), "bigint");
        assert_eq!(SqlType::Real.ddl(), "real");
        assert_eq!(SqlType::DoublePrecision.ddl(), "double precision");
        assert_eq!(SqlType::BigSerial.ddl(), "bigserial");
        assert_eq!(SqlType::Money.ddl(), "money");
        assert_eq!(SqlType::Bytea.ddl(), "bytea");
        assert_eq!(SqlType::Uuid.ddl(), "uuid");
        assert_eq!(SqlType::LineSegment.ddl(), "lseg");
        assert_eq!(SqlType::MacAddress.ddl(), "macaddr");
        assert_eq!(SqlType::TextSearchVector.ddl(), "tsvector");
        assert_eq!(SqlType::Jsonb.ddl(), "jsonb");
    }

    #[test]
    fn test_parametrized_ddl_defaults() {
        // Bare spellings when the parameter is the implicit default
        assert_eq!(SqlType::Numeric(0, 0).ddl(), "numeric");
        assert_eq!(SqlType::Numeric(10, 0).ddl(), "numeric(10)");
        assert_eq!(SqlType::Numeric(10, 2).ddl(), "numeric(10, 2)");
        assert_eq!(SqlType::Varchar(0).ddl(), "character varying");
        assert_eq!(SqlType::Varchar(u32::MAX).ddl(), "character varying");
        assert_eq!(SqlType::Varchar(20).ddl(), "character varying(20)");
        assert_eq!(SqlType::Character(0).ddl(), "character");
        assert_eq!(SqlType::Character(8).ddl(), "character(8)");
        assert_eq!(SqlType::BitVarying(0).ddl(), "bit varying");
        assert_eq!(SqlType::BitVarying(3).ddl(), "bit varying(3)");
    }

    #[test]
    fn test_bit_clamps_to_minimum_width() {
        assert_eq!(SqlType::Bit(0).ddl(), "bit(1)");
        assert_eq!(SqlType::Bit(1).ddl(), "bit(1)");
        assert_eq!(SqlType::Bit(16).ddl(), "bit(16)");
    }

    #[test]
    fn test_temporal_precision_clamped() {
        assert_eq!(
            SqlType::TimestampWithTimeZone(None).ddl(),
            "timestamp with time zone"
        );
        assert_eq!(
            SqlType::TimestampWithTimeZone(Some(3)).ddl(),
            "timestamp(3) with time zone"
        );
        assert_eq!(
            SqlType::TimestampWithoutTimeZone(Some(9)).ddl(),
            "timestamp(6) without time zone"
        );
        assert_eq!(SqlType::TimeWithTimeZone(Some(0)).ddl(), "time(0) with time zone");
        assert_eq!(
            SqlType::TimeWithoutTimeZone(None).ddl(),
            "time without time zone"
        );
    }

    #[test]
    fn test_interval_ddl() {
        assert_eq!(
            SqlType::Interval(IntervalField::Day, None).ddl(),
            "interval DAY"
        );
        assert_eq!(
            SqlType::Interval(IntervalField::DayToSecond, Some(4)).ddl(),
            "interval DAY TO SECOND(4)"
        );
        assert_eq!(
            SqlType::Interval(IntervalField::Second, Some(7)).ddl(),
            "interval SECOND(6)"
        );
    }

    #[test]
    fn test_array_ddl_recursive() {
        let ints = SqlType::Array(Box::new(SqlType::Integer), None);
        assert_eq!(ints.ddl(), "integer[]");

        let sized = SqlType::Array(Box::new(SqlType::Text), Some(4));
        assert_eq!(sized.ddl(), "text[4]");

        // Zero length renders unbounded
        let zero = SqlType::Array(Box::new(SqlType::Text), Some(0));
        assert_eq!(zero.ddl(), "text[]");

        let nested = SqlType::Array(
            Box::new(SqlType::Array(Box::new(SqlType::BigInt), Some(2))),
            None,
        );
        assert_eq!(nested.ddl(), "bigint[2][]");
    }

    #[test]
    fn test_ddl_is_pure() {
        let a = SqlType::Numeric(12, 4);
        let b = SqlType::Numeric(12, 4);
        assert_eq!(a, b);
        assert_eq!(a.ddl(), b.ddl());
        assert_eq!(a.ddl(), a.ddl());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(SqlType::Varchar(5), SqlType::Varchar(5));
        assert_ne!(SqlType::Varchar(5), SqlType::Varchar(6));
        assert_ne!(SqlType::Integer, SqlType::BigInt);
        assert_eq!(
            SqlType::Array(Box::new(SqlType::Integer), None),
            SqlType::Array(Box::new(SqlType::Integer), None)
        );
        assert_ne!(
            SqlType::Array(Box::new(SqlType::Integer), None),
            SqlType::Array(Box::new(SqlType::Integer), Some(2))
        );
    }

    #[test]
    fn test_text_equals_unbounded_varchar_both_directions() {
        assert_eq!(SqlType::Text, SqlType::Varchar(0));
        assert_eq!(SqlType::Varchar(0), SqlType::Text);
        assert_ne!(SqlType::Text, SqlType::Varchar(1));
        assert_ne!(SqlType::Varchar(1), SqlType::Text);
    }
}
