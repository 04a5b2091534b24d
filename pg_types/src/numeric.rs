//! Exact decimal values
//!
//! PostgreSQL's numeric type is designed to be exact. It has two bounds:
//! scale, the number of digits after the decimal point (maximum 16383), and
//! precision, the total number of digits (maximum 147455). This
//! implementation allows (and assumes) maximum scale and precision.
//!
//! Where a value carries more fractional digits than the maximum scale, the
//! least significant digits are dropped. Where the total number of digits
//! exceeds the maximum precision, the fractional part is budgeted first, then
//! the integer part is truncated from its most significant digit. Truncation
//! never rounds.
//!
//! For example the number
//! `123[... 131071 digits ...].[... 16381 digits ...]123`
//! encodes as
//! `3[... 131071 digits ...].[... 16381 digits ...]12`.

use crate::literal::ToSqlLiteral;
use crate::sql_type::SqlType;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed numeric literal `{0}`: expected at most one decimal separator")]
pub struct NumericParseError(pub String);

/// An arbitrary-precision base-10 value stored as digit strings.
///
/// As a reference implementation of the numeric type this deliberately has no
/// conversion from `f32` or `f64`, as those types are inherently inexact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeric {
    integer_part: String,
    fractional_part: Option<String>,
}

impl Numeric {
    /// Construct from raw digit strings. Does not validate that the strings
    /// are digit-only; incorrect formats surface as database transaction
    /// errors.
    pub fn new(integer_part: impl Into<String>, fractional_part: Option<String>) -> Self {
        Self {
            integer_part: integer_part.into(),
            fractional_part,
        }
    }

    /// Parse a number of the form `123` or `12.321`. More than one decimal
    /// separator is rejected. Digit content is still not validated.
    pub fn parse(number: &str) -> Result<Self, NumericParseError> {
        let mut parts = number.split('.');
        let integer_part = parts.next().unwrap_or_default().to_string();
        let fractional_part = parts.next().map(str::to_string);
        if parts.next().is_some() {
            return Err(NumericParseError(number.to_string()));
        }
        Ok(Self {
            integer_part,
            fractional_part,
        })
    }

    pub fn integer_part(&self) -> &str {
        &self.integer_part
    }

    pub fn fractional_part(&self) -> Option<&str> {
        self.fractional_part.as_deref()
    }
}

impl FromStr for Numeric {
    type Err = NumericParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl ToSqlLiteral for Numeric {
    fn sql_type() -> SqlType {
        SqlType::Numeric(0, 0)
    }

    fn to_literal(&self) -> String {
        let precision = SqlType::MAX_NUMERIC_PRECISION as usize;
        let scale = SqlType::MAX_NUMERIC_SCALE as usize;

        // Truncation counts characters, not bytes, so unvalidated non-ASCII
        // input cannot split a character
        let Some(fractional) = &self.fractional_part else {
            // Keep the most significant digits
            return self.integer_part.chars().take(precision).collect();
        };

        // The fractional part is budgeted first, dropping trailing digits
        let used = scale.min(fractional.chars().count());
        let fractional_trimmed: String = fractional.chars().take(used).collect();

        // Whatever budget remains goes to the integer part, dropping leading
        // digits
        let remaining = precision - used;
        let drop = self.integer_part.chars().count().saturating_sub(remaining);
        let integer_trimmed: String = self.integer_part.chars().skip(drop).collect();

        format!("{}.{}", integer_trimmed, fractional_trimmed)
    }
}
