//! Array values
//!
//! A wrapper for a PostgreSQL array of any literal-encodable element type.
//! Nest `SqlArray` inside itself for multi-dimensional arrays.

use crate::literal::ToSqlLiteral;
use crate::sql_type::SqlType;

/// An ordered sequence of values sharing one element type.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlArray<T: ToSqlLiteral> {
    elements: Vec<T>,
}

impl<T: ToSqlLiteral> SqlArray<T> {
    pub fn new(elements: Vec<T>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }
}

impl<T: ToSqlLiteral> From<Vec<T>> for SqlArray<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T: ToSqlLiteral> ToSqlLiteral for SqlArray<T> {
    fn sql_type() -> SqlType {
        SqlType::Array(Box::new(T::sql_type()), None)
    }

    fn to_literal(&self) -> String {
        let elements: Vec<String> = self.elements.iter().map(T::to_literal).collect();

        // Inner array literals already carry braces and must not gain quote
        // marks; every other element literal is double quoted.
        let nested = matches!(T::sql_type(), SqlType::Array(_, _));
        let quoted: Vec<String> = if nested {
            elements
        } else {
            elements.into_iter().map(|e| format!("\"{}\"", e)).collect()
        };

        let body = format!("{{{}}}", quoted.join(","));

        // Strip all inner single quotes. A no-op for one-dimensional arrays
        // of unquoted literals; only the outermost level is quoted.
        format!("'{}'", body.replace('\'', ""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INT_BODY: &str = "{\"1\",\"2\",\"3\"}";
    const STR_BODY: &str = "{\"ab,c\",\"de,f\",\"gh,i\"}";

    fn ints() -> SqlArray<i64> {
        SqlArray::new(vec![1, 2, 3])
    }

    fn strings() -> SqlArray<String> {
        SqlArray::new(vec!["ab,c".into(), "de,f".into(), "gh,i".into()])
    }

    #[test]
    fn test_sql_type_composes() {
        assert_eq!(
            <SqlArray<i64> as ToSqlLiteral>::sql_type(),
            SqlType::Array(Box::new(SqlType::BigInt), None)
        );
        assert_eq!(
            <SqlArray<SqlArray<i64>> as ToSqlLiteral>::sql_type(),
            SqlType::Array(Box::new(SqlType::Array(Box::new(SqlType::BigInt), None)), None)
        );
        assert_eq!(
            <SqlArray<SqlArray<SqlArray<i64>>> as ToSqlLiteral>::sql_type(),
            SqlType::Array(
                Box::new(SqlType::Array(
                    Box::new(SqlType::Array(Box::new(SqlType::BigInt), None)),
                    None
                )),
                None
            )
        );
    }

    #[test]
    fn test_empty_array() {
        let empty: SqlArray<i64> = SqlArray::new(vec![]);
        assert_eq!(empty.to_literal(), "'{}'");
    }

    #[test]
    fn test_one_dimensional() {
        assert_eq!(ints().to_literal(), format!("'{}'", INT_BODY));
        assert_eq!(strings().to_literal(), format!("'{}'", STR_BODY));
    }

    #[test]
    fn test_two_dimensional() {
        let two_d = SqlArray::new(vec![ints(), ints(), ints()]);
        let expected = format!("'{{{0},{0},{0}}}'", INT_BODY);
        assert_eq!(two_d.to_literal(), expected);

        let two_d_str = SqlArray::new(vec![strings(), strings(), strings()]);
        let expected = format!("'{{{0},{0},{0}}}'", STR_BODY);
        assert_eq!(two_d_str.to_literal(), expected);
    }

    #[test]
    fn test_three_dimensional() {
        let two_d = SqlArray::new(vec![ints(), ints(), ints()]);
        let three_d = SqlArray::new(vec![two_d.clone(), two_d.clone(), two_d]);

        let level2 = format!("{{{0},{0},{0}}}", INT_BODY);
        let expected = format!("'{{{0},{0},{0}}}'", level2);
        assert_eq!(three_d.to_literal(), expected);
    }

    #[test]
    fn test_inner_levels_carry_no_quote_marks() {
        let nested = SqlArray::new(vec![
            SqlArray::new(vec!["a".to_string(), "b".to_string()]),
            SqlArray::new(vec!["c".to_string(), "d".to_string()]),
        ]);
        let literal = nested.to_literal();
        assert_eq!(literal, "'{{\"a\",\"b\"},{\"c\",\"d\"}}'");
        // Only the outermost wrapping is single quoted
        assert_eq!(literal.matches('\'').count(), 2);
        assert!(literal.starts_with('\''));
        assert!(literal.ends_with('\''));
    }
}
