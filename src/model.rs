//! The model contract
//!
//! A persistent type declares its table and an ordered field schema; the
//! mapper derives statements from that declaration. Field order is
//! significant: it fixes the column order and therefore the positional
//! parameter numbering of every generated statement.

use pg_types::ToSqlLiteral;

/// One declared column slot: a name, a literal-encodable payload, and the
/// orthogonal flags describing how the column is treated.
pub struct Field {
    name: String,
    nullable: bool,
    identity: bool,
    value: Option<Box<dyn ToSqlLiteral>>,
}

impl Field {
    /// A non-nullable data column.
    pub fn required(name: impl Into<String>, value: impl ToSqlLiteral + 'static) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            identity: false,
            value: Some(Box::new(value)),
        }
    }

    /// A nullable data column. An absent value encodes as the SQL null
    /// literal.
    pub fn nullable<T: ToSqlLiteral + 'static>(name: impl Into<String>, value: Option<T>) -> Self {
        Self {
            name: name.into(),
            nullable: true,
            identity: false,
            value: value.map(|v| Box::new(v) as Box<dyn ToSqlLiteral>),
        }
    }

    /// The identity column. Never included in the column/value list the
    /// mapper submits; the server generates its value.
    pub fn identity(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nullable: false,
            identity: true,
            value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn is_identity(&self) -> bool {
        self.identity
    }

    /// The literal text for this field's current value.
    pub fn literal(&self) -> String {
        match &self.value {
            Some(value) => value.to_literal(),
            None => "null".to_string(),
        }
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("nullable", &self.nullable)
            .field("identity", &self.identity)
            .field("literal", &self.literal())
            .finish()
    }
}

/// A type that can be represented as a row of a database table.
///
/// Implementers return their persisted fields in declaration order from
/// [`Model::fields`]. The identity column is a server-generated bigserial
/// exposed through [`Model::id`] and written back by the mapper after a
/// successful insert.
pub trait Model {
    /// The table backing this model.
    fn table_name() -> String
    where
        Self: Sized;

    /// The persisted fields, in declaration order.
    fn fields(&self) -> Vec<Field>;

    /// The assigned identity, or `None` if the object has never been saved.
    fn id(&self) -> Option<i64>;

    /// Record the server-generated identity after an insert.
    fn assign_id(&mut self, id: i64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_types::Numeric;

    #[test]
    fn test_required_field() {
        let field = Field::required("qty", 3i32);
        assert_eq!(field.name(), "qty");
        assert!(!field.is_nullable());
        assert!(!field.is_identity());
        assert_eq!(field.literal(), "3");
    }

    #[test]
    fn test_nullable_field_delegates_or_renders_null() {
        let present = Field::nullable("note", Some("hi".to_string()));
        assert_eq!(present.literal(), "'hi'");
        assert!(present.is_nullable());

        let absent = Field::nullable::<String>("note", None);
        assert_eq!(absent.literal(), "null");
    }

    #[test]
    fn test_identity_field() {
        let id = Field::identity("id");
        assert!(id.is_identity());
        assert_eq!(id.literal(), "null");
    }

    #[test]
    fn test_field_holds_wrapper_types() {
        let price = Field::required("price", Numeric::new("12", Some("50".to_string())));
        assert_eq!(price.literal(), "12.50");
    }
}
