//! # Rowforge
//!
//! A Rust object-to-PostgreSQL mapping library with exact SQL literal
//! encoding, derived prepared statements, and schema validation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rowforge::prelude::*;
//!
//! pub struct User {
//!     pub id: Option<i64>,
//!     pub name: String,
//!     pub balance: Numeric,
//! }
//!
//! impl Model for User {
//!     fn table_name() -> String {
//!         "users".to_string()
//!     }
//!
//!     fn fields(&self) -> Vec<Field> {
//!         vec![
//!             Field::identity("id"),
//!             Field::required("name", self.name.clone()),
//!             Field::required("balance", self.balance.clone()),
//!         ]
//!     }
//!
//!     fn id(&self) -> Option<i64> {
//!         self.id
//!     }
//!
//!     fn assign_id(&mut self, id: i64) {
//!         self.id = Some(id);
//!     }
//! }
//!
//! fn main() {
//!     let mut session = Rowforge::new();
//!     session.register::<User>();
//!
//!     // Without a connection, saves derive statements and assign a
//!     // sentinel identity.
//!     let mut user = User {
//!         id: None,
//!         name: "John Doe".to_string(),
//!         balance: Numeric::new("100", Some("25".to_string())),
//!     };
//!     assert_eq!(session.save(&mut user), SaveOutcome::Saved);
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod executor;
pub mod model;
pub mod outcome;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::{Rowforge, SavePlan};
pub use errors::RowforgeError;
pub use executor::{Diagnostic, RowSet, StatementExecutor};
pub use model::{Field, Model};
pub use outcome::{
    ConnectOutcome, EraseOutcome, FetchOutcome, SaveOutcome, SchemaDiff, ValidationOutcome,
};

// Re-export centralized config
pub use config::{AppConfig, ConnectionParameter, DatabaseConfig, SslMode};

// Re-export internal crates used in the public API
pub use config;
pub use pg_types;
