//! Operation outcomes
//!
//! Closed result types for the connect, validate, save, fetch, and erase
//! operations. Failure diagnostics are descriptive only and deliberately do
//! not participate in equality; structural content (row counts, variant) does.

use pg_types::SqlType;
use std::collections::HashMap;

/// Tables mapped to the columns of interest within them. Used both for extra
/// structure found on top of the model (validation success) and structure the
/// model requires but the database lacks (validation failure).
pub type SchemaDiff = HashMap<String, Vec<(String, SqlType)>>;

/// The result of a save operation.
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    /// The object was persisted to the connected database.
    Saved,
    /// The save failed; the database is left in the state it was in before
    /// the operation was requested. The diagnostic describes the reason.
    Failed(String),
}

/// The result of a fetch operation. Equality considers only the number of
/// returned rows.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// The matching rows, possibly none, as text columns.
    Fetched(Vec<Vec<String>>),
    Failed(String),
}

/// The result of an erase operation. Equality considers the erased count.
#[derive(Debug, Clone)]
pub enum EraseOutcome {
    /// The number of rows erased.
    Erased(u64),
    /// Nothing was erased.
    Failed(String),
}

/// The result of validating the connected database against the registered
/// models.
#[derive(Debug, Clone)]
pub enum ValidationOutcome {
    /// The database has at least the required tables and columns. The diff
    /// holds any additional tables and columns found on top of the model,
    /// useful when planning migrations for a live service.
    Valid(SchemaDiff),
    /// The database is missing tables and/or columns the model requires. The
    /// diff holds what is missing. Applications are encouraged to terminate
    /// when validation fails.
    Invalid(SchemaDiff),
}

/// The result of a connection attempt.
#[derive(Debug, Clone)]
pub enum ConnectOutcome {
    /// Connected and validated; carries the validation outcome.
    Connected(ValidationOutcome),
    /// The connection could not be established.
    Failed(String),
    /// Connected, but validation against the registered models failed. The
    /// connection is discarded; migrations need to be run first.
    FailedValidation(ValidationOutcome),
    /// No models are registered, so no database is required and no connection
    /// was attempted.
    Unnecessary,
    /// No connection was attempted because the native pointer width is not
    /// 64 bits, which rowforge requires for identity values.
    Not64Bit,
}

impl PartialEq for SaveOutcome {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (SaveOutcome::Saved, SaveOutcome::Saved)
                | (SaveOutcome::Failed(_), SaveOutcome::Failed(_))
        )
    }
}

impl PartialEq for FetchOutcome {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FetchOutcome::Fetched(a), FetchOutcome::Fetched(b)) => a.len() == b.len(),
            (FetchOutcome::Failed(_), FetchOutcome::Failed(_)) => true,
            _ => false,
        }
    }
}

impl PartialEq for EraseOutcome {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (EraseOutcome::Erased(a), EraseOutcome::Erased(b)) => a == b,
            (EraseOutcome::Failed(_), EraseOutcome::Failed(_)) => true,
            _ => false,
        }
    }
}

impl PartialEq for ValidationOutcome {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (ValidationOutcome::Valid(_), ValidationOutcome::Valid(_))
                | (ValidationOutcome::Invalid(_), ValidationOutcome::Invalid(_))
        )
    }
}

impl PartialEq for ConnectOutcome {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (ConnectOutcome::Connected(_), ConnectOutcome::Connected(_))
                | (ConnectOutcome::Failed(_), ConnectOutcome::Failed(_))
                | (
                    ConnectOutcome::FailedValidation(_),
                    ConnectOutcome::FailedValidation(_)
                )
                | (ConnectOutcome::Unnecessary, ConnectOutcome::Unnecessary)
                | (ConnectOutcome::Not64Bit, ConnectOutcome::Not64Bit)
        )
    }
}
