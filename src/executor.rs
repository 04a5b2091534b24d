//! The statement execution collaborator
//!
//! rowforge never talks to the wire itself; it hands conninfo strings,
//! prepared-statement registrations, and positional literal parameters to an
//! implementation of [`StatementExecutor`] and reads results back through
//! [`RowSet`].

/// Descriptive failure text from the collaborator. Informational only; it
/// never participates in outcome equality.
pub type Diagnostic = String;

/// The narrow contract rowforge requires of a database transport.
pub trait StatementExecutor: Send + Sync {
    /// Open the connection described by a conninfo string of `key='value'`
    /// pairs.
    fn connect(&mut self, conninfo: &str) -> Result<(), Diagnostic>;

    /// Register a named prepared statement with the given parameter count.
    fn prepare(&self, name: &str, sql: &str, n_params: usize) -> Result<(), Diagnostic>;

    /// Whether a statement of this name is already registered server-side.
    fn statement_exists(&self, name: &str) -> bool;

    /// Execute a previously registered statement, substituting the literal
    /// parameter texts positionally.
    fn execute(&self, name: &str, params: &[String]) -> Result<RowSet, Diagnostic>;
}

/// The rows and affected-row count returned by an execution. Every column is
/// exposed as text; the first row's first column is how generated identities
/// are read back.
#[derive(Debug, Clone, Default)]
pub struct RowSet {
    rows: Vec<Vec<String>>,
    affected: u64,
}

impl RowSet {
    pub fn new(rows: Vec<Vec<String>>, affected: u64) -> Self {
        Self { rows, affected }
    }

    /// The first column of the first row, if any.
    pub fn first_value(&self) -> Option<&str> {
        self.rows.first().and_then(|row| row.first()).map(String::as_str)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn affected(&self) -> u64 {
        self.affected
    }
}
