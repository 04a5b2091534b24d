//! Core rowforge functionality
//!
//! This module contains the [`Rowforge`] session struct: the explicit context
//! that owns the execution collaborator, the prepared-statement cache, and
//! the model registry, and that derives, registers, and executes the
//! statements that persist model objects.

use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::sync::Mutex;

use config::ConnectionParameter;

use crate::debug_log;
use crate::errors::RowforgeError;
use crate::executor::StatementExecutor;
use crate::model::Model;
use crate::outcome::{
    ConnectOutcome, EraseOutcome, FetchOutcome, SaveOutcome, SchemaDiff, ValidationOutcome,
};

/// The identity assigned by dry-run saves in place of a server-generated one.
const DRY_RUN_ID: i64 = 1;

/// The metadata statement prepared at connect time and used by validation.
const TABLE_INFORMATION: (&str, &str, usize) = (
    "TABLE_INFORMATION",
    "SELECT table_name FROM information_schema.tables WHERE table_schema = $1 AND table_type = 'BASE TABLE'",
    1,
);

/// The statement identity and text derived for one save shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavePlan {
    /// Deterministic key over (operation, table, ordered column list).
    pub name: String,
    /// The parameterized statement text.
    pub statement: String,
    /// Number of positional parameters, including the trailing identity
    /// parameter of an UPDATE.
    pub n_params: usize,
}

/// A database session: the connection collaborator, the statement cache, and
/// the registered models. Sessions are independent; a process may hold any
/// number of them.
pub struct Rowforge {
    executor: Option<Box<dyn StatementExecutor>>,
    statements: Mutex<HashSet<String>>,
    models: Vec<String>,
}

impl Default for Rowforge {
    fn default() -> Self {
        Self::new()
    }
}

impl Rowforge {
    /// Create a disconnected session. Saves run in dry-run mode (statement
    /// derivation only, sentinel identity) until [`Rowforge::connect`]
    /// succeeds.
    pub fn new() -> Self {
        Self {
            executor: None,
            statements: Mutex::new(HashSet::new()),
            models: Vec::new(),
        }
    }

    /// Adopt an already-open execution collaborator.
    pub fn with_executor(executor: Box<dyn StatementExecutor>) -> Self {
        Self {
            executor: Some(executor),
            statements: Mutex::new(HashSet::new()),
            models: Vec::new(),
        }
    }

    /// Register a model type with this session. Only registered models are
    /// considered by validation, and a session with no registered models does
    /// not require a database at all.
    pub fn register<M: Model>(&mut self) {
        let table = M::table_name();
        if !self.models.contains(&table) {
            self.models.push(table);
        }
    }

    pub fn is_connected(&self) -> bool {
        self.executor.is_some()
    }

    /// Attempt a connection described by the parameter set. Each parameter
    /// key may appear at most once; duplicates are rejected before any
    /// connection attempt. On success the registered models are validated
    /// against the database; a connection that fails validation is discarded.
    pub fn connect(
        &mut self,
        parameters: &[ConnectionParameter],
        mut executor: Box<dyn StatementExecutor>,
    ) -> ConnectOutcome {
        // Identity values are 64-bit
        if std::mem::size_of::<usize>() != 8 {
            return ConnectOutcome::Not64Bit;
        }

        if self.models.is_empty() {
            return ConnectOutcome::Unnecessary;
        }

        let conninfo = match config::conninfo(parameters) {
            Ok(conninfo) => conninfo,
            Err(e) => {
                return ConnectOutcome::Failed(
                    RowforgeError::Connection(e.to_string()).to_string(),
                );
            }
        };

        debug_log!("connecting with {} parameters", parameters.len());
        if let Err(reason) = executor.connect(&conninfo) {
            return ConnectOutcome::Failed(reason);
        }

        let (name, sql, n_params) = TABLE_INFORMATION;
        if let Err(reason) = executor.prepare(name, sql, n_params) {
            let error = RowforgeError::Prepare {
                statement: sql.to_string(),
                reason,
            };
            return ConnectOutcome::Failed(error.to_string());
        }

        let validation = Self::validate_with(executor.as_ref(), &self.models);
        if let ValidationOutcome::Invalid(_) = validation {
            return ConnectOutcome::FailedValidation(validation);
        }

        // Statement names are per-connection state
        let mut cache = lock(&self.statements);
        cache.clear();
        cache.insert(name.to_string());
        drop(cache);

        self.executor = Some(executor);
        ConnectOutcome::Connected(validation)
    }

    /// Drop the connection, if any, along with the statement cache.
    pub fn disconnect(&mut self) {
        self.executor = None;
        lock(&self.statements).clear();
    }

    /// Check that the connected database has at least the tables required by
    /// the registered models. Disconnected sessions validate trivially.
    pub fn validate(&self) -> ValidationOutcome {
        match &self.executor {
            Some(executor) => Self::validate_with(executor.as_ref(), &self.models),
            None => ValidationOutcome::Valid(SchemaDiff::new()),
        }
    }

    fn validate_with(executor: &dyn StatementExecutor, models: &[String]) -> ValidationOutcome {
        let existing: HashSet<String> =
            match executor.execute(TABLE_INFORMATION.0, &["public".to_string()]) {
                Ok(rows) => rows
                    .rows()
                    .iter()
                    .filter_map(|row| row.first().cloned())
                    .collect(),
                Err(_reason) => {
                    // Without the table listing every registered model counts
                    // as missing
                    debug_log!("table information query failed: {}", _reason);
                    HashSet::new()
                }
            };

        let missing: SchemaDiff = models
            .iter()
            .filter(|table| !existing.contains(*table))
            .map(|table| (table.clone(), Vec::new()))
            .collect();

        if missing.is_empty() {
            ValidationOutcome::Valid(SchemaDiff::new())
        } else {
            ValidationOutcome::Invalid(missing)
        }
    }

    /// Persist a model object: INSERT when it has never been saved, UPDATE
    /// when it already carries an identity. On a successful insert the
    /// server-generated identity is written back into the object.
    pub fn save<M: Model>(&self, model: &mut M) -> SaveOutcome {
        self.save_with_plan(model).0
    }

    /// [`Rowforge::save`], additionally reporting the ordered (column,
    /// literal) pairs and the derived statement plan. With no collaborator
    /// attached this performs a dry run: derivation only, a sentinel identity
    /// of 1, and a successful outcome, which makes statement derivation
    /// testable without a live connection.
    pub fn save_with_plan<M: Model>(
        &self,
        model: &mut M,
    ) -> (SaveOutcome, Vec<(String, String)>, Option<SavePlan>) {
        let table = M::table_name();

        // The column names and literal values to submit, in declaration
        // order. The identity column is never submitted explicitly.
        let mut insertions: Vec<(String, String)> = Vec::new();
        for field in model.fields() {
            if field.is_identity() {
                continue;
            }
            let literal = field.literal();
            if field.name().is_empty() {
                let error = RowforgeError::Naming {
                    model: table,
                    value: literal,
                };
                return (SaveOutcome::Failed(error.to_string()), insertions, None);
            }
            insertions.push((field.name().to_string(), literal));
        }

        let updating = model.id().is_some();
        let operation = if updating { "UPDATE" } else { "INSERT" };

        let plan = Self::derive_plan(operation, &table, &insertions);
        debug_log!("derived statement {} ({} params)", plan.name, plan.n_params);

        let Some(executor) = &self.executor else {
            model.assign_id(DRY_RUN_ID);
            return (SaveOutcome::Saved, insertions, Some(plan));
        };

        if let Err(error) = self.register_statement(executor.as_ref(), &plan) {
            return (SaveOutcome::Failed(error.to_string()), insertions, Some(plan));
        }

        // Positional parameters; an UPDATE carries the identity as one extra
        // trailing parameter for the WHERE clause.
        let mut params: Vec<String> =
            insertions.iter().map(|(_, literal)| literal.clone()).collect();
        if let Some(id) = model.id() {
            params.push(id.to_string());
        }

        let result = match executor.execute(&plan.name, &params) {
            Ok(result) => result,
            Err(reason) => {
                let error = RowforgeError::Execute {
                    name: plan.name.clone(),
                    reason,
                };
                return (SaveOutcome::Failed(error.to_string()), insertions, Some(plan));
            }
        };

        if !updating {
            // Save the returned identity back into the object
            match result.first_value().and_then(|v| v.parse::<i64>().ok()) {
                Some(id) => model.assign_id(id),
                None => {
                    let error = RowforgeError::Execute {
                        name: plan.name.clone(),
                        reason: "no generated identity was returned".to_string(),
                    };
                    return (SaveOutcome::Failed(error.to_string()), insertions, Some(plan));
                }
            }
        }

        (SaveOutcome::Saved, insertions, Some(plan))
    }

    /// Fetch the rows of the model's table matching the filter expression.
    pub fn fetch<M: Model>(&self, filter: &str) -> FetchOutcome {
        let Some(executor) = &self.executor else {
            return FetchOutcome::Fetched(Vec::new());
        };

        let table = M::table_name();
        let plan = Self::derive_filter_plan("FETCH", &table, filter);
        if let Err(error) = self.register_statement(executor.as_ref(), &plan) {
            return FetchOutcome::Failed(error.to_string());
        }

        match executor.execute(&plan.name, &[]) {
            Ok(result) => FetchOutcome::Fetched(result.rows().to_vec()),
            Err(reason) => {
                let error = RowforgeError::Execute {
                    name: plan.name,
                    reason,
                };
                FetchOutcome::Failed(error.to_string())
            }
        }
    }

    /// Erase the rows of the model's table matching the filter expression.
    pub fn erase<M: Model>(&self, filter: &str) -> EraseOutcome {
        let Some(executor) = &self.executor else {
            return EraseOutcome::Erased(0);
        };

        let table = M::table_name();
        let plan = Self::derive_filter_plan("ERASE", &table, filter);
        if let Err(error) = self.register_statement(executor.as_ref(), &plan) {
            return EraseOutcome::Failed(error.to_string());
        }

        match executor.execute(&plan.name, &[]) {
            Ok(result) => EraseOutcome::Erased(result.affected()),
            Err(reason) => {
                let error = RowforgeError::Execute {
                    name: plan.name,
                    reason,
                };
                EraseOutcome::Failed(error.to_string())
            }
        }
    }

    /// Derive the statement identity and text for one (operation, table,
    /// ordered column list) shape. Deterministic: the same shape always
    /// derives the same plan, regardless of values.
    fn derive_plan(operation: &str, table: &str, insertions: &[(String, String)]) -> SavePlan {
        let mut name = format!("{}_{}", operation, table);
        for (column, _) in insertions {
            name.push('_');
            name.push_str(column);
        }

        let (statement, n_params) = if operation == "UPDATE" {
            let assignments: Vec<String> = insertions
                .iter()
                .enumerate()
                .map(|(i, (column, _))| format!("{} = ${}", column, i + 1))
                .collect();
            let statement = format!(
                "UPDATE {} SET {} WHERE id = ${};",
                table,
                assignments.join(", "),
                insertions.len() + 1
            );
            (statement, insertions.len() + 1)
        } else {
            let columns: Vec<&str> = insertions.iter().map(|(c, _)| c.as_str()).collect();
            let placeholders: Vec<String> =
                (1..=insertions.len()).map(|i| format!("${}", i)).collect();
            let statement = format!(
                "INSERT INTO {} ({}) VALUES ({}) RETURNING id;",
                table,
                columns.join(", "),
                placeholders.join(", ")
            );
            (statement, insertions.len())
        };

        SavePlan {
            name,
            statement,
            n_params,
        }
    }

    /// Derive a statement for a filtered table operation. The filter is part
    /// of the statement body, so its fingerprint is part of the key.
    fn derive_filter_plan(operation: &str, table: &str, filter: &str) -> SavePlan {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        filter.hash(&mut hasher);
        let name = format!("{}_{}_{:016x}", operation, table, hasher.finish());

        let statement = if operation == "ERASE" {
            format!("DELETE FROM {} WHERE {};", table, filter)
        } else {
            format!("SELECT * FROM {} WHERE {};", table, filter)
        };

        SavePlan {
            name,
            statement,
            n_params: 0,
        }
    }

    /// Ensure the statement is registered with the collaborator, registering
    /// it at most once per key. The cache lock is held across the
    /// check-then-register so concurrent saves racing on the same key issue a
    /// single registration.
    fn register_statement(
        &self,
        executor: &dyn StatementExecutor,
        plan: &SavePlan,
    ) -> Result<(), RowforgeError> {
        let mut cache = lock(&self.statements);

        if cache.contains(&plan.name) {
            return Ok(());
        }
        if executor.statement_exists(&plan.name) {
            cache.insert(plan.name.clone());
            return Ok(());
        }

        debug_log!("preparing statement {}", plan.name);
        executor
            .prepare(&plan.name, &plan.statement, plan.n_params)
            .map_err(|reason| RowforgeError::Prepare {
                statement: plan.statement.clone(),
                reason,
            })?;

        // Only a confirmed registration enters the cache
        cache.insert(plan.name.clone());
        Ok(())
    }
}

fn lock(statements: &Mutex<HashSet<String>>) -> std::sync::MutexGuard<'_, HashSet<String>> {
    statements.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
