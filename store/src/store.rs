//! The [`Store`] handle: one open connection plus the operation contract.
//!
//! Operations come in two layers. The `try_*` layer returns
//! [`Result`](crate::Result) and is where SQL is built and executed. The
//! public contract layer wraps each `try_*` operation in the existence
//! guard and the error-catch policy: a missing table or a backend fault
//! is reported to the attached [`Reporter`] and the operation returns its
//! uniform failure value instead of an error. Callers therefore check
//! results, never unwind.

use std::fs;
use std::path::Path;

use passfort_core::{ColumnDef, Predicate, Record};
use rusqlite::{Connection, params_from_iter};
use tracing::debug;

use crate::convert::{SqlValue, value_from_sql};
use crate::error::{Result, StoreError};
use crate::report::{LogReporter, Reporter, Severity};
use crate::schema;

/// One open connection to the backing database file.
///
/// A `Store` is acquired per command invocation (see
/// [`with_store`](crate::with_store)), used for a bounded sequence of
/// synchronous operations, and released. It is never shared between
/// sessions.
pub struct Store {
    conn: Connection,
    reporter: Box<dyn Reporter>,
    verbose: bool,
}

impl Store {
    /// Opens (creating if necessary) the database file `file` inside
    /// `dir`, creating the directory first when absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be created and
    /// [`StoreError::Database`] if the file cannot be opened.
    pub fn open(dir: impl AsRef<Path>, file: &str) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join(file))?;
        Ok(Self::from_connection(conn))
    }

    /// Opens an in-memory store, useful for embedding and tests.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::from_connection(Connection::open_in_memory()?))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            reporter: Box::new(LogReporter),
            verbose: false,
        }
    }

    /// Replaces the diagnostic sink.
    pub fn set_reporter(&mut self, reporter: Box<dyn Reporter>) {
        self.reporter = reporter;
    }

    /// Controls whether backend errors are surfaced through the sink.
    ///
    /// Missing-table refusals are always reported; statement-level faults
    /// are reported only in verbose mode (they are traced regardless).
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Commits any pending state and closes the connection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the final flush fails.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| StoreError::Database(err))
    }

    // ---- contract layer -------------------------------------------------

    /// Lists table names present in the database.
    ///
    /// Returns an empty vector on backend failure.
    pub fn tables(&self) -> Vec<String> {
        self.catching(Vec::new(), |store| store.try_tables())
    }

    /// Creates a table if it does not already exist. Idempotent.
    ///
    /// Returns `true` when the schema is in place afterwards.
    pub fn create_table(&self, table: &str, columns: &[ColumnDef]) -> bool {
        self.catching(false, |store| {
            store.try_create_table(table, columns)?;
            Ok(true)
        })
    }

    /// Lists a table's column names in creation order.
    pub fn columns(&self, table: &str) -> Vec<String> {
        self.guarded(table, Vec::new(), |store| store.try_columns(table))
    }

    /// Lists columns carrying a uniqueness constraint: the primary key
    /// plus columns covered by a single-column unique index.
    pub fn unique_columns(&self, table: &str) -> Vec<String> {
        self.guarded(table, Vec::new(), |store| store.try_unique_columns(table))
    }

    /// Inserts one record, returning the assigned identity.
    ///
    /// Returns `None` when the table is missing, a not-null column is
    /// absent, or the statement fails.
    pub fn insert(&self, table: &str, record: &Record) -> Option<i64> {
        self.guarded(table, None, |store| {
            store.try_insert(table, record).map(Some)
        })
    }

    /// Selects records matching the predicate, in backend order.
    ///
    /// `columns` absent selects all columns in schema order; an absent or
    /// empty predicate matches all rows; `limit` caps the row count.
    pub fn select(
        &self,
        table: &str,
        columns: Option<&[&str]>,
        predicate: Option<&Predicate>,
        limit: Option<u32>,
    ) -> Vec<Record> {
        self.guarded(table, Vec::new(), |store| {
            store.try_select(table, columns, predicate, limit)
        })
    }

    /// Selects at most one record matching the predicate.
    pub fn select_one(
        &self,
        table: &str,
        columns: Option<&[&str]>,
        predicate: Option<&Predicate>,
    ) -> Option<Record> {
        self.guarded(table, None, |store| {
            let mut rows = store.try_select(table, columns, predicate, Some(1))?;
            Ok(if rows.is_empty() {
                None
            } else {
                Some(rows.swap_remove(0))
            })
        })
    }

    /// Overwrites the listed columns on every row matching the predicate
    /// (all rows when absent), atomically in one statement.
    ///
    /// Returns `true` if at least one row changed.
    pub fn update(&self, table: &str, values: &Record, predicate: Option<&Predicate>) -> bool {
        self.guarded(table, false, |store| {
            store.try_update(table, values, predicate)
        })
    }

    /// Removes every row matching the predicate (all rows when absent).
    ///
    /// Returns `true` if at least one row was removed.
    pub fn delete(&self, table: &str, predicate: Option<&Predicate>) -> bool {
        self.guarded(table, false, |store| store.try_delete(table, predicate))
    }

    // ---- cross-cutting wrappers -----------------------------------------

    /// Existence guard: refuses the operation when `table` is absent,
    /// reporting through the sink, then applies the error-catch policy.
    fn guarded<T>(&self, table: &str, fallback: T, op: impl FnOnce(&Self) -> Result<T>) -> T {
        match self.try_tables() {
            Ok(tables) if !tables.iter().any(|t| t == table) => {
                self.reporter
                    .report(Severity::Error, &format!("table '{table}' does not exist"));
                return fallback;
            }
            Err(err) => {
                self.surface(&err);
                return fallback;
            }
            Ok(_) => {}
        }
        self.catching(fallback, op)
    }

    /// Error-catch policy: converts any backend fault into the
    /// operation's uniform failure value.
    fn catching<T>(&self, fallback: T, op: impl FnOnce(&Self) -> Result<T>) -> T {
        match op(self) {
            Ok(value) => value,
            Err(err) => {
                self.surface(&err);
                fallback
            }
        }
    }

    fn surface(&self, err: &StoreError) {
        debug!("store operation failed: {err}");
        if self.verbose {
            self.reporter.report(Severity::Error, &err.to_string());
        }
    }

    // ---- fallible layer -------------------------------------------------

    fn try_tables(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(names)
    }

    fn try_create_table(&self, table: &str, columns: &[ColumnDef]) -> Result<()> {
        let sql = schema::build_create_table(table, columns)?;
        debug!("executing: {sql}");
        self.conn.execute(&sql, [])?;
        Ok(())
    }

    fn try_columns(&self, table: &str) -> Result<Vec<String>> {
        schema::validate_identifier(table)?;
        let mut stmt = self.conn.prepare(&format!("PRAGMA table_info({table})"))?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(names)
    }

    fn try_unique_columns(&self, table: &str) -> Result<Vec<String>> {
        schema::validate_identifier(table)?;

        // Primary key columns carry a positive pk ordinal in table_info.
        let mut stmt = self.conn.prepare(&format!("PRAGMA table_info({table})"))?;
        let mut unique: Vec<String> = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(1)?, row.get::<_, i64>(5)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|(_, pk)| *pk > 0)
            .map(|(name, _)| name)
            .collect();

        // Single-column unique indexes, whether declared via UNIQUE
        // column constraints or explicit CREATE UNIQUE INDEX.
        let mut stmt = self.conn.prepare(&format!("PRAGMA index_list({table})"))?;
        let indexes: Vec<String> = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(1)?, row.get::<_, i64>(2)?))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?
            .into_iter()
            .filter(|(_, is_unique)| *is_unique == 1)
            .map(|(name, _)| name)
            .collect();

        for index in indexes {
            schema::validate_identifier(&index)?;
            let mut stmt = self.conn.prepare(&format!("PRAGMA index_info({index})"))?;
            let columns: Vec<String> = stmt
                .query_map([], |row| row.get::<_, String>(2))?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            if let [column] = columns.as_slice() {
                if !unique.iter().any(|c| c == column) {
                    unique.push(column.clone());
                }
            }
        }

        Ok(unique)
    }

    fn try_insert(&self, table: &str, record: &Record) -> Result<i64> {
        let (sql, params) = schema::build_insert(table, record)?;
        debug!("executing: {sql}");
        self.conn
            .execute(&sql, params_from_iter(params.into_iter().map(SqlValue)))?;
        Ok(self.conn.last_insert_rowid())
    }

    fn try_select(
        &self,
        table: &str,
        columns: Option<&[&str]>,
        predicate: Option<&Predicate>,
        limit: Option<u32>,
    ) -> Result<Vec<Record>> {
        let (sql, params) = schema::build_select(table, columns, predicate, limit)?;
        debug!("executing: {sql}");

        let mut stmt = self.conn.prepare(&sql)?;
        let names: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect();

        let rows = stmt.query_map(params_from_iter(params.into_iter().map(SqlValue)), |row| {
            let mut record = Record::new();
            for (i, name) in names.iter().enumerate() {
                record.set(name.as_str(), value_from_sql(row.get_ref(i)?));
            }
            Ok(record)
        })?;
        let records = rows.collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(records)
    }

    fn try_update(
        &self,
        table: &str,
        values: &Record,
        predicate: Option<&Predicate>,
    ) -> Result<bool> {
        let (sql, params) = schema::build_update(table, values, predicate)?;
        debug!("executing: {sql}");
        let changed = self
            .conn
            .execute(&sql, params_from_iter(params.into_iter().map(SqlValue)))?;
        Ok(changed > 0)
    }

    fn try_delete(&self, table: &str, predicate: Option<&Predicate>) -> Result<bool> {
        let (sql, params) = schema::build_delete(table, predicate)?;
        debug!("executing: {sql}");
        let removed = self
            .conn
            .execute(&sql, params_from_iter(params.into_iter().map(SqlValue)))?;
        Ok(removed > 0)
    }
}
