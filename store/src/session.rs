//! Scoped store acquisition with guaranteed release.
//!
//! A session opens the backing file, hands the [`Store`] to a closure,
//! and commits-then-closes on every exit path. The closure's operations
//! never unwind (see the contract layer in [`Store`]), so release is
//! unconditional.

use std::path::Path;

use passfort_core::{PASSWORD_TABLE, password_columns};

use crate::error::Result;
use crate::report::Reporter;
use crate::store::Store;

/// Runs `body` against a store opened at `<dir>/<file>`, creating the
/// directory and file as needed, and releases the store afterwards.
///
/// # Errors
///
/// Returns an error when the store cannot be initialized (directory or
/// file creation fails) or when the final commit-and-close fails.
/// Failures of operations inside `body` do not error here; they surface
/// through the store's own contract.
///
/// # Examples
///
/// ```no_run
/// use passfort_store::with_store;
///
/// let tables = with_store("/tmp/passfort", "database.db", |store| {
///     store.tables()
/// }).unwrap();
/// println!("{} tables", tables.len());
/// ```
pub fn with_store<R>(
    dir: impl AsRef<Path>,
    file: &str,
    body: impl FnOnce(&mut Store) -> R,
) -> Result<R> {
    let mut store = Store::open(dir, file)?;
    let result = body(&mut store);
    store.close()?;
    Ok(result)
}

/// [`with_store`] with a caller-supplied diagnostic sink.
pub fn with_store_reported<R>(
    dir: impl AsRef<Path>,
    file: &str,
    reporter: Box<dyn Reporter>,
    body: impl FnOnce(&mut Store) -> R,
) -> Result<R> {
    let mut store = Store::open(dir, file)?;
    store.set_reporter(reporter);
    let result = body(&mut store);
    store.close()?;
    Ok(result)
}

/// Creates the `passwords` table when absent. Called once at process
/// start; safe to call repeatedly.
pub fn ensure_schema(store: &Store) -> bool {
    store.create_table(PASSWORD_TABLE, &password_columns())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_store_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let tables = with_store(&nested, "database.db", |store| {
            ensure_schema(store);
            store.tables()
        })
        .unwrap();

        assert!(nested.join("database.db").exists());
        assert!(tables.iter().any(|t| t == PASSWORD_TABLE));
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let store = Store::open_in_memory().unwrap();
        assert!(ensure_schema(&store));
        let first = store.columns(PASSWORD_TABLE);
        assert!(ensure_schema(&store));
        assert_eq!(store.columns(PASSWORD_TABLE), first);
    }

    #[test]
    fn test_changes_visible_after_release() {
        let dir = tempfile::tempdir().unwrap();

        with_store(dir.path(), "database.db", |store| {
            ensure_schema(store);
            let record = passfort_core::Record::new()
                .with("name", "GitHub")
                .with("website", "github.com")
                .with("password", "x1");
            assert_eq!(store.insert(PASSWORD_TABLE, &record), Some(1));
        })
        .unwrap();

        // A fresh session observes the committed row.
        let count = with_store(dir.path(), "database.db", |store| {
            store.select(PASSWORD_TABLE, None, None, None).len()
        })
        .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_release_runs_after_failed_operation() {
        let dir = tempfile::tempdir().unwrap();

        // The inner operation fails (missing table); the session still
        // closes cleanly and returns the body's value.
        let inserted = with_store(dir.path(), "database.db", |store| {
            store.insert("ghost", &passfort_core::Record::new().with("a", 1))
        })
        .unwrap();
        assert_eq!(inserted, None);
    }
}
