//! SQLite-backed record store for the passfort credential manager.
//!
//! This crate owns the single connection to the embedded database and
//! exposes a generic, table-oriented storage contract: schema
//! introspection, idempotent table creation, and parameterized CRUD with
//! optional equality predicates.
//!
//! # Architecture
//!
//! The crate is organized into five modules:
//!
//! - **`schema`** — SQL generation from validated identifiers
//! - **`convert`** — `Value` ↔ SQL binding transformations
//! - **`store`** — the [`Store`] handle and its operation contract
//! - **`report`** — the diagnostic sink the guard speaks through
//! - **`session`** — scoped acquisition with guaranteed release
//!
//! # Operation contract
//!
//! Public [`Store`] operations never fail the caller with an error value:
//! every backend fault is caught at the store boundary, reported to the
//! attached [`Reporter`], and surfaced as the operation's uniform failure
//! result (`None`, `false`, or an empty vector). Operations against a
//! table that does not exist are refused the same way before any SQL
//! runs.
//!
//! # Quick start
//!
//! ```no_run
//! use passfort_core::{PASSWORD_TABLE, Predicate, Record, password_columns};
//! use passfort_store::with_store;
//!
//! let inserted = with_store("/tmp/passfort", "database.db", |store| {
//!     store.create_table(PASSWORD_TABLE, &password_columns());
//!
//!     let record = Record::new()
//!         .with("name", "GitHub")
//!         .with("website", "github.com")
//!         .with("password", "x1");
//!     store.insert(PASSWORD_TABLE, &record)
//! }).unwrap();
//!
//! assert_eq!(inserted, Some(1));
//! ```

mod convert;
mod error;
mod report;
mod schema;
mod session;
mod store;

pub use error::{Result, StoreError};
pub use report::{LogReporter, Reporter, Severity};
pub use session::{ensure_schema, with_store, with_store_reported};
pub use store::Store;
