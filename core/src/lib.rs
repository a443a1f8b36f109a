//! Domain types for the passfort credential manager.
//!
//! This crate is backend-free: it defines the primitive [`Value`] type,
//! table schema building blocks ([`ColumnDef`], [`DataType`],
//! [`Constraint`]), the ordered [`Record`] map and [`Predicate`] filter
//! that the storage layer operates on, plus the `passwords` table
//! definition and the random password generator.
//!
//! # Quick start
//!
//! ```
//! use passfort_core::{Record, Value, Predicate};
//!
//! let mut record = Record::new();
//! record.set("name", "GitHub");
//! record.set("website", "github.com");
//!
//! let by_id = Predicate::new().eq("id", 1);
//! assert_eq!(by_id.len(), 1);
//! assert_eq!(record.get("name"), Some(&Value::Text("GitHub".into())));
//! ```

mod entry;
mod generate;
mod schema;
mod types;

pub use entry::PasswordEntry;
pub use generate::{DEFAULT_PASSWORD_LENGTH, generate_password};
pub use schema::{PASSWORD_TABLE, password_columns};
pub use types::{ColumnDef, Constraint, DataType, Predicate, Record, Value};
