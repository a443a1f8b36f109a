//! Primitive values, column definitions, records, and predicates.
//!
//! These types describe everything the record store can persist: a table
//! is an ordered sequence of [`ColumnDef`]s, a row is a [`Record`] mapping
//! column names to [`Value`]s, and a [`Predicate`] scopes mutations and
//! queries to rows matching exact column values.

use std::fmt;

/// A primitive value stored in a single table cell.
///
/// Mirrors the storage backend's type system: text, integer, real, or
/// null. Conversions from common Rust types are provided so records can
/// be built without naming variants explicitly.
///
/// # Examples
///
/// ```
/// use passfort_core::Value;
///
/// let v: Value = "hello".into();
/// assert_eq!(v.as_text(), Some("hello"));
///
/// let n: Value = 42.into();
/// assert_eq!(n.as_integer(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value (SQL NULL).
    Null,
    /// UTF-8 text.
    Text(String),
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit floating point.
    Real(f64),
}

impl Value {
    /// Returns the text content, or `None` for other variants.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer content, or `None` for other variants.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the real content, or `None` for other variants.
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Text(s) => write!(f, "{s}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Primitive column data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    /// UTF-8 text column.
    Text,
    /// 64-bit integer column.
    Integer,
    /// Floating-point column.
    Real,
}

impl DataType {
    /// Returns the SQL keyword for this type.
    pub fn as_sql(self) -> &'static str {
        match self {
            DataType::Text => "TEXT",
            DataType::Integer => "INTEGER",
            DataType::Real => "REAL",
        }
    }
}

/// Column constraint applied at table creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Identity column; at most one per table.
    PrimaryKey,
    /// Backend assigns monotonically increasing values.
    AutoIncrement,
    /// Inserts must supply a non-null value.
    NotNull,
    /// Values must be distinct across rows.
    Unique,
}

impl Constraint {
    /// Returns the SQL fragment for this constraint.
    pub fn as_sql(self) -> &'static str {
        match self {
            Constraint::PrimaryKey => "PRIMARY KEY",
            Constraint::AutoIncrement => "AUTOINCREMENT",
            Constraint::NotNull => "NOT NULL",
            Constraint::Unique => "UNIQUE",
        }
    }
}

/// One column in a table schema: name, type, and constraints.
///
/// Column order is fixed at creation time and defines the canonical
/// projection order for selects without an explicit column list.
///
/// # Examples
///
/// ```
/// use passfort_core::{ColumnDef, DataType};
///
/// let id = ColumnDef::new("id", DataType::Integer)
///     .primary_key()
///     .auto_increment();
/// assert_eq!(id.name(), "id");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    name: String,
    data_type: DataType,
    constraints: Vec<Constraint>,
}

impl ColumnDef {
    /// Creates an unconstrained column.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            constraints: Vec::new(),
        }
    }

    /// Marks the column as the table's primary key.
    pub fn primary_key(mut self) -> Self {
        self.constraints.push(Constraint::PrimaryKey);
        self
    }

    /// Marks the column as auto-incrementing.
    pub fn auto_increment(mut self) -> Self {
        self.constraints.push(Constraint::AutoIncrement);
        self
    }

    /// Marks the column as not-null.
    pub fn not_null(mut self) -> Self {
        self.constraints.push(Constraint::NotNull);
        self
    }

    /// Marks the column as unique.
    pub fn unique(mut self) -> Self {
        self.constraints.push(Constraint::Unique);
        self
    }

    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column data type.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns the constraints in declaration order.
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}

/// One row of a table: an ordered mapping from column name to [`Value`].
///
/// Insertion order is preserved, which keeps generated SQL deterministic
/// and matches the schema's canonical column order when records are read
/// back from the store.
///
/// # Examples
///
/// ```
/// use passfort_core::{Record, Value};
///
/// let mut record = Record::new();
/// record.set("name", "GitHub");
/// record.set("id", 7);
///
/// assert_eq!(record.len(), 2);
/// assert_eq!(record.get("id"), Some(&Value::Integer(7)));
/// assert_eq!(record.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column value, replacing any existing value for the column.
    ///
    /// New columns are appended, preserving insertion order.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        let column = column.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(c, _)| *c == column) {
            slot.1 = value;
        } else {
            self.fields.push((column, value));
        }
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(column, value);
        self
    }

    /// Returns the value for a column, if present.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    /// Returns the column names in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(c, _)| c.as_str())
    }

    /// Returns the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, v)| v)
    }

    /// Iterates over `(column, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(c, v)| (c.as_str(), v))
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<C: Into<String>, V: Into<Value>> FromIterator<(C, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (C, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.set(column, value);
        }
        record
    }
}

/// An equality filter over one or more columns, combined with logical AND.
///
/// An empty predicate matches all rows; the store treats `None` and an
/// empty predicate identically.
///
/// # Examples
///
/// ```
/// use passfort_core::Predicate;
///
/// let p = Predicate::new().eq("name", "GitHub").eq("username", "alice");
/// assert_eq!(p.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    terms: Vec<(String, Value)>,
}

impl Predicate {
    /// Creates an empty predicate (matches all rows).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an exact-match term for a column.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.terms.push((column.into(), value.into()));
        self
    }

    /// Iterates over `(column, value)` terms in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.terms.iter().map(|(c, v)| (c.as_str(), v))
    }

    /// Returns the number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns `true` if the predicate has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
