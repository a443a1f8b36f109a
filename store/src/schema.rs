//! SQL generation from validated identifiers.
//!
//! Builds every statement the store executes. Identifiers (table and
//! column names) cannot be bound as parameters, so they are validated
//! against a strict alphanumeric-and-underscore character set before
//! interpolation; all row values travel as bound `?` parameters and never
//! appear in SQL text.

use passfort_core::{ColumnDef, Predicate, Record, Value};

use crate::error::{Result, StoreError};

/// Validates that an identifier is non-empty, does not start with a
/// digit, and contains only alphanumeric characters and underscores.
pub(crate) fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidIdentifier(name.to_string()))
    }
}

/// Generates a `CREATE TABLE IF NOT EXISTS` statement.
///
/// Column order in `columns` becomes the table's canonical projection
/// order for selects without an explicit column list.
pub(crate) fn build_create_table(table: &str, columns: &[ColumnDef]) -> Result<String> {
    validate_identifier(table)?;
    if columns.is_empty() {
        return Err(StoreError::EmptyRecord);
    }

    let mut defs = Vec::with_capacity(columns.len());
    for column in columns {
        validate_identifier(column.name())?;
        let mut def = format!("{} {}", column.name(), column.data_type().as_sql());
        for constraint in column.constraints() {
            def.push(' ');
            def.push_str(constraint.as_sql());
        }
        defs.push(def);
    }

    Ok(format!(
        "CREATE TABLE IF NOT EXISTS {table} ({})",
        defs.join(", ")
    ))
}

/// Generates an `INSERT` statement plus its bound values in column order.
pub(crate) fn build_insert<'a>(table: &str, record: &'a Record) -> Result<(String, Vec<&'a Value>)> {
    validate_identifier(table)?;
    if record.is_empty() {
        return Err(StoreError::EmptyRecord);
    }
    for column in record.columns() {
        validate_identifier(column)?;
    }

    let columns: Vec<&str> = record.columns().collect();
    let placeholders = vec!["?"; columns.len()].join(", ");
    let sql = format!(
        "INSERT INTO {table} ({}) VALUES ({placeholders})",
        columns.join(", ")
    );
    Ok((sql, record.values().collect()))
}

/// Appends a `WHERE` clause for the predicate, returning its bound values.
///
/// An absent or empty predicate appends nothing and matches all rows.
fn push_where<'a>(
    sql: &mut String,
    predicate: Option<&'a Predicate>,
    params: &mut Vec<&'a Value>,
) -> Result<()> {
    let Some(predicate) = predicate.filter(|p| !p.is_empty()) else {
        return Ok(());
    };

    sql.push_str(" WHERE ");
    for (i, (column, value)) in predicate.iter().enumerate() {
        validate_identifier(column)?;
        if i > 0 {
            sql.push_str(" AND ");
        }
        sql.push_str(column);
        sql.push_str(" = ?");
        params.push(value);
    }
    Ok(())
}

/// Generates a `SELECT` statement plus its bound predicate values.
///
/// `columns` absent selects `*`, which SQLite projects in table creation
/// order. `limit` caps the row count when present.
pub(crate) fn build_select<'a>(
    table: &str,
    columns: Option<&[&str]>,
    predicate: Option<&'a Predicate>,
    limit: Option<u32>,
) -> Result<(String, Vec<&'a Value>)> {
    validate_identifier(table)?;

    let projection = match columns {
        Some(columns) if !columns.is_empty() => {
            for column in columns {
                validate_identifier(column)?;
            }
            columns.join(", ")
        }
        _ => "*".to_string(),
    };

    let mut sql = format!("SELECT {projection} FROM {table}");
    let mut params = Vec::new();
    push_where(&mut sql, predicate, &mut params)?;
    if let Some(limit) = limit {
        sql.push_str(&format!(" LIMIT {limit}"));
    }
    Ok((sql, params))
}

/// Generates an `UPDATE` statement plus bound values (assignments first,
/// then predicate terms).
pub(crate) fn build_update<'a>(
    table: &str,
    values: &'a Record,
    predicate: Option<&'a Predicate>,
) -> Result<(String, Vec<&'a Value>)> {
    validate_identifier(table)?;
    if values.is_empty() {
        return Err(StoreError::EmptyRecord);
    }

    let mut assignments = Vec::with_capacity(values.len());
    let mut params: Vec<&Value> = Vec::new();
    for (column, value) in values.iter() {
        validate_identifier(column)?;
        assignments.push(format!("{column} = ?"));
        params.push(value);
    }

    let mut sql = format!("UPDATE {table} SET {}", assignments.join(", "));
    push_where(&mut sql, predicate, &mut params)?;
    Ok((sql, params))
}

/// Generates a `DELETE` statement plus its bound predicate values.
pub(crate) fn build_delete<'a>(
    table: &str,
    predicate: Option<&'a Predicate>,
) -> Result<(String, Vec<&'a Value>)> {
    validate_identifier(table)?;
    let mut sql = format!("DELETE FROM {table}");
    let mut params = Vec::new();
    push_where(&mut sql, predicate, &mut params)?;
    Ok((sql, params))
}
