//! CSV import and export.
//!
//! Export writes a header of the table's columns minus the
//! unique-constrained ones (identities stay local to each database),
//! then one row per record in schema column order. Import reads a
//! headed CSV and inserts one record per row; rows that fail to parse
//! or insert are skipped and excluded from the reported count.

use std::path::Path;

use passfort_core::{PASSWORD_TABLE, PasswordEntry};
use passfort_store::Store;

/// Exports all entries to a CSV file, returning the number of rows
/// written.
pub fn export(store: &Store, output: &Path) -> Result<usize, String> {
    let unique = store.unique_columns(PASSWORD_TABLE);
    let columns: Vec<String> = store
        .columns(PASSWORD_TABLE)
        .into_iter()
        .filter(|column| !unique.contains(column))
        .collect();
    if columns.is_empty() {
        return Err("nothing to export: password table is missing".to_string());
    }

    let column_refs: Vec<&str> = columns.iter().map(String::as_str).collect();
    let rows = store.select(PASSWORD_TABLE, Some(&column_refs), None, None);

    let mut writer = csv::Writer::from_path(output)
        .map_err(|err| format!("failed to create {}: {err}", output.display()))?;
    writer
        .write_record(&columns)
        .map_err(|err| format!("failed to write CSV header: {err}"))?;
    for row in &rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|column| row.get(column).map(ToString::to_string).unwrap_or_default())
            .collect();
        writer
            .write_record(&cells)
            .map_err(|err| format!("failed to write CSV row: {err}"))?;
    }
    writer
        .flush()
        .map_err(|err| format!("failed to flush {}: {err}", output.display()))?;

    Ok(rows.len())
}

/// Imports entries from a headed CSV file, returning how many rows were
/// inserted.
pub fn import(store: &Store, input: &Path) -> Result<usize, String> {
    let mut reader = csv::Reader::from_path(input)
        .map_err(|err| format!("failed to open {}: {err}", input.display()))?;

    let mut imported = 0;
    for row in reader.deserialize::<PasswordEntry>() {
        let Ok(entry) = row else {
            continue;
        };
        if store.insert(PASSWORD_TABLE, &entry.to_record()).is_some() {
            imported += 1;
        }
    }
    Ok(imported)
}
