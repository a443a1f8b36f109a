//! The `passwords` table definition.

use crate::types::{ColumnDef, DataType};

/// Name of the credentials table.
pub const PASSWORD_TABLE: &str = "passwords";

/// Returns the column definitions for the `passwords` table, in canonical
/// order.
///
/// The order here is the projection order for selects without an explicit
/// column list, and the column order of exported CSV files.
pub fn password_columns() -> Vec<ColumnDef> {
    vec![
        ColumnDef::new("id", DataType::Integer)
            .primary_key()
            .auto_increment(),
        ColumnDef::new("name", DataType::Text).not_null(),
        ColumnDef::new("website", DataType::Text).not_null(),
        ColumnDef::new("username", DataType::Text),
        ColumnDef::new("password", DataType::Text).not_null(),
        ColumnDef::new("note", DataType::Text),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Constraint;

    #[test]
    fn test_password_columns_order() {
        let columns = password_columns();
        let names: Vec<_> = columns.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["id", "name", "website", "username", "password", "note"]
        );
    }

    #[test]
    fn test_only_id_is_primary_key() {
        for column in password_columns() {
            let is_pk = column.constraints().contains(&Constraint::PrimaryKey);
            assert_eq!(is_pk, column.name() == "id");
        }
    }

    #[test]
    fn test_nullable_columns() {
        for column in password_columns() {
            let not_null = column.constraints().contains(&Constraint::NotNull);
            match column.name() {
                "username" | "note" | "id" => assert!(!not_null),
                _ => assert!(not_null, "{} should be NOT NULL", column.name()),
            }
        }
    }
}
