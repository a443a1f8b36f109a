//! Bidirectional conversion between [`Value`] and SQLite bindings.

use passfort_core::Value;
use rusqlite::ToSql;
use rusqlite::types::{ToSqlOutput, Value as SqliteValue, ValueRef};

/// Adapter that binds a [`Value`] as a SQL parameter.
pub(crate) struct SqlValue<'a>(pub &'a Value);

impl ToSql for SqlValue<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self.0 {
            Value::Null => ToSqlOutput::Owned(SqliteValue::Null),
            Value::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Value::Integer(i) => ToSqlOutput::Owned(SqliteValue::Integer(*i)),
            Value::Real(r) => ToSqlOutput::Owned(SqliteValue::Real(*r)),
        })
    }
}

/// Converts a SQLite cell back into a [`Value`].
///
/// Blobs never originate from this store; if one is encountered it is
/// decoded as lossy UTF-8 text rather than failing the whole row.
pub(crate) fn value_from_sql(cell: ValueRef<'_>) -> Value {
    match cell {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::Integer(i),
        ValueRef::Real(r) => Value::Real(r),
        ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from_sql_variants() {
        assert_eq!(value_from_sql(ValueRef::Null), Value::Null);
        assert_eq!(value_from_sql(ValueRef::Integer(7)), Value::Integer(7));
        assert_eq!(value_from_sql(ValueRef::Real(0.5)), Value::Real(0.5));
        assert_eq!(
            value_from_sql(ValueRef::Text(b"abc")),
            Value::Text("abc".to_string())
        );
    }

    #[test]
    fn test_bound_value_round_trip() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let echoed: String = conn
            .query_row("SELECT ?", [SqlValue(&Value::Text("hi".into()))], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(echoed, "hi");
    }

    #[test]
    fn test_null_binds_as_null() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        let is_null: bool = conn
            .query_row("SELECT ? IS NULL", [SqlValue(&Value::Null)], |row| {
                row.get(0)
            })
            .unwrap();
        assert!(is_null);
    }
}
