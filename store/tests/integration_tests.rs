//! Integration tests for the passfort-store crate.

use passfort_core::{PASSWORD_TABLE, Predicate, Record, Value, password_columns};
use passfort_store::{Store, ensure_schema, with_store};

fn open_store(dir: &tempfile::TempDir) -> Store {
    let store = Store::open(dir.path(), "database.db").expect("failed to open store");
    assert!(ensure_schema(&store));
    store
}

fn entry(name: &str, website: &str, username: &str, password: &str, note: &str) -> Record {
    Record::new()
        .with("name", name)
        .with("website", website)
        .with("username", username)
        .with("password", password)
        .with("note", note)
}

#[test]
fn test_insert_select_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let record = entry("GitHub", "github.com", "alice", "x1", "work");
    let id = store.insert(PASSWORD_TABLE, &record).unwrap();

    let loaded = store
        .select_one(PASSWORD_TABLE, None, Some(&Predicate::new().eq("id", id)))
        .expect("row should exist");

    for (column, value) in record.iter() {
        assert_eq!(loaded.get(column), Some(value), "column {column}");
    }
    assert_eq!(loaded.get("id"), Some(&Value::Integer(id)));
}

#[test]
fn test_idempotent_schema_creation() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path(), "database.db").unwrap();

    assert!(store.create_table(PASSWORD_TABLE, &password_columns()));
    let first = store.columns(PASSWORD_TABLE);
    assert!(store.create_table(PASSWORD_TABLE, &password_columns()));
    assert_eq!(store.columns(PASSWORD_TABLE), first);
    assert_eq!(
        first,
        vec!["id", "name", "website", "username", "password", "note"]
    );
}

#[test]
fn test_update_scoping_leaves_other_rows_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let a = store
        .insert(PASSWORD_TABLE, &entry("A", "a.com", "u1", "p1", ""))
        .unwrap();
    let b = store
        .insert(PASSWORD_TABLE, &entry("B", "b.com", "u2", "p2", ""))
        .unwrap();

    let changed = store.update(
        PASSWORD_TABLE,
        &Record::new().with("password", "rotated"),
        Some(&Predicate::new().eq("id", a)),
    );
    assert!(changed);

    let row_a = store
        .select_one(PASSWORD_TABLE, None, Some(&Predicate::new().eq("id", a)))
        .unwrap();
    let row_b = store
        .select_one(PASSWORD_TABLE, None, Some(&Predicate::new().eq("id", b)))
        .unwrap();
    assert_eq!(row_a.get("password"), Some(&Value::Text("rotated".into())));
    assert_eq!(row_b.get("password"), Some(&Value::Text("p2".into())));
}

#[test]
fn test_update_without_predicate_touches_all_rows() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store
        .insert(PASSWORD_TABLE, &entry("A", "a.com", "u1", "p1", ""))
        .unwrap();
    store
        .insert(PASSWORD_TABLE, &entry("B", "b.com", "u2", "p2", ""))
        .unwrap();

    assert!(store.update(PASSWORD_TABLE, &Record::new().with("note", "audited"), None));

    for row in store.select(PASSWORD_TABLE, None, None, None) {
        assert_eq!(row.get("note"), Some(&Value::Text("audited".into())));
    }
}

#[test]
fn test_delete_boolean_contract() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    // No matching rows: false.
    assert!(!store.delete(PASSWORD_TABLE, Some(&Predicate::new().eq("id", 99))));

    let id = store
        .insert(PASSWORD_TABLE, &entry("A", "a.com", "u", "p", ""))
        .unwrap();
    store
        .insert(PASSWORD_TABLE, &entry("B", "b.com", "u", "p", ""))
        .unwrap();

    // One matching row: true, and exactly that row is gone.
    assert!(store.delete(PASSWORD_TABLE, Some(&Predicate::new().eq("id", id))));
    let remaining = store.select(PASSWORD_TABLE, None, None, None);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].get("name"), Some(&Value::Text("B".into())));
}

#[test]
fn test_missing_table_never_faults() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path(), "database.db").unwrap();

    assert!(store.select("nope", None, None, None).is_empty());
    assert!(store.select_one("nope", None, None).is_none());
    assert_eq!(store.insert("nope", &Record::new().with("a", 1)), None);
    assert!(!store.update("nope", &Record::new().with("a", 1), None));
    assert!(!store.delete("nope", None));
    assert!(store.columns("nope").is_empty());
    assert!(store.unique_columns("nope").is_empty());
}

#[test]
fn test_uniqueness_introspection_on_passwords() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let unique = store.unique_columns(PASSWORD_TABLE);
    assert_eq!(unique, vec!["id"]);
    for column in ["name", "website", "username", "password", "note"] {
        assert!(!unique.contains(&column.to_string()));
    }
}

#[test]
fn test_select_projection_follows_schema_order() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    store
        .insert(PASSWORD_TABLE, &entry("A", "a.com", "u", "p", "n"))
        .unwrap();

    let row = store.select_one(PASSWORD_TABLE, None, None).unwrap();
    let columns: Vec<_> = row.columns().collect();
    assert_eq!(
        columns,
        vec!["id", "name", "website", "username", "password", "note"]
    );
}

#[test]
fn test_select_with_explicit_columns_and_limit() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    for i in 0..5 {
        store
            .insert(
                PASSWORD_TABLE,
                &entry(&format!("site{i}"), "x.com", "u", "p", ""),
            )
            .unwrap();
    }

    let rows = store.select(PASSWORD_TABLE, Some(&["name", "website"]), None, Some(3));
    assert_eq!(rows.len(), 3);
    let columns: Vec<_> = rows[0].columns().collect();
    assert_eq!(columns, vec!["name", "website"]);
}

#[test]
fn test_exact_match_predicates_are_anded() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    store
        .insert(PASSWORD_TABLE, &entry("A", "a.com", "alice", "p", ""))
        .unwrap();
    store
        .insert(PASSWORD_TABLE, &entry("A", "a.com", "bob", "p", ""))
        .unwrap();

    let predicate = Predicate::new().eq("name", "A").eq("username", "bob");
    let rows = store.select(PASSWORD_TABLE, None, Some(&predicate), None);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("username"), Some(&Value::Text("bob".into())));
}

#[test]
fn test_full_session_scenario() {
    // Create passwords, insert two records, list, delete the first.
    let dir = tempfile::tempdir().unwrap();

    with_store(dir.path(), "database.db", |store| {
        ensure_schema(store);

        let first = store.insert(
            PASSWORD_TABLE,
            &entry("GitHub", "github.com", "alice", "x1", ""),
        );
        assert_eq!(first, Some(1));

        let second = store.insert(
            PASSWORD_TABLE,
            &entry("GitLab", "gitlab.com", "alice", "x2", ""),
        );
        assert_eq!(second, Some(2));

        let all = store.select(PASSWORD_TABLE, None, None, None);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].get("id"), Some(&Value::Integer(1)));
        assert_eq!(all[1].get("id"), Some(&Value::Integer(2)));

        assert!(store.delete(PASSWORD_TABLE, Some(&Predicate::new().eq("id", 1))));

        let remaining = store.select(PASSWORD_TABLE, None, None, None);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].get("id"), Some(&Value::Integer(2)));
    })
    .unwrap();
}

#[test]
fn test_nullable_columns_round_trip_null() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    let record = Record::new()
        .with("name", "Solo")
        .with("website", "solo.dev")
        .with("username", Value::Null)
        .with("password", "p")
        .with("note", Value::Null);
    let id = store.insert(PASSWORD_TABLE, &record).unwrap();

    let row = store
        .select_one(PASSWORD_TABLE, None, Some(&Predicate::new().eq("id", id)))
        .unwrap();
    assert_eq!(row.get("username"), Some(&Value::Null));
    assert_eq!(row.get("note"), Some(&Value::Null));
}
