//! Typed view of one `passwords` row, used for CSV interchange.

use serde::{Deserialize, Serialize};

use crate::types::{Record, Value};

/// One credential entry.
///
/// `id` is assigned by the store on insert and is absent on entries built
/// from user input or imported from CSV.
///
/// # Examples
///
/// ```
/// use passfort_core::PasswordEntry;
///
/// let entry = PasswordEntry {
///     id: None,
///     name: "GitHub".into(),
///     website: "github.com".into(),
///     username: Some("alice".into()),
///     password: "x1".into(),
///     note: None,
/// };
/// let record = entry.to_record();
/// assert!(record.get("id").is_none());
/// assert_eq!(record.get("name").unwrap().as_text(), Some("GitHub"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordEntry {
    /// Store-assigned identity; `None` before insert.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Display name for the entry.
    pub name: String,
    /// Website or service URL.
    pub website: String,
    /// Login username, if any.
    #[serde(default)]
    pub username: Option<String>,
    /// The stored password.
    pub password: String,
    /// Free-form note, if any.
    #[serde(default)]
    pub note: Option<String>,
}

impl PasswordEntry {
    /// Converts the entry into a [`Record`] for insertion.
    ///
    /// The `id` column is omitted when unset so the store assigns one.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        if let Some(id) = self.id {
            record.set("id", id);
        }
        record.set("name", self.name.as_str());
        record.set("website", self.website.as_str());
        record.set("username", self.username.clone());
        record.set("password", self.password.as_str());
        record.set("note", self.note.clone());
        record
    }

    /// Reconstructs an entry from a stored [`Record`].
    ///
    /// Returns `None` if any required column is missing or has the wrong
    /// type.
    pub fn from_record(record: &Record) -> Option<Self> {
        let text = |column: &str| {
            record
                .get(column)
                .and_then(Value::as_text)
                .map(str::to_string)
        };
        let optional_text = |column: &str| match record.get(column) {
            Some(Value::Text(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        };

        Some(Self {
            id: record.get("id").and_then(Value::as_integer),
            name: text("name")?,
            website: text("website")?,
            username: optional_text("username"),
            password: text("password")?,
            note: optional_text("note"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PasswordEntry {
        PasswordEntry {
            id: Some(3),
            name: "GitHub".into(),
            website: "github.com".into(),
            username: Some("alice".into()),
            password: "x1".into(),
            note: None,
        }
    }

    #[test]
    fn test_to_record_includes_id_when_set() {
        let record = sample().to_record();
        assert_eq!(record.get("id"), Some(&Value::Integer(3)));
        assert_eq!(record.get("note"), Some(&Value::Null));
    }

    #[test]
    fn test_to_record_omits_unset_id() {
        let mut entry = sample();
        entry.id = None;
        assert!(entry.to_record().get("id").is_none());
    }

    #[test]
    fn test_record_round_trip() {
        let entry = sample();
        let restored = PasswordEntry::from_record(&entry.to_record()).unwrap();
        assert_eq!(restored, entry);
    }

    #[test]
    fn test_from_record_rejects_missing_required_column() {
        let record = Record::new().with("name", "GitHub");
        assert!(PasswordEntry::from_record(&record).is_none());
    }

    #[test]
    fn test_from_record_empty_text_is_none() {
        let record = sample().to_record();
        let mut record = record;
        record.set("note", "");
        let entry = PasswordEntry::from_record(&record).unwrap();
        assert_eq!(entry.note, None);
    }
}
