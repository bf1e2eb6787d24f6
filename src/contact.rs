//! Contact record model and input loading.
//!
//! The input file is a single UTF-8 JSON array of objects carrying the four
//! wire field names `fullName`, `emailAddress`, `phoneNumber`, `cityName`.
//! Field name matching is case-sensitive; unknown extra fields are ignored.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One contact entry from the input file.
///
/// `full_name` is the display and sort key and is never format-checked;
/// `city_name` is the grouping key for aggregation. Only `email_address` and
/// `phone_number` are validated.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Contact {
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "emailAddress")]
    pub email_address: String,
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    #[serde(rename = "cityName")]
    pub city_name: String,
}

impl Contact {
    /// Load every contact from the JSON array at `path`.
    ///
    /// Either the whole array deserializes or the call fails; there are no
    /// partial results. Errors carry the path for the diagnostic.
    pub fn load_all(path: &Path) -> Result<Vec<Contact>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;

        let contacts: Vec<Contact> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse contacts from: {}", path.display()))?;

        Ok(contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_input(tmp: &TempDir, content: &str) -> std::path::PathBuf {
        let path = tmp.path().join("contacts.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_all_parses_records_in_order() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(
            &tmp,
            r#"[
                {"fullName":"Jane Doe","emailAddress":"jane@example.com","phoneNumber":"555-1234","cityName":"Springfield"},
                {"fullName":"Al Smith","emailAddress":"al@example.com","phoneNumber":"555 0000","cityName":"Shelbyville"}
            ]"#,
        );

        let contacts = Contact::load_all(&path).unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].full_name, "Jane Doe");
        assert_eq!(contacts[0].email_address, "jane@example.com");
        assert_eq!(contacts[1].city_name, "Shelbyville");
    }

    #[test]
    fn test_load_all_ignores_extra_fields() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(
            &tmp,
            r#"[{"fullName":"Jane","emailAddress":"j@e","phoneNumber":"1","cityName":"X","note":"ignored"}]"#,
        );

        let contacts = Contact::load_all(&path).unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].full_name, "Jane");
    }

    #[test]
    fn test_load_all_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = Contact::load_all(&tmp.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read input file"));
    }

    #[test]
    fn test_load_all_rejects_non_array() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(&tmp, r#"{"fullName":"Jane"}"#);
        let err = Contact::load_all(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse contacts"));
    }

    #[test]
    fn test_load_all_rejects_missing_field() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(
            &tmp,
            r#"[{"fullName":"Jane","emailAddress":"j@e","cityName":"X"}]"#,
        );
        assert!(Contact::load_all(&path).is_err());
    }

    #[test]
    fn test_load_all_rejects_non_string_field() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(
            &tmp,
            r#"[{"fullName":"Jane","emailAddress":"j@e","phoneNumber":5551234,"cityName":"X"}]"#,
        );
        assert!(Contact::load_all(&path).is_err());
    }

    #[test]
    fn test_load_all_empty_array() {
        let tmp = TempDir::new().unwrap();
        let path = write_input(&tmp, "[]");
        let contacts = Contact::load_all(&path).unwrap();
        assert!(contacts.is_empty());
    }
}
