use serde::{Deserialize, Serialize};
use std::fmt;

/// A single address-book entry.
///
/// `id` is assigned by the caller. Only the name and phone fields are
/// required; everything else may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub notes: String,
}

impl Record {
    pub fn new(
        id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            ..Default::default()
        }
    }

    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.birth_date = birth_date.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Names of the required fields that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.first_name.is_empty() {
            missing.push("first name");
        }
        if self.last_name.is_empty() {
            missing.push("last name");
        }
        if self.phone_number.is_empty() {
            missing.push("phone number");
        }
        missing
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}, {}", self.id, self.full_name(), self.phone_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_drive_validity() {
        assert!(Record::new(1, "Jane", "Doe", "5551234567").is_valid());
        assert!(!Record::new(1, "Jon", "", "1234567890").is_valid());
        assert!(!Record::new(1, "", "Doe", "1234567890").is_valid());
        assert!(!Record::new(1, "Jon", "Doe", "").is_valid());
    }

    #[test]
    fn optional_fields_do_not_affect_validity() {
        let record = Record::new(2, "Ann", "Lee", "5550000000");
        assert!(record.email.is_empty());
        assert!(record.is_valid());
    }

    #[test]
    fn missing_fields_lists_every_gap() {
        let record = Record::new(1, "", "", "123");
        assert_eq!(record.missing_fields(), vec!["first name", "last name"]);
    }

    #[test]
    fn display_and_full_name() {
        let record = Record::new(7, "Ada", "Lovelace", "5551112222");
        assert_eq!(record.full_name(), "Ada Lovelace");
        assert_eq!(record.to_string(), "#7 Ada Lovelace, 5551112222");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let record = Record::new(1, "Ada", "Lovelace", "555").with_email("ada@example.com");
        let value = serde_json::to_value(&record).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        for key in [
            "id",
            "firstName",
            "lastName",
            "phoneNumber",
            "birthDate",
            "email",
            "address",
            "notes",
        ] {
            assert!(keys.iter().any(|k| k.as_str() == key), "missing {}", key);
        }
    }

    #[test]
    fn missing_optional_keys_default_to_empty() {
        let json = r#"{"id":4,"firstName":"A","lastName":"B","phoneNumber":"1"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record, Record::new(4, "A", "B", "1"));
    }
}
