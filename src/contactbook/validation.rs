//! Field-level checks applied by clients before a record is minted.
//!
//! The store itself only requires the name and phone fields to be present
//! (see [`Record::is_valid`]). These helpers are stricter and are meant for
//! input forms: they reject names with digits, phones without enough digits,
//! and birth dates in the future.

use crate::error::{BookError, Result};
use crate::model::Record;
use chrono::{Local, NaiveDate};

const BIRTH_DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"];

/// Letters, spaces and hyphens only; between 2 and 49 characters.
pub fn is_valid_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let len = name.chars().count();
    name.chars()
        .all(|c| c.is_alphabetic() || c == ' ' || c == '-')
        && len > 1
        && len < 50
}

/// No letters allowed; 10 or 11 digits once separators are stripped.
pub fn is_valid_phone(phone: &str) -> bool {
    if phone.is_empty() || phone.chars().any(char::is_alphabetic) {
        return false;
    }
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    (10..=11).contains(&digits)
}

/// Empty is fine. Otherwise needs an `@` with a `.` somewhere after it.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() {
        return true;
    }
    match email.find('@') {
        Some(at) => email[at..].contains('.'),
        None => false,
    }
}

/// Empty is fine. Otherwise must parse and not lie in the future.
pub fn is_valid_birth_date(date: &str) -> bool {
    if date.is_empty() {
        return true;
    }
    parse_birth_date(date).is_some_and(|d| d <= Local::now().date_naive())
}

pub fn parse_birth_date(date: &str) -> Option<NaiveDate> {
    BIRTH_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(date.trim(), fmt).ok())
}

/// Runs every field check and reports all failures at once.
pub fn check_record(record: &Record) -> Result<()> {
    let mut problems = Vec::new();

    if !is_valid_name(&record.first_name) {
        problems.push("first name must be 2-49 letters, spaces or hyphens");
    }
    if !is_valid_name(&record.last_name) {
        problems.push("last name must be 2-49 letters, spaces or hyphens");
    }
    if !is_valid_phone(&record.phone_number) {
        problems.push("phone number must contain 10 or 11 digits and no letters");
    }
    if !is_valid_email(&record.email) {
        problems.push("email must contain '@' followed by a '.'");
    }
    if !is_valid_birth_date(&record.birth_date) {
        problems.push("birth date must be a past date (YYYY-MM-DD)");
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(BookError::Validation(problems.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert!(is_valid_name("Anne-Marie"));
        assert!(is_valid_name("Mary Jane"));
        assert!(is_valid_name("Ёжиков"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("A"));
        assert!(!is_valid_name("R2D2"));
        assert!(!is_valid_name(&"a".repeat(50)));
    }

    #[test]
    fn phones() {
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("555-1234"));
        assert!(!is_valid_phone("555123456x"));
        assert!(!is_valid_phone("123456789012"));
    }

    #[test]
    fn emails() {
        assert!(is_valid_email(""));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a.b@co"));
        assert!(!is_valid_email("plain"));
        // A dot before the `@` is fine as long as one follows it too
        assert!(is_valid_email("a.b@c.d"));
    }

    #[test]
    fn birth_dates() {
        assert!(is_valid_birth_date(""));
        assert!(is_valid_birth_date("1990-04-12"));
        assert!(is_valid_birth_date("12.04.1990"));
        assert!(is_valid_birth_date("04/12/1990"));
        assert!(!is_valid_birth_date("3000-01-01"));
        assert!(!is_valid_birth_date("yesterday"));
    }

    #[test]
    fn check_record_collects_all_problems() {
        let record = Record::new(1, "J", "Doe", "12").with_email("nope");
        let err = check_record(&record).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("first name"));
        assert!(msg.contains("phone number"));
        assert!(msg.contains("email"));
        assert!(!msg.contains("last name"));
    }

    #[test]
    fn check_record_accepts_good_input() {
        let record = Record::new(1, "Jane", "Doe", "555-123-4567")
            .with_email("jane@example.com")
            .with_birth_date("1985-02-28");
        assert!(check_record(&record).is_ok());
    }
}
