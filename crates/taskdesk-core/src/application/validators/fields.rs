//! Field-level validation
//!
//! Stateless checks shared by every entity validator. Each check returns the
//! first violated rule as [`Error::Validation`].

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

const DEFAULT_MIN_LEN: usize = 1;
const DEFAULT_MAX_LEN: usize = 100;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.!#$%&'*+/=?`{|}~-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

static DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date pattern is valid"));

/// Check that the trimmed value has between `min` and `max` characters
pub fn require_non_empty(value: &str, field: &str, min: usize, max: usize) -> Result<()> {
    let len = value.trim().chars().count();

    if value.is_empty() || len < min {
        return Err(Error::validation(format!(
            "{} must be at least {} character(s)",
            field, min
        )));
    }

    if len > max {
        return Err(Error::validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }

    Ok(())
}

/// [`require_non_empty`] with the default bounds of 1 and 100
pub fn require_non_empty_default(value: &str, field: &str) -> Result<()> {
    require_non_empty(value, field, DEFAULT_MIN_LEN, DEFAULT_MAX_LEN)
}

pub fn validate_email(email: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(Error::validation("Invalid email format"));
    }
    Ok(())
}

/// Check for `YYYY-MM-DD` digit grouping and a real calendar date
pub fn validate_date(value: &str) -> Result<()> {
    parse_date(value).map(|_| ())
}

/// Same checks as [`validate_date`], returning the parsed date
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    if !DATE_RE.is_match(value) {
        return Err(Error::validation("Date must be in YYYY-MM-DD format"));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| Error::validation("Invalid date value"))
}

/// Password complexity: 8+ characters with an uppercase letter, a lowercase
/// letter, and a digit
pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < 8 {
        return Err(Error::validation("Password must be at least 8 characters"));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(Error::validation("Password must contain an uppercase letter"));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(Error::validation("Password must contain a lowercase letter"));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(Error::validation("Password must contain a digit"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty_bounds() {
        assert!(require_non_empty("ab", "Name", 2, 5).is_ok());
        assert!(require_non_empty("abcde", "Name", 2, 5).is_ok());
        assert!(require_non_empty("  ab  ", "Name", 2, 5).is_ok());

        let err = require_non_empty("a", "Name", 2, 5).unwrap_err();
        assert_eq!(err.to_string(), "Name must be at least 2 character(s)");

        let err = require_non_empty("abcdef", "Name", 2, 5).unwrap_err();
        assert_eq!(err.to_string(), "Name must be at most 5 characters");
    }

    #[test]
    fn test_require_non_empty_whitespace_only() {
        assert!(require_non_empty("", "Name", 1, 10).is_err());
        assert!(require_non_empty("    ", "Name", 1, 10).is_err());
    }

    #[test]
    fn test_require_non_empty_counts_characters() {
        assert!(require_non_empty("héllo", "Name", 1, 5).is_ok());
    }

    #[test]
    fn test_require_non_empty_default() {
        assert!(require_non_empty_default("x", "Field").is_ok());
        assert!(require_non_empty_default(&"x".repeat(100), "Field").is_ok());
        assert!(require_non_empty_default(&"x".repeat(101), "Field").is_err());
        assert!(require_non_empty_default("", "Field").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("first.last+tag@mail.example.co").is_ok());
        assert!(validate_email("o'brien@example.io").is_ok());

        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b.c").is_err());
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("a b@example.com").is_err());
        assert_eq!(
            validate_email("nope").unwrap_err().to_string(),
            "Invalid email format"
        );
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-01-15").is_ok());
        assert!(validate_date("2024-02-29").is_ok());

        assert_eq!(
            validate_date("2024-1-15").unwrap_err().to_string(),
            "Date must be in YYYY-MM-DD format"
        );
        assert!(validate_date("15/01/2024").is_err());
        assert!(validate_date(" 2024-01-15").is_err());

        assert_eq!(
            validate_date("2024-13-01").unwrap_err().to_string(),
            "Invalid date value"
        );
        assert!(validate_date("2023-02-29").is_err());
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Passw0rd").is_ok());

        assert_eq!(
            validate_password("Pa1").unwrap_err().to_string(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            validate_password("password1").unwrap_err().to_string(),
            "Password must contain an uppercase letter"
        );
        assert_eq!(
            validate_password("PASSWORD1").unwrap_err().to_string(),
            "Password must contain a lowercase letter"
        );
        assert_eq!(
            validate_password("Password").unwrap_err().to_string(),
            "Password must contain a digit"
        );
    }
}
