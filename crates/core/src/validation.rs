//! Field validation for customer, invoice, and owner input.
//!
//! All functions return `Err` with a human-readable message suitable for a
//! 400 response body. Handlers decide which fields are required; these
//! functions only check the shape of values that were supplied.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// Maximum length for customer and owner names.
pub const MAX_NAME_LEN: usize = 100;

/// Minimum password length for owner registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Digits, spaces, `+`, `(`, `)`, and `-`. Compiled once, reused forever.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9 +()\-]*$").expect("valid regex"));

/// Shallow `local@domain.tld` shape.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));

/// A customer or owner name: required, non-empty after trimming, bounded.
pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Name is required".into());
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(format!("Name is too long (max {MAX_NAME_LEN} characters)"));
    }
    Ok(())
}

/// Phone numbers may contain digits, spaces, `+`, `(`, `)`, and `-`.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    if !PHONE_RE.is_match(phone) {
        return Err("Invalid phone number format".into());
    }
    Ok(())
}

/// Shallow email shape check (`local@domain.tld`). No uniqueness here.
pub fn validate_email(email: &str) -> Result<(), String> {
    if !EMAIL_RE.is_match(email) {
        return Err("Invalid email address".into());
    }
    Ok(())
}

/// Dates arrive as `YYYY-MM-DD` strings from the UI.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("Invalid {field} format (YYYY-MM-DD)"))
}

/// Invoice totals must be strictly positive.
///
/// A zero total is rejected on purpose: the source system treated 0 as a
/// missing amount, and complimentary invoices are not (yet) a supported
/// concept. NaN and negatives fail the same check.
pub fn validate_total_amount(total_amount: f64) -> Result<(), String> {
    if !(total_amount > 0.0) {
        return Err("total_amount must be greater than zero".into());
    }
    Ok(())
}

/// Minimum password strength for owner accounts.
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_must_not_be_empty_or_whitespace() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("Priya Sharma").is_ok());
    }

    #[test]
    fn name_length_is_bounded() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_name(&long).is_err());
        assert!(validate_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
    }

    #[test]
    fn phone_allows_common_punctuation() {
        assert!(validate_phone("+1 (555) 123-4567").is_ok());
        assert!(validate_phone("555 1234").is_ok());
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn email_shape() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("a@b").is_err());
    }

    #[test]
    fn date_parsing() {
        assert!(parse_date("birthday", "1990-05-14").is_ok());
        let err = parse_date("birthday", "14/05/1990").unwrap_err();
        assert!(err.contains("birthday"));
    }

    #[test]
    fn zero_total_is_rejected() {
        assert!(validate_total_amount(0.0).is_err());
        assert!(validate_total_amount(-5.0).is_err());
        assert!(validate_total_amount(f64::NAN).is_err());
        assert!(validate_total_amount(0.01).is_ok());
    }

    #[test]
    fn password_minimum_length() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("long-enough-password").is_ok());
    }
}
