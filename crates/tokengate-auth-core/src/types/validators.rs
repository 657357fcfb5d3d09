/*
[INPUT]:  Raw primitive field values
[OUTPUT]: Pass/fail checks naming the offending field
[POS]:    Data layer - leaf checks shared by every constructor
[UPDATE]: When a primitive rule (email shape, password length) changes
*/

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AuthError, Result};

/// Minimum accepted length for traditional-credential passwords
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern is valid")
});

pub(crate) fn require_email(field: &str, value: &str) -> Result<()> {
    if !EMAIL_PATTERN.is_match(value) {
        return Err(AuthError::validation(
            field,
            "must match a valid address pattern",
        ));
    }
    Ok(())
}

pub(crate) fn require_password(field: &str, value: &str) -> Result<()> {
    if value.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::validation(
            field,
            format!("must be at least {MIN_PASSWORD_LENGTH} characters long"),
        ));
    }
    Ok(())
}

pub(crate) fn require_positive(field: &str, value: i64) -> Result<u64> {
    if value <= 0 {
        return Err(AuthError::validation(field, "must be a positive integer"));
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("john@example.com")]
    #[case("first.last+tag@mail.example.org")]
    fn test_email_accepts(#[case] email: &str) {
        assert!(require_email("email", email).is_ok());
    }

    #[rstest]
    #[case("")]
    #[case("john")]
    #[case("john@")]
    #[case("@example.com")]
    #[case("john@example")]
    #[case("john@@example.com")]
    #[case("jo hn@example.com")]
    #[case("john@example..com")]
    fn test_email_rejects(#[case] email: &str) {
        let err = require_email("email", email).unwrap_err();
        assert_eq!(err.field(), Some("email"));
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(require_password("password", "1234567").is_err());
        assert!(require_password("password", "12345678").is_ok());
    }

    #[test]
    fn test_positive_rejects_zero_and_negative() {
        assert!(require_positive("created_at", 0).is_err());
        assert!(require_positive("created_at", -5).is_err());
        assert_eq!(require_positive("created_at", 42).unwrap(), 42);
    }
}
