//! Input validation for account data.
//!
//! Email syntax and the password complexity policy are checked here, before
//! any hashing or store access happens.

use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::error::SharedError;

/// Minimum number of characters in a password
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum length of an email address (RFC 5321 path limit)
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Message returned for any password policy violation
pub const PASSWORD_POLICY_MESSAGE: &str = "Password must meet the following criteria: \
minimum length of 8 characters, at least one uppercase letter, \
at least one lowercase letter, at least one digit, \
and at least one special character.";

lazy_static! {
    /// `local@domain.tld`; the domain needs at least one dot.
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$"
    )
    .expect("email pattern compiles");
}

/// Canonical form used for storage and lookup.
///
/// Uniqueness is case-insensitive, so `A@B.com` and `a@b.com` are the same
/// account.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check that an email address is syntactically valid
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(SharedError::validation("email", "Email is required"));
    }
    if email.len() > MAX_EMAIL_LENGTH || !EMAIL_PATTERN.is_match(email) {
        return Err(SharedError::validation("email", "Invalid email format"));
    }
    Ok(())
}

/// Check a new password against the complexity policy
///
/// A valid password has at least 8 characters, one ASCII uppercase letter,
/// one ASCII lowercase letter, one ASCII digit and one character outside
/// `[A-Za-z0-9]`. Line breaks are not allowed anywhere in it.
pub fn validate_password(password: &str) -> Result<(), SharedError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let single_line = !password.contains(['\n', '\r', '\u{2028}', '\u{2029}']);
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| !c.is_ascii_alphanumeric());

    if long_enough && single_line && has_upper && has_lower && has_digit && has_special {
        Ok(())
    } else {
        Err(SharedError::validation("password", PASSWORD_POLICY_MESSAGE))
    }
}
