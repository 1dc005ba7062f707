//! Input validation utilities

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

// Compile regex patterns once at startup. The patterns are hardcoded and
// always valid, so expect() cannot fire at runtime.
static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_]{3,150}$").expect("hardcoded username regex is invalid")
});

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("hardcoded email regex is invalid")
});

/// Validate username format (3-150 characters, alphanumeric and underscore)
pub fn validate_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}

/// validator crate compatible custom validator for username shape
pub fn validate_username_shape(username: &str) -> Result<(), ValidationError> {
    if validate_username(username) {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_username");
        err.message =
            Some("Usernames are 3-150 characters: letters, digits and underscores.".into());
        Err(err)
    }
}

/// validator crate compatible validator for an optional email field: the
/// empty string passes, anything else must look like an address.
pub fn validate_optional_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || (email.len() <= 254 && EMAIL_REGEX.is_match(email)) {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_email");
        err.message = Some("Enter a valid email address.".into());
        Err(err)
    }
}
