//! Input validation utilities for the service layer.
//!
//! Validation failures surface as [`Error::Validation`] with a message that is
//! safe to return to the caller verbatim.

use crate::error::{Error, Result};

/// Validates email format using comprehensive checks
///
/// # Arguments
/// * `email` - The email address to validate
///
/// # Returns
/// * `Ok(())` if the email is valid
/// * `Err(Error)` with descriptive message if invalid
///
/// # Examples
/// ```
/// use userhub::validation::validate_email;
///
/// validate_email("user@example.com").unwrap(); // Valid
/// assert!(validate_email("invalid-email").is_err()); // Returns Error
/// ```
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();

    // Basic format validation
    if email.is_empty() {
        return Err(Error::Validation("Email cannot be empty".to_string()));
    }

    // Length validation
    if email.len() > 254 {
        return Err(Error::Validation(
            "Email address is too long (max 254 characters)".to_string(),
        ));
    }

    // Check for basic structure
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Err(Error::Validation(
            "Invalid email format: must contain @ symbol not at start or end".to_string(),
        ));
    }

    // Split into local and domain parts
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(Error::Validation(
            "Invalid email format: must contain exactly one @ symbol".to_string(),
        ));
    }

    let (local_part, domain) = (parts[0], parts[1]);

    // Validate local part
    if local_part.is_empty() {
        return Err(Error::Validation(
            "Invalid email format: local part cannot be empty".to_string(),
        ));
    }

    if local_part.len() > 64 {
        return Err(Error::Validation(
            "Invalid email format: local part is too long (max 64 characters)".to_string(),
        ));
    }

    // Validate domain part
    if domain.is_empty() {
        return Err(Error::Validation(
            "Invalid email format: domain part cannot be empty".to_string(),
        ));
    }

    // Check domain has at least one dot
    if !domain.contains('.') {
        return Err(Error::Validation(
            "Invalid email format: domain must contain at least one dot".to_string(),
        ));
    }

    // Check for consecutive dots
    if email.contains("..") {
        return Err(Error::Validation(
            "Invalid email format: cannot contain consecutive dots".to_string(),
        ));
    }

    // Check for invalid characters including spaces
    let invalid_chars = ['<', '>', '(', ')', '[', ']', '\\', ',', ';', ':', '"', ' '];
    for char in invalid_chars.iter() {
        if email.contains(*char) {
            return Err(Error::Validation(format!(
                "Invalid email format: cannot contain '{}'",
                char
            )));
        }
    }

    Ok(())
}

/// Trims, lowercases and validates an email address.
///
/// Emails are compared case-insensitively everywhere (uniqueness, login), so
/// every path that accepts one goes through here before touching the store.
pub fn normalize_email(email: &str) -> Result<String> {
    let normalized = email.trim().to_lowercase();
    validate_email(&normalized)?;
    Ok(normalized)
}

/// Checks that every listed field is present and non-blank.
///
/// Field names are the wire names (`fullName`, not `full_name`) so the error
/// message matches what the client actually sent. All missing fields are
/// reported in one pass:
///
/// `Missing fields: fullName, password`
pub fn require_fields(fields: &[(&str, Option<&str>)]) -> Result<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_none_or(|v| v.trim().is_empty()))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(format!(
            "Missing fields: {}",
            missing.join(", ")
        )))
    }
}

/// Sanitizes string input by trimming whitespace
///
/// # Arguments
/// * `input` - The input string to sanitize
///
/// # Returns
/// * Sanitized string with trimmed whitespace
/// * Empty string if input was None or only whitespace
pub fn sanitize_string(input: &str) -> String {
    input.trim().to_string()
}
