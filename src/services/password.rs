use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::{Error, Result};

/// Checks a candidate password against the strength policy.
///
/// Returns the human-readable rejection reason, or `None` when the password
/// passes. Two rules: at least 8 characters, and not made up solely of
/// letters or solely of digits. A password of letters plus symbols passes;
/// the policy asks for "not one uniform character class", not a digit quota.
pub fn validate_strength(password: &str) -> Option<&'static str> {
    if password.chars().count() < 8 {
        return Some("Password must be at least 8 characters");
    }

    let only_letters = password.chars().all(|c| c.is_alphabetic());
    let only_digits = password.chars().all(|c| c.is_numeric());
    if only_letters || only_digits {
        return Some("Password must include letters and numbers");
    }

    None
}

/// Hashes a password with Argon2 and a fresh per-password salt.
///
/// The work factor makes this deliberately slow (tens of milliseconds); it
/// runs on accepted signups and password changes, not on every request.
pub fn hash(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::Internal(format!("Failed to hash password: {}", e)))?
        .to_string();

    Ok(password_hash)
}

/// Verifies a password against a stored hash.
///
/// Never errors: a malformed or non-Argon2 hash verifies as `false`, the
/// same observable outcome as a wrong password.
pub fn verify(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
