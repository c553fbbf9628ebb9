use chrono::Utc;

use crate::error::{Error, Result};
use crate::models::requests::{LoginRequest, SignupRequest};
use crate::models::users::{NewUser, User, UserRole, UserStatus};
use crate::services::{password, token::TokenService};
use crate::store::UserStore;
use crate::validation;

/// Registers a new account and signs its first bearer token.
///
/// New accounts always start as an active `user`; there is no path to admin
/// through this endpoint. Email is trimmed and lowercased before the
/// uniqueness check so case variants cannot create twin accounts.
pub async fn signup(
    store: &dyn UserStore,
    tokens: &TokenService,
    request: SignupRequest,
) -> Result<(User, String)> {
    validation::require_fields(&[
        ("fullName", request.full_name.as_deref()),
        ("email", request.email.as_deref()),
        ("password", request.password.as_deref()),
    ])?;

    let full_name = validation::sanitize_string(request.full_name.as_deref().unwrap_or_default());
    let email = validation::normalize_email(request.email.as_deref().unwrap_or_default())?;
    let password = request.password.unwrap_or_default();

    if let Some(reason) = password::validate_strength(&password) {
        return Err(Error::WeakPassword(reason.to_string()));
    }

    let new_user = NewUser {
        email,
        password_hash: password::hash(&password)?,
        full_name,
        role: UserRole::User,
        status: UserStatus::Active,
    };

    let user = store.insert(new_user).await?;
    let token = tokens.issue(user.id)?;

    tracing::info!(
        operation = "signup",
        user_id = %user.id,
        email = %user.email,
        "User registered",
    );

    Ok((user, token))
}

/// Verifies credentials and signs a fresh bearer token.
///
/// Unknown email and wrong password collapse into the same
/// [`Error::InvalidCredentials`], and the inactive check runs only after
/// credentials verify, so the response never reveals whether an address is
/// registered.
pub async fn login(
    store: &dyn UserStore,
    tokens: &TokenService,
    request: LoginRequest,
) -> Result<(User, String)> {
    validation::require_fields(&[
        ("email", request.email.as_deref()),
        ("password", request.password.as_deref()),
    ])?;

    let email = validation::normalize_email(request.email.as_deref().unwrap_or_default())?;
    let password = request.password.unwrap_or_default();

    let user = match store.find_by_email(&email).await? {
        Some(user) if password::verify(&password, &user.password_hash) => user,
        _ => {
            tracing::warn!(operation = "login", email = %email, "Invalid credentials");
            return Err(Error::InvalidCredentials);
        }
    };

    if user.status != UserStatus::Active {
        tracing::warn!(operation = "login", user_id = %user.id, "Inactive account rejected");
        return Err(Error::InactiveAccount);
    }

    let user = store
        .record_login(user.id, Utc::now())
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    let token = tokens.issue(user.id)?;

    tracing::info!(operation = "login", user_id = %user.id, "User logged in");

    Ok((user, token))
}

/// Creates the configured admin account at startup if it does not exist.
///
/// Returns the created user, or `None` when an account with that email is
/// already present. Runs through the same normalization, strength policy and
/// hashing as signup; only the role differs.
pub async fn ensure_bootstrap_admin(
    store: &dyn UserStore,
    email: &str,
    admin_password: &str,
) -> Result<Option<User>> {
    let email = validation::normalize_email(email)?;

    if store.find_by_email(&email).await?.is_some() {
        tracing::debug!(operation = "bootstrap_admin", "Admin account already present");
        return Ok(None);
    }

    if let Some(reason) = password::validate_strength(admin_password) {
        return Err(Error::WeakPassword(reason.to_string()));
    }

    let user = store
        .insert(NewUser {
            email,
            password_hash: password::hash(admin_password)?,
            full_name: "Administrator".to_string(),
            role: UserRole::Admin,
            status: UserStatus::Active,
        })
        .await?;

    tracing::info!(
        operation = "bootstrap_admin",
        user_id = %user.id,
        "Bootstrap admin created",
    );

    Ok(Some(user))
}
