use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
};

use crate::{
    error::Result,
    middleware::auth::AuthenticatedUser,
    models::requests::{LoginRequest, SignupRequest},
    models::users::User,
    services::{auth, users},
    state::AppState,
};

use super::log_handler_error;

/// Response body shared by signup and login: the account plus its token.
fn auth_response(user: &User, token: &str) -> serde_json::Value {
    serde_json::json!({
        "user": user,
        "token": token,
    })
}

/// POST /api/auth/signup
///
/// Registers a new user and returns the account with its first bearer token.
///
/// # Request Body
/// - `fullName`: Display name
/// - `email`: Email address (must be unique, compared case-insensitively)
/// - `password`: At least 8 characters, not solely letters or solely digits
///
/// # HTTP Status Codes
/// - `201 CREATED`: User registered successfully
/// - `400 BAD_REQUEST`: Missing fields, invalid email, weak password, or email already registered
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let (user, token) = auth::signup(state.store.as_ref(), &state.tokens, request)
        .await
        .inspect_err(|e| log_handler_error("signup", e))?;

    Ok((StatusCode::CREATED, Json(auth_response(&user, &token))))
}

/// POST /api/auth/login
///
/// Authenticates a user and returns the account with a fresh bearer token.
///
/// # Request Body
/// - `email`: Email address
/// - `password`: Password
///
/// # HTTP Status Codes
/// - `200 OK`: Logged in; `lastLoginAt` is updated
/// - `400 BAD_REQUEST`: Missing fields, invalid credentials, or inactive account
/// - `500 INTERNAL_SERVER_ERROR`: Database error
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>> {
    let (user, token) = auth::login(state.store.as_ref(), &state.tokens, request)
        .await
        .inspect_err(|e| log_handler_error("login", e))?;

    Ok(Json(auth_response(&user, &token)))
}

/// GET /api/auth/me
///
/// Returns the authenticated caller's current record.
///
/// # HTTP Status Codes
/// - `200 OK`: Current user returned
/// - `401 UNAUTHORIZED`: Missing, invalid, or expired token
/// - `404 NOT_FOUND`: Account deleted after the token was issued
pub async fn me(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<User>> {
    let user = users::get_user(state.store.as_ref(), auth_user.id)
        .await
        .inspect_err(|e| log_handler_error("me", e))?;

    Ok(Json(user))
}

/// POST /api/auth/logout
///
/// Acknowledges a logout. Tokens are stateless, so there is nothing to
/// revoke server-side; the client discards its token.
///
/// # HTTP Status Codes
/// - `200 OK`: Acknowledged
/// - `401 UNAUTHORIZED`: Missing, invalid, or expired token
pub async fn logout(
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Json<serde_json::Value> {
    tracing::debug!(operation = "logout", user_id = %auth_user.id, "User logged out");

    Json(serde_json::json!({ "message": "Logged out" }))
}
