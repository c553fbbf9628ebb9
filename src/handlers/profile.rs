//! Self-service endpoints: the caller reads and edits their own account.

use axum::{
    Json,
    extract::{Extension, State},
};

use crate::{
    error::Result,
    middleware::auth::AuthenticatedUser,
    models::requests::{ChangePasswordRequest, UpdateProfileRequest},
    models::users::User,
    services::users,
    state::AppState,
};

use super::log_handler_error;

/// GET /api/profile
///
/// Returns the caller's current record.
///
/// # HTTP Status Codes
/// - `200 OK`: Profile returned
/// - `401 UNAUTHORIZED`: Missing, invalid, or expired token
/// - `404 NOT_FOUND`: Account deleted after the token was issued
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
) -> Result<Json<User>> {
    let user = users::get_user(state.store.as_ref(), auth_user.id)
        .await
        .inspect_err(|e| log_handler_error("get_profile", e))?;

    Ok(Json(user))
}

/// PUT /api/profile
///
/// Updates the caller's name and email.
///
/// # Request Body
/// - `fullName`: New display name
/// - `email`: New email address (must stay unique)
///
/// # HTTP Status Codes
/// - `200 OK`: Updated user returned
/// - `400 BAD_REQUEST`: Missing fields, invalid email, or email already registered
/// - `401 UNAUTHORIZED`: Missing, invalid, or expired token
/// - `404 NOT_FOUND`: Account deleted after the token was issued
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<User>> {
    let user = users::update_profile(state.store.as_ref(), auth_user.id, request)
        .await
        .inspect_err(|e| log_handler_error("update_profile", e))?;

    Ok(Json(user))
}

/// PUT /api/profile/password
///
/// Changes the caller's password after verifying the current one.
///
/// # Request Body
/// - `currentPassword`: Must match the stored hash
/// - `newPassword`: Must pass the same strength policy as signup
///
/// # HTTP Status Codes
/// - `200 OK`: Password updated
/// - `400 BAD_REQUEST`: Missing fields, wrong current password, or weak new password
/// - `401 UNAUTHORIZED`: Missing, invalid, or expired token
/// - `404 NOT_FOUND`: Account deleted after the token was issued
pub async fn change_password(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(request): Json<ChangePasswordRequest>,
) -> Result<Json<serde_json::Value>> {
    users::change_password(state.store.as_ref(), auth_user.id, request)
        .await
        .inspect_err(|e| log_handler_error("change_password", e))?;

    Ok(Json(serde_json::json!({ "message": "Password updated" })))
}
