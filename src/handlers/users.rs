//! Admin endpoints for managing accounts. All routes here sit behind both
//! the auth and the admin middleware layers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use uuid::Uuid;

use crate::{
    error::{Error, Result},
    models::pages::Page,
    models::requests::ListUsersQuery,
    models::users::{User, UserStatus},
    services::users,
    state::AppState,
};

use super::log_handler_error;

/// A malformed id cannot name any account, so it gets the same 404 as an
/// unknown one. Keeps the error body JSON instead of the extractor's
/// plain-text rejection.
fn parse_user_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| Error::NotFound("User not found".to_string()))
}

/// GET /api/users?page=&limit=
///
/// Lists users newest-first.
///
/// # Query Parameters
/// - `page`: 1-based page number (default 1; values below 1 floor to 1)
/// - `limit`: page size (default 10, capped at 100)
///
/// # HTTP Status Codes
/// - `200 OK`: Page returned; past-the-end pages have empty `items`
/// - `401 UNAUTHORIZED`: Missing, invalid, or expired token
/// - `403 FORBIDDEN`: Caller is not an active admin
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Result<Json<Page<User>>> {
    let page = query.page.unwrap_or(1);
    let limit = query.limit.unwrap_or(users::DEFAULT_PAGE_LIMIT);

    let result = users::list_users(state.store.as_ref(), page, limit)
        .await
        .inspect_err(|e| log_handler_error("list_users", e))?;

    Ok(Json(result))
}

/// POST /api/users/{id}/activate
///
/// Reactivates an account. Activating an already-active account succeeds.
///
/// # HTTP Status Codes
/// - `200 OK`: Updated user returned
/// - `401 UNAUTHORIZED`: Missing, invalid, or expired token
/// - `403 FORBIDDEN`: Caller is not an active admin
/// - `404 NOT_FOUND`: No account with that id
pub async fn activate_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let id = parse_user_id(&id)?;
    let user = users::set_status(state.store.as_ref(), id, UserStatus::Active)
        .await
        .inspect_err(|e| log_handler_error("activate_user", e))?;

    Ok(Json(user))
}

/// POST /api/users/{id}/deactivate
///
/// Deactivates an account: it can no longer log in, and its next admin-gated
/// request is refused. Already-issued tokens keep working on non-admin
/// endpoints until they expire.
///
/// # HTTP Status Codes
/// - `200 OK`: Updated user returned
/// - `401 UNAUTHORIZED`: Missing, invalid, or expired token
/// - `403 FORBIDDEN`: Caller is not an active admin
/// - `404 NOT_FOUND`: No account with that id
pub async fn deactivate_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>> {
    let id = parse_user_id(&id)?;
    let user = users::set_status(state.store.as_ref(), id, UserStatus::Inactive)
        .await
        .inspect_err(|e| log_handler_error("deactivate_user", e))?;

    Ok(Json(user))
}
