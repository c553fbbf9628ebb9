//! Bearer-token authentication middleware.
//!
//! Two layers: [`require_auth`] verifies the token and records the caller's
//! identity, [`require_admin`] re-reads the account and enforces the admin
//! role on top of it.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    error::{Error, Result},
    models::users::UserRole,
    services::access,
    state::AppState,
};

/// Authenticated caller identity extracted from the bearer token.
///
/// This struct is added to request extensions by [`require_auth`] after the
/// token checks out. It carries only the token's subject; handlers that need
/// the full record load it themselves.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    /// User's unique identifier
    pub id: Uuid,
}

/// Token authentication middleware
///
/// Validates the `Authorization: Bearer <token>` header and adds
/// [`AuthenticatedUser`] to request extensions for handler access.
///
/// # Behavior
/// 1. Extracts the bearer token from the Authorization header
/// 2. Validates signature and expiration
/// 3. Adds `AuthenticatedUser` to request extensions
/// 4. Returns 401 if the header or token is missing, malformed, or expired
///
/// Deliberately checks the token only. Tokens are stateless, so the account
/// behind one may have been deactivated or deleted since issuance; handlers
/// and [`require_admin`] re-read the record where that matters.
///
/// # Usage
/// Apply this middleware to protected routes using `route_layer()`:
///
/// ```ignore
/// Router::new()
///     .route("/protected", get(protected_handler))
///     .route_layer(middleware::from_fn_with_state(
///         state.clone(),
///         require_auth,
///     ))
/// ```
pub async fn require_auth(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let auth_header = headers.get("authorization").and_then(|h| h.to_str().ok());
    let token = extract_bearer_token(auth_header)?;
    let user_id = state.tokens.verify(&token)?;

    request.extensions_mut().insert(AuthenticatedUser { id: user_id });
    Ok(next.run(request).await)
}

/// Admin gate; must be layered inside [`require_auth`].
///
/// Re-reads the caller's record on every request, so role or status changes
/// take effect immediately: a deleted account gets 401, a deactivated or
/// non-admin account gets 403.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let auth_user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| Error::Unauthorized("Missing authentication".to_string()))?;

    access::require_role(state.store.as_ref(), auth_user.id, UserRole::Admin).await?;

    Ok(next.run(request).await)
}

/// Extracts the Bearer token from the Authorization header
///
/// # Arguments
/// * `auth_header` - The Authorization header value (optional)
///
/// # Returns
/// The extracted token string
fn extract_bearer_token(auth_header: Option<&str>) -> Result<String> {
    match auth_header {
        Some(header) if header.starts_with("Bearer ") => {
            let token = header[7..].trim().to_string();
            if token.is_empty() {
                return Err(Error::Unauthorized("Empty bearer token".to_string()));
            }
            Ok(token)
        }
        Some(_) => Err(Error::Unauthorized(
            "Invalid Authorization header format. Expected: 'Bearer <token>'".to_string(),
        )),
        None => Err(Error::Unauthorized(
            "Missing Authorization header".to_string(),
        )),
    }
}
