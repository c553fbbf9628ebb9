pub mod auth;
pub mod health;
pub mod profile;
pub mod users;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    error::Error,
    middleware::auth::{require_admin, require_auth},
    state::AppState,
};

/// Builds the application router.
///
/// Layout:
/// - `/health` is open and unprefixed
/// - everything else lives under `/api`
/// - `/api/auth/signup` and `/api/auth/login` are open
/// - the rest requires a bearer token; `/api/users/*` additionally requires
///   an active admin
pub fn router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/users", get(users::list_users))
        .route("/users/{id}/activate", post(users::activate_user))
        .route("/users/{id}/deactivate", post(users::deactivate_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    let protected_routes = Router::new()
        .route("/auth/me", get(auth::me))
        .route("/auth/logout", post(auth::logout))
        .route(
            "/profile",
            get(profile::get_profile).put(profile::update_profile),
        )
        .route("/profile/password", put(profile::change_password))
        .merge(admin_routes)
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let api_routes = Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .merge(protected_routes);

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Fallback for anything outside the route table, kept JSON like every other
/// error.
async fn route_not_found() -> Error {
    Error::NotFound("Route not found".to_string())
}

/// Helper to log handler errors with appropriate level
fn log_handler_error(operation: &str, e: &crate::error::Error) {
    match e {
        crate::error::Error::Sqlx(_)
        | crate::error::Error::Config(_)
        | crate::error::Error::Internal(_) => {
            tracing::error!(operation = operation, error = %e, "Handler operation failed");
        }
        _ => {
            tracing::warn!(operation = operation, error = %e, "Handler operation failed");
        }
    }
}
