pub mod auth;

pub use auth::{AuthenticatedUser, require_admin, require_auth};
