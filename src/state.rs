use crate::{services::token::TokenService, store::UserStore};
use std::sync::Arc;

/// Application state shared across all HTTP handlers
///
/// This struct contains shared resources that need to be accessed
/// by API handlers: the user store and the token service.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend holding the user records
    pub store: Arc<dyn UserStore>,
    /// Issues and verifies bearer tokens
    pub tokens: Arc<TokenService>,
}

impl AppState {
    /// Create a new AppState instance
    ///
    /// # Arguments
    /// * `store` - User store implementation (Postgres in production)
    /// * `tokens` - Token service built from the auth configuration
    pub fn new(store: Arc<dyn UserStore>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }
}
