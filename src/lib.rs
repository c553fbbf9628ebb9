pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod validation;

pub use config::Config;
pub use database::DbPool;
pub use error::{Error, Result};
pub use state::AppState;
