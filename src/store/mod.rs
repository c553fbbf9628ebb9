//! Persistence for user records.
//!
//! The workflows in `services` talk to a [`UserStore`] rather than to sqlx
//! directly, so the backing store can be swapped: [`PgUserStore`] in
//! production, [`MemoryUserStore`] for development and tests.

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::Result;
use crate::models::users::{NewUser, User, UserStatus};

/// Storage trait for user persistence operations.
///
/// Email uniqueness is the store's contract: every implementation rejects a
/// second record with the same (already normalized) email with
/// [`crate::error::Error::DuplicateEmail`], on insert and on profile update
/// alike, leaving existing rows untouched.
///
/// Update operations return `Ok(None)` when no record has the given id, so
/// callers can distinguish "gone" from "failed".
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> Result<User>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// A newest-first window over all users plus the total count.
    async fn list_page(&self, offset: i64, limit: i64) -> Result<(Vec<User>, i64)>;

    async fn update_profile(
        &self,
        id: Uuid,
        full_name: &str,
        email: &str,
    ) -> Result<Option<User>>;

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<Option<User>>;

    async fn set_status(&self, id: Uuid, status: UserStatus) -> Result<Option<User>>;

    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<Option<User>>;
}
