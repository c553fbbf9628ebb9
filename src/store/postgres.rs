use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::UserStore;
use crate::database::DbPool;
use crate::error::{Error, Result};
use crate::models::users::{NewUser, User, UserStatus};

/// Postgres-backed user store.
///
/// Every write is a single statement, so a rejected update (for example a
/// unique violation on email) leaves the existing row untouched without an
/// explicit transaction.
#[derive(Clone)]
pub struct PgUserStore {
    pool: DbPool,
}

impl PgUserStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Maps a unique-constraint failure on the email column to the duplicate
/// error every caller expects; everything else passes through as a database
/// error.
fn map_unique_violation(e: sqlx::Error) -> Error {
    let error_msg = e.to_string().to_lowercase();

    if error_msg.contains("unique")
        || error_msg.contains("duplicate key")
        || error_msg.contains("users_email_key") // PostgreSQL specific constraint name
    {
        Error::DuplicateEmail
    } else {
        Error::Sqlx(e)
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, new_user: NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash, full_name, role, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, email, password_hash, full_name, role, status, created_at, updated_at, last_login_at
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.full_name)
        .bind(new_user.role)
        .bind(new_user.status)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, full_name, role, status, created_at, updated_at, last_login_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Sqlx)?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, full_name, role, status, created_at, updated_at, last_login_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Sqlx)?;

        Ok(user)
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<(Vec<User>, i64)> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Sqlx)?;

        // Ids are time-ordered, so they break created_at ties deterministically
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, full_name, role, status, created_at, updated_at, last_login_at
            FROM users
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Sqlx)?;

        Ok((users, total))
    }

    async fn update_profile(
        &self,
        id: Uuid,
        full_name: &str,
        email: &str,
    ) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET full_name = $2, email = $3, updated_at = now()
            WHERE id = $1
            RETURNING id, email, password_hash, full_name, role, status, created_at, updated_at, last_login_at
            "#,
        )
        .bind(id)
        .bind(full_name)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(user)
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET password_hash = $2, updated_at = now()
            WHERE id = $1
            RETURNING id, email, password_hash, full_name, role, status, created_at, updated_at, last_login_at
            "#,
        )
        .bind(id)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Sqlx)?;

        Ok(user)
    }

    async fn set_status(&self, id: Uuid, status: UserStatus) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET status = $2, updated_at = now()
            WHERE id = $1
            RETURNING id, email, password_hash, full_name, role, status, created_at, updated_at, last_login_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Sqlx)?;

        Ok(user)
    }

    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET last_login_at = $2, updated_at = now()
            WHERE id = $1
            RETURNING id, email, password_hash, full_name, role, status, created_at, updated_at, last_login_at
            "#,
        )
        .bind(id)
        .bind(at)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Sqlx)?;

        Ok(user)
    }
}
