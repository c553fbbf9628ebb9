//! Shared fixtures for the integration tests.
//!
//! Workflows run against a [`MemoryUserStore`], which honors the same store
//! contract as the Postgres implementation, so no database is needed.

#![allow(dead_code)] // Not every test binary uses every helper

use std::sync::Arc;

use chrono::Duration;
use uuid::Uuid;

use userhub::{
    models::requests::{LoginRequest, SignupRequest},
    models::users::{NewUser, User, UserRole, UserStatus},
    services::{password, token::TokenService},
    store::{MemoryUserStore, UserStore},
};

/// Password that satisfies the strength policy; shared by most fixtures.
pub const TEST_PASSWORD: &str = "SecurePass123";

/// Test fixture bundling the store and token service the workflows need.
pub struct TestApp {
    pub store: Arc<MemoryUserStore>,
    pub tokens: TokenService,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemoryUserStore::new()),
            tokens: TokenService::new("test-secret-key-for-testing", Duration::hours(6)),
        }
    }

    /// Generate a unique test email
    pub fn unique_email(prefix: &str) -> String {
        format!("{}_{}@example.com", prefix, Uuid::now_v7())
    }

    pub fn signup_request(email: &str) -> SignupRequest {
        SignupRequest {
            full_name: Some("Test User".to_string()),
            email: Some(email.to_string()),
            password: Some(TEST_PASSWORD.to_string()),
        }
    }

    pub fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    /// Inserts a user directly through the store, skipping the signup
    /// workflow. Hashing is the slow part, so bulk fixtures should hash once
    /// and go through [`TestApp::seed_user_with_hash`] instead.
    pub async fn seed_user(&self, email: &str, role: UserRole, status: UserStatus) -> User {
        let password_hash = password::hash(TEST_PASSWORD).expect("hash test password");
        self.seed_user_with_hash(email, &password_hash, role, status)
            .await
    }

    pub async fn seed_user_with_hash(
        &self,
        email: &str,
        password_hash: &str,
        role: UserRole,
        status: UserStatus,
    ) -> User {
        let new_user = NewUser {
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            full_name: "Seeded User".to_string(),
            role,
            status,
        };
        self.store.insert(new_user).await.expect("seed user")
    }

    pub async fn seed_admin(&self) -> User {
        self.seed_user(
            &Self::unique_email("admin"),
            UserRole::Admin,
            UserStatus::Active,
        )
        .await
    }
}
