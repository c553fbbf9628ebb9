//! In-memory store for development and testing.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::UserStore;
use crate::error::{Error, Result};
use crate::models::users::{NewUser, User, UserStatus};

/// Keeps user records in a `HashMap` behind an async lock. Observable
/// behavior matches [`super::PgUserStore`]: duplicate emails rejected,
/// newest-first listing, `None` for updates against unknown ids.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == new_user.email) {
            return Err(Error::DuplicateEmail);
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::now_v7(),
            email: new_user.email,
            password_hash: new_user.password_hash,
            full_name: new_user.full_name,
            role: new_user.role,
            status: new_user.status,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        };
        users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn list_page(&self, offset: i64, limit: i64) -> Result<(Vec<User>, i64)> {
        let users = self.users.read().await;
        let total = users.len() as i64;

        let mut all: Vec<User> = users.values().cloned().collect();
        // Same order as the Postgres query: newest first, id as tie-break
        all.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));

        let items = all
            .into_iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .collect();

        Ok((items, total))
    }

    async fn update_profile(
        &self,
        id: Uuid,
        full_name: &str,
        email: &str,
    ) -> Result<Option<User>> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.id != id && u.email == email) {
            return Err(Error::DuplicateEmail);
        }

        match users.get_mut(&id) {
            Some(user) => {
                user.full_name = full_name.to_string();
                user.email = email.to_string();
                user.updated_at = Utc::now();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<Option<User>> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.password_hash = password_hash.to_string();
                user.updated_at = Utc::now();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn set_status(&self, id: Uuid, status: UserStatus) -> Result<Option<User>> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.status = status;
                user.updated_at = Utc::now();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn record_login(&self, id: Uuid, at: DateTime<Utc>) -> Result<Option<User>> {
        let mut users = self.users.write().await;
        match users.get_mut(&id) {
            Some(user) => {
                user.last_login_at = Some(at);
                user.updated_at = Utc::now();
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::UserRole;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            full_name: "Test User".to_string(),
            role: UserRole::User,
            status: UserStatus::Active,
        }
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_email() {
        let store = MemoryUserStore::new();
        store.insert(new_user("a@example.com")).await.unwrap();
        let result = store.insert(new_user("a@example.com")).await;
        assert!(matches!(result, Err(Error::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_find_by_email_and_id_agree() {
        let store = MemoryUserStore::new();
        let inserted = store.insert(new_user("b@example.com")).await.unwrap();
        let by_email = store.find_by_email("b@example.com").await.unwrap().unwrap();
        let by_id = store.find_by_id(inserted.id).await.unwrap().unwrap();
        assert_eq!(by_email.id, inserted.id);
        assert_eq!(by_id.email, "b@example.com");
    }

    #[tokio::test]
    async fn test_list_page_is_newest_first() {
        let store = MemoryUserStore::new();
        for i in 0..5 {
            store
                .insert(new_user(&format!("user{}@example.com", i)))
                .await
                .unwrap();
        }

        let (items, total) = store.list_page(0, 3).await.unwrap();
        assert_eq!(total, 5);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].email, "user4@example.com");
        assert_eq!(items[2].email, "user2@example.com");

        let (rest, _) = store.list_page(3, 3).await.unwrap();
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[1].email, "user0@example.com");
    }

    #[tokio::test]
    async fn test_update_profile_conflict_leaves_record_unchanged() {
        let store = MemoryUserStore::new();
        store.insert(new_user("taken@example.com")).await.unwrap();
        let victim = store.insert(new_user("victim@example.com")).await.unwrap();

        let result = store
            .update_profile(victim.id, "New Name", "taken@example.com")
            .await;
        assert!(matches!(result, Err(Error::DuplicateEmail)));

        let unchanged = store.find_by_id(victim.id).await.unwrap().unwrap();
        assert_eq!(unchanged.email, "victim@example.com");
        assert_eq!(unchanged.full_name, "Test User");
    }

    #[tokio::test]
    async fn test_update_profile_allows_keeping_own_email() {
        let store = MemoryUserStore::new();
        let user = store.insert(new_user("same@example.com")).await.unwrap();
        let updated = store
            .update_profile(user.id, "Renamed", "same@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.full_name, "Renamed");
        assert_eq!(updated.email, "same@example.com");
    }

    #[tokio::test]
    async fn test_updates_against_unknown_id_return_none() {
        let store = MemoryUserStore::new();
        let id = Uuid::now_v7();
        assert!(store.set_status(id, UserStatus::Inactive).await.unwrap().is_none());
        assert!(store.update_password(id, "hash").await.unwrap().is_none());
        assert!(store.record_login(id, Utc::now()).await.unwrap().is_none());
        assert!(
            store
                .update_profile(id, "Name", "none@example.com")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_set_status_updates_timestamps() {
        let store = MemoryUserStore::new();
        let user = store.insert(new_user("c@example.com")).await.unwrap();
        let updated = store
            .set_status(user.id, UserStatus::Inactive)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, UserStatus::Inactive);
        assert!(updated.updated_at >= user.updated_at);
    }
}
