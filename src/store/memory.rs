//! In-memory user store
//!
//! Users are seeded from configuration at startup; plaintext config passwords
//! are hashed with Argon2id before they are held in memory. The store is
//! immutable after construction, so lookups need no locking.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::auth::password::hash_password;
use crate::config::UserConfig;
use crate::error::StoreError;
use crate::models::User;

use super::UserStore;

/// Immutable in-memory user store
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: HashMap<String, User>,
}

impl MemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from configuration entries, hashing each password
    pub fn from_config(users: &[UserConfig]) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for entry in users {
            let password_hash = hash_password(&entry.password)
                .map_err(|e| StoreError::Backend(e.to_string()))?;
            store = store.with_user(&entry.username, &password_hash);
        }
        Ok(store)
    }

    /// Add a user with an already-hashed password
    pub fn with_user(mut self, username: &str, password_hash: &str) -> Self {
        self.users.insert(
            username.to_string(),
            User {
                username: username.to_string(),
                password_hash: password_hash.to_string(),
            },
        );
        self
    }

    /// Number of users in the store
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no users
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.get(username).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;

    // Test 1: from_config hashes passwords and stores every user
    #[tokio::test]
    async fn test_from_config() {
        let users = vec![
            UserConfig {
                username: "xyz".to_string(),
                password: "password".to_string(),
            },
            UserConfig {
                username: "admin".to_string(),
                password: "hunter2".to_string(),
            },
        ];

        let store = MemoryUserStore::from_config(&users).unwrap();
        assert_eq!(store.len(), 2);

        let user = store.find_user("xyz").await.unwrap().unwrap();
        assert_eq!(user.username, "xyz");
        assert_ne!(user.password_hash, "password");
        assert!(verify_password("password", &user.password_hash));
    }

    // Test 2: find_user returns None for an unknown username
    #[tokio::test]
    async fn test_find_user_unknown() {
        let store = MemoryUserStore::new();
        let result = store.find_user("nobody").await.unwrap();
        assert!(result.is_none());
    }

    // Test 3: with_user stores the given hash verbatim
    #[tokio::test]
    async fn test_with_user() {
        let store = MemoryUserStore::new().with_user("xyz", "$argon2id$fake");

        let user = store.find_user("xyz").await.unwrap().unwrap();
        assert_eq!(user.password_hash, "$argon2id$fake");
    }

    // Test 4: empty store reports empty
    #[test]
    fn test_is_empty() {
        assert!(MemoryUserStore::new().is_empty());
        assert!(!MemoryUserStore::new().with_user("a", "h").is_empty());
    }
}
