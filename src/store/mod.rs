//! User credential store for token-gate
//!
//! This module defines the user store trait and the in-memory implementation
//! seeded from configuration.

pub mod memory;

pub use memory::MemoryUserStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::User;

/// User store trait for credential lookup
///
/// It uses `async_trait` for async methods and `mockall::automock` for testing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by username
    ///
    /// Returns `Ok(None)` when the user does not exist.
    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError>;
}
