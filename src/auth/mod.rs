//! Authentication system for token-gate
//!
//! This module provides authentication functionality:
//! - Token issuance and verification (JWT, HMAC-SHA256)
//! - Password hashing for the user store
//! - Bearer header parsing and the login flow

pub mod claims;
pub mod manager;
pub mod password;
pub mod token;

pub use claims::Claims;
pub use manager::AuthManager;
pub use password::{hash_password, verify_password, HashError};
pub use token::TokenService;
