//! Application error types for token-gate
//!
//! This module defines common error types used throughout the application.
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Authentication-related errors
///
/// Every variant is terminal for the current request: no retry, no fallback,
/// and no claims are ever attached when one of these is returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AuthError {
    /// Authorization header absent or not a `Bearer` credential
    #[error("Missing or invalid Authorization header")]
    MissingOrInvalidHeader,

    /// Token failed signature, structural, or expiry verification
    #[error("Invalid token")]
    InvalidToken,

    /// Login credentials did not match a known user
    ///
    /// Deliberately does not distinguish an unknown username from a wrong
    /// password.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// User store errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    /// Backend lookup failed
    #[error("User store error: {0}")]
    Backend(String),
}
