//! Authentication manager
//!
//! This module provides the main authentication interface for the application:
//! the login flow that issues tokens and the bearer-header verification used
//! by the request gate.

use std::sync::Arc;

use crate::error::AuthError;
use crate::store::UserStore;

use super::claims::Claims;
use super::password::verify_password;
use super::token::TokenService;

/// Literal scheme prefix the Authorization header must carry
///
/// Case-sensitive, single trailing space.
const BEARER_PREFIX: &str = "Bearer ";

/// Authentication manager
///
/// Owns the token service and the user store reference. Holds no mutable
/// state: concurrent requests verify in parallel without locking.
pub struct AuthManager<U: UserStore> {
    store: Arc<U>,
    tokens: TokenService,
}

impl<U: UserStore> AuthManager<U> {
    /// Create a new authentication manager
    pub fn new(store: Arc<U>, tokens: TokenService) -> Self {
        Self { store, tokens }
    }

    /// Exchange a username/password pair for a signed token
    ///
    /// An unknown user, a wrong password, and a store failure all collapse
    /// into [`AuthError::InvalidCredentials`], so the response does not reveal
    /// which part of the credentials was wrong.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let user = self
            .store
            .find_user(username)
            .await
            .map_err(|_| AuthError::InvalidCredentials)?;

        match user {
            Some(user) if verify_password(password, &user.password_hash) => {
                self.tokens.issue(&user.username)
            }
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    /// Verify the Authorization header of an inbound request
    ///
    /// The header must be present and start with the literal `"Bearer "`
    /// prefix; everything after the prefix is the token, which is verified
    /// against the signing key.
    pub fn verify_bearer(&self, header: Option<&str>) -> Result<Claims, AuthError> {
        let header = header.ok_or(AuthError::MissingOrInvalidHeader)?;
        let token = header
            .strip_prefix(BEARER_PREFIX)
            .ok_or(AuthError::MissingOrInvalidHeader)?;

        self.tokens.verify(token)
    }

    /// Verify a raw token string
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.tokens.verify(token)
    }
}
