//! Token issuance and verification
//!
//! Tokens are JWTs signed with HMAC-SHA256 using a single shared secret.
//! The same `TokenService` both issues tokens at login and verifies them on
//! every request; verification is stateless and repeated per request.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::error::AuthError;

use super::claims::Claims;

/// Issues and verifies signed bearer tokens
///
/// Holds the signing key material, fixed at construction. The key is injected
/// explicitly; there is no process-global secret and no rotation within the
/// service lifetime.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service from the shared signing key and token lifetime
    pub fn new(signing_key: &str, ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expired means expired; no clock-skew grace window.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(signing_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(signing_key.as_bytes()),
            validation,
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Issue a signed token for the given subject
    ///
    /// The token carries the subject, issue time, and an expiration `ttl`
    /// seconds in the future.
    pub fn issue(&self, subject: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp() as usize,
            exp: (now + self.ttl).timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AuthError::InvalidToken)
    }

    /// Verify a token and return its decoded claims
    ///
    /// Any failure — signature mismatch, malformed token, expired token —
    /// collapses into [`AuthError::InvalidToken`]. Claims are never returned
    /// from a token that did not verify against the current signing key.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AuthError::InvalidToken)
    }
}
