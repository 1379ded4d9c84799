//! Decoded token claims

use serde::{Deserialize, Serialize};

/// Claims carried inside a signed token
///
/// A `Claims` value is only trustworthy when it came out of
/// [`TokenService::verify`](crate::auth::TokenService::verify); it is attached
/// to the request extensions after successful verification and read from there
/// by downstream handlers instead of re-parsing the token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// Subject: the authenticated principal
    pub sub: String,

    /// Issued-at timestamp (seconds since epoch)
    pub iat: usize,

    /// Expiration timestamp (seconds since epoch)
    pub exp: usize,
}

impl Claims {
    /// The authenticated subject
    pub fn subject(&self) -> &str {
        &self.sub
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test 1: Claims serialize to the standard JWT field names
    #[test]
    fn test_claims_serialization() {
        let claims = Claims {
            sub: "xyz".to_string(),
            iat: 1_700_000_000,
            exp: 1_700_003_600,
        };

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["sub"], "xyz");
        assert_eq!(json["iat"], 1_700_000_000);
        assert_eq!(json["exp"], 1_700_003_600);
    }

    // Test 2: Claims deserialize back to the same value
    #[test]
    fn test_claims_roundtrip() {
        let claims = Claims {
            sub: "xyz".to_string(),
            iat: 1,
            exp: 2,
        };

        let json = serde_json::to_string(&claims).unwrap();
        let parsed: Claims = serde_json::from_str(&json).unwrap();
        assert_eq!(claims, parsed);
    }

    // Test 3: subject accessor
    #[test]
    fn test_subject_accessor() {
        let claims = Claims {
            sub: "alice".to_string(),
            iat: 0,
            exp: 0,
        };
        assert_eq!(claims.subject(), "alice");
    }
}
