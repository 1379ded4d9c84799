//! User and login models

use serde::{Deserialize, Serialize};

/// A stored user credential record
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Login username; becomes the token subject
    pub username: String,

    /// Argon2id hash of the password, in PHC string format
    pub password_hash: String,
}

/// Login request body for `POST /user/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The signed bearer token
    #[serde(rename = "accessToken")]
    pub access_token: String,
}
