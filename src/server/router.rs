//! HTTP router for token-gate
//!
//! This module defines the axum router that handles all HTTP requests.
//! It provides routes for:
//! - Health checks
//! - Login (token issuance)
//! - A protected endpoint that reads the verified claims

use axum::{
    extract::State,
    middleware,
    response::{IntoResponse, Json},
    routing::{get, post},
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::auth::AuthManager;
use crate::models::{LoginRequest, LoginResponse};
use crate::store::UserStore;

use super::middleware::{auth_middleware, logging_middleware, AuthResponse, AuthenticatedClaims};

/// Shared application state
pub struct AppState<U: UserStore> {
    /// Authentication manager
    pub auth_manager: Arc<AuthManager<U>>,
}

impl<U: UserStore> Clone for AppState<U> {
    fn clone(&self) -> Self {
        Self {
            auth_manager: Arc::clone(&self.auth_manager),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Build the main application router
///
/// Every route except `/health` and `/user/login` sits behind the
/// authentication middleware.
pub fn build_router<U: UserStore + 'static>(state: AppState<U>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/user/login", post(login_handler::<U>))
        .route("/user/me", get(me_handler))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state.auth_manager),
            auth_middleware::<U>,
        ))
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// Health check endpoint handler
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Login endpoint handler
///
/// Exchanges `{username, password}` for `{"accessToken": <token>}`.
async fn login_handler<U: UserStore + 'static>(
    State(state): State<AppState<U>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthResponse> {
    let token = state.auth_manager.login(&req.username, &req.password).await?;

    Ok(Json(LoginResponse {
        access_token: token,
    }))
}

/// Protected endpoint returning the caller's verified claims
///
/// Reads the claims the authentication middleware attached to the request;
/// the token itself is never re-parsed here.
async fn me_handler(
    Extension(AuthenticatedClaims(claims)): Extension<AuthenticatedClaims>,
) -> impl IntoResponse {
    Json(serde_json::json!({
        "subject": claims.sub,
        "issuedAt": claims.iat,
        "expiresAt": claims.exp,
    }))
}
