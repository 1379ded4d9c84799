//! HTTP middleware for token-gate
//!
//! This module provides middleware layers for:
//! - Bearer-token authentication
//! - Request/response logging

use axum::{
    extract::{Request, State},
    http::{header, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use std::time::Instant;

use crate::auth::{AuthManager, Claims};
use crate::error::AuthError;
use crate::store::UserStore;

/// Paths that should skip authentication
///
/// The login endpoint must be reachable without a token, and health checks
/// carry no credentials.
const AUTH_SKIP_PATHS: &[&str] = &["/health", "/user/login"];

/// Verified claims extension for requests
///
/// Inserted by [`auth_middleware`] after successful verification; downstream
/// handlers read claims from here instead of re-parsing the token.
#[derive(Clone, Debug)]
pub struct AuthenticatedClaims(pub Claims);

/// Authentication middleware function
///
/// This middleware:
/// 1. Answers CORS pre-flight (`OPTIONS`) requests with a bare success status
/// 2. Checks if the path should skip authentication
/// 3. Extracts and validates the `Authorization: Bearer` header
/// 4. Adds the verified claims to the request extensions
///
/// Rejections terminate the request before any handler runs; no partial
/// claims are ever attached.
pub async fn auth_middleware<U: UserStore + 'static>(
    State(auth_manager): State<Arc<AuthManager<U>>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthResponse> {
    // Pre-flight requests never carry credentials
    if request.method() == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    let path = request.uri().path();
    if AUTH_SKIP_PATHS.iter().any(|p| path.starts_with(p)) {
        return Ok(next.run(request).await);
    }

    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    let claims = auth_manager
        .verify_bearer(auth_header)
        .map_err(AuthResponse::from_error)?;

    request.extensions_mut().insert(AuthenticatedClaims(claims));

    Ok(next.run(request).await)
}

/// Authentication error response
pub struct AuthResponse {
    status: StatusCode,
    message: String,
}

impl AuthResponse {
    /// Map an authentication error to its HTTP response
    pub fn from_error(error: AuthError) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: error.to_string(),
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<AuthError> for AuthResponse {
    fn from(error: AuthError) -> Self {
        Self::from_error(error)
    }
}

impl IntoResponse for AuthResponse {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message
        });
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

/// Logging middleware function
///
/// Logs request and response details including:
/// - Method and path
/// - Status code
/// - Response time
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    let status = response.status();

    tracing::info!(
        method = %method,
        path = %uri.path(),
        status = %status.as_u16(),
        duration_ms = %elapsed.as_millis(),
        "Request completed"
    );

    response
}
