//! Common test utilities and helpers for integration tests

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use token_gate::auth::{hash_password, AuthManager, TokenService};
use token_gate::server::{build_router, AppState};
use token_gate::store::MemoryUserStore;

/// Signing key shared by the test server and tests that forge tokens
pub const TEST_SIGNING_KEY: &str = "integration-test-signing-key";

/// Create a user store holding the single test user `xyz` / `password`
pub fn create_test_store() -> Arc<MemoryUserStore> {
    let password_hash = hash_password("password").expect("Failed to hash test password");
    Arc::new(MemoryUserStore::new().with_user("xyz", &password_hash))
}

/// Create an authentication manager over the test store
pub fn create_test_auth_manager(store: Arc<MemoryUserStore>) -> Arc<AuthManager<MemoryUserStore>> {
    Arc::new(AuthManager::new(
        store,
        TokenService::new(TEST_SIGNING_KEY, 3600),
    ))
}

/// Spawn the full application on an ephemeral port and return its address
pub async fn spawn_test_server() -> SocketAddr {
    let auth_manager = create_test_auth_manager(create_test_store());
    let app = build_router(AppState { auth_manager });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to get local address");

    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Test server failed");
    });

    addr
}
