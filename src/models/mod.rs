//! Domain models for token-gate

pub mod user;

pub use user::{LoginRequest, LoginResponse, User};
