//! token-gate - A stateless JWT bearer-token authentication gateway
//!
//! This crate provides an HTTP service that issues signed bearer tokens in
//! exchange for user credentials and gates every subsequent request on
//! stateless verification of those tokens.

pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod store;
