//! Concrete adapters for the ports defined in `tether_core`.
//!
//! - [`tokens`]: JWT codec with one secret and lifetime per token kind
//! - [`passwords`]: Argon2id password hasher
//! - [`persistence`]: in-memory and PostgreSQL account stores
//! - [`auth_validation`]: access-token request authentication
//! - [`http`]: cookies, request bodies, response envelopes and the transport error
//! - [`handlers`]: framework-agnostic request handlers
//! - [`config`]: layered settings

pub mod auth_validation;
pub mod config;
pub mod handlers;
pub mod http;
pub mod passwords;
pub mod persistence;
pub mod tokens;
