//! Router assembly and process plumbing for the Tether credential service.

pub mod auth_service;
pub mod helpers;
pub mod tracing;

pub use auth_service::{AuthService, USERS_PREFIX};
