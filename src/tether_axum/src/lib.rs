//! Axum integration for the Tether credential library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  tether_core: HTTP trait definitions     │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  tether_axum: Axum implementations       │
//! │  - AxumRequest newtype wrapper           │
//! │  - AxumResponseBuilder                   │
//! │  - require_authentication middleware     │
//! │  - Axum route handlers                   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use tether_axum::{middleware::require_authentication, routes};
//!
//! let protected = Router::new()
//!     .route("/logout", post(routes::logout::<S, T, H>))
//!     .route_layer(from_fn_with_state(authenticator, require_authentication::<A>));
//!
//! let app = Router::new()
//!     .route("/login", post(routes::login::<S, T, H>))
//!     .merge(protected)
//!     .with_state(AuthState::new(store, codec, hasher, cookies));
//! ```

pub mod adapters;
pub mod extract;
pub mod middleware;
pub mod routes;

pub use adapters::{AxumRequest, AxumResponseBuilder, response_builder};
pub use middleware::require_authentication;
pub use routes::AuthState;
