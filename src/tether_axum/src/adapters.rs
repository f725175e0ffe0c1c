//! Axum framework adapters for the framework-agnostic HTTP traits.
//!
//! `AuthRequest` and `AuthResponseBuilder` live in `tether_core`; they are
//! implemented here on newtype wrappers to satisfy the orphan rule:
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  tether_core::AuthRequest (trait)          │
//! └────────────────┬───────────────────────────┘
//!                  │
//!                  ▼
//! ┌────────────────────────────────────────────┐
//! │  AxumRequest(axum::Request)                │
//! │  impl AuthRequest for AxumRequest { }      │
//! └────────────────────────────────────────────┘
//! ```

use axum::body::Body;
use axum::extract::Request as AxumExtractRequest;
use axum::http::{Response, StatusCode, header::COOKIE};
use axum_extra::extract::cookie::Cookie;
use tether_core::{AuthRequest, AuthResponseBuilder};

/// Newtype wrapper around Axum's request type.
#[repr(transparent)]
pub struct AxumRequest(pub AxumExtractRequest);

impl From<AxumExtractRequest> for AxumRequest {
    fn from(req: AxumExtractRequest) -> Self {
        AxumRequest(req)
    }
}

impl From<AxumRequest> for AxumExtractRequest {
    fn from(wrapper: AxumRequest) -> Self {
        wrapper.0
    }
}

impl AuthRequest for AxumRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.0.headers().get(name)?.to_str().ok()
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        // Several `Cookie` headers may arrive over HTTP/2.
        self.0
            .headers()
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|header| Cookie::split_parse(header))
            .filter_map(Result::ok)
            .find(|cookie| cookie.name() == name)
            .and_then(|cookie| cookie.value_raw())
    }

    fn method(&self) -> &str {
        self.0.method().as_str()
    }

    fn path(&self) -> &str {
        self.0.uri().path()
    }
}

/// Builds `Response<Body>` values for the framework-agnostic handlers.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn json_body(mut self, body: serde_json::Value) -> Self {
        self.builder = self.builder.header("content-type", "application/json");
        self.body = Some(body.to_string());
        self
    }

    /// An invalid status or header collapses into an empty `500`.
    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        self.builder.body(Body::from(body)).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to build response");
            let mut response = Response::new(Body::empty());
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response
        })
    }
}

pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}
