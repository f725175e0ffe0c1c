//! Framework-agnostic HTTP traits for credential delivery.
//!
//! Web frameworks implement these on newtype wrappers of their own request and
//! response types, so the handlers that move tokens in and out of cookies,
//! headers and JSON bodies are written once.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  tether_core: AuthRequest /              │
//! │               AuthResponseBuilder        │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  tether_axum: AxumRequest(Request)       │
//! │               AxumResponseBuilder        │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  tether_adapters::handlers: generic over │
//! │  the traits, framework unaware           │
//! └──────────────────────────────────────────┘
//! ```

/// Read access to an incoming HTTP request.
pub trait AuthRequest {
    /// Get a header value by name.
    ///
    /// Lookup is case-insensitive. Returns `None` if the header doesn't exist
    /// or isn't valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get a cookie value by name.
    fn cookie(&self, name: &str) -> Option<&str>;

    fn method(&self) -> &str;

    fn path(&self) -> &str;

    /// Token from an `Authorization: Bearer <token>` header.
    fn bearer_token(&self) -> Option<&str> {
        let value = self.header("authorization")?;
        let (scheme, token) = value.split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("bearer") {
            return None;
        }
        let token = token.trim();
        (!token.is_empty()).then_some(token)
    }
}

/// Builder for the framework's response type.
///
/// ```ignore
/// builder
///     .status(200)
///     .cookie("accessToken=...; HttpOnly; Secure; SameSite=Lax; Max-Age=900")
///     .json_body(json!({ "success": true }))
///     .build()
/// ```
pub trait AuthResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    fn status(self, code: u16) -> Self;

    fn header(self, name: &str, value: &str) -> Self;

    /// Add a `Set-Cookie` header. May be called once per cookie.
    fn cookie(self, cookie_value: &str) -> Self {
        self.header("set-cookie", cookie_value)
    }

    /// Set a JSON body together with its `Content-Type`.
    fn json_body(self, body: serde_json::Value) -> Self;

    fn build(self) -> Self::Response;
}
