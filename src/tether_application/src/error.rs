/// Message returned to clients for every internal failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong while processing the request";

/// The three failure classes a use-case error is translated into before it
/// leaves the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad or missing input.
    Validation,
    /// Bad credentials, conflicting account, or a bad, missing or reused token.
    Authentication,
    /// Persistence or signing failure.
    Internal,
}

/// Implemented by every use-case error.
pub trait ClassifiedError: std::error::Error {
    fn kind(&self) -> ErrorKind;

    /// Fixed, client-safe message. Internal errors never expose their details.
    fn public_message(&self) -> String {
        match self.kind() {
            ErrorKind::Internal => INTERNAL_ERROR_MESSAGE.to_owned(),
            _ => self.to_string(),
        }
    }
}
