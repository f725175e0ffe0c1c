pub mod access_token_authenticator;

pub use access_token_authenticator::{AccessTokenAuthenticator, AccessTokenError};
