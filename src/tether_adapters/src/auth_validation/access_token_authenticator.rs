use tether_core::{
    AuthRequest, AuthenticatedAccount, RequestAuthenticator, TokenCodec, TokenCodecError,
    TokenKind,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessTokenError {
    #[error("UnAuthorized Request")]
    MissingToken,
    #[error("Invalid Access Token")]
    InvalidToken,
}

/// Authenticates requests by their access token, taken from the access
/// cookie or, failing that, an `Authorization: Bearer` header.
#[derive(Debug, Clone)]
pub struct AccessTokenAuthenticator<T> {
    token_codec: T,
    cookie_name: String,
}

impl<T> AccessTokenAuthenticator<T> {
    pub fn new(token_codec: T, cookie_name: impl Into<String>) -> Self {
        Self {
            token_codec,
            cookie_name: cookie_name.into(),
        }
    }

    fn extract_token<'r, R: AuthRequest>(&self, request: &'r R) -> Option<&'r str> {
        request
            .cookie(&self.cookie_name)
            .filter(|token| !token.is_empty())
            .or_else(|| request.bearer_token())
    }
}

impl<T> RequestAuthenticator for AccessTokenAuthenticator<T>
where
    T: TokenCodec + Clone + 'static,
{
    type Error = AccessTokenError;

    fn authenticate<R: AuthRequest>(
        &self,
        request: &R,
    ) -> Result<AuthenticatedAccount, Self::Error> {
        let token = self
            .extract_token(request)
            .ok_or(AccessTokenError::MissingToken)?;

        match self.token_codec.verify(token, TokenKind::Access) {
            Ok(account_id) => Ok(AuthenticatedAccount { account_id }),
            Err(TokenCodecError::Rejected(reason)) => {
                tracing::debug!(%reason, path = request.path(), "access token rejected");
                Err(AccessTokenError::InvalidToken)
            }
            Err(e) => {
                tracing::error!(error = %e, "access token verification failed");
                Err(AccessTokenError::InvalidToken)
            }
        }
    }
}
