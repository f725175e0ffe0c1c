use crate::{domain::account_id::AccountId, http_abstraction::AuthRequest};

/// Account established by request authentication, i.e. by a valid access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedAccount {
    pub account_id: AccountId,
}

/// Authenticates ordinary requests before they reach protected operations
/// (logout, password change, account queries).
///
/// Implementations decide where the credential lives (cookie, `Authorization`
/// header) and how it is checked. Access tokens are stateless, so this is a
/// pure signature and expiry check with no store lookup.
pub trait RequestAuthenticator: Clone + Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    fn authenticate<R: AuthRequest>(&self, request: &R) -> Result<AuthenticatedAccount, Self::Error>;
}
