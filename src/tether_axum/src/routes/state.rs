use std::sync::Arc;

use tether_adapters::http::SessionCookies;
use tether_application::{AccountQueries, ChangePasswordUseCase, SessionManager, SignupUseCase};
use tether_core::{AccountStore, CredentialStore, PasswordHasher, TokenCodec};

/// Shared state of the credential routes.
///
/// One store `S` serves both as account store and credential store, so the
/// refresh slot lives next to the account it belongs to.
pub struct AuthState<S, T, H> {
    pub sessions: Arc<SessionManager<S, S, T, H>>,
    pub signup: Arc<SignupUseCase<S, H>>,
    pub change_password: Arc<ChangePasswordUseCase<S, S, H>>,
    pub queries: Arc<AccountQueries<S, T>>,
    pub cookies: SessionCookies,
}

impl<S, T, H> AuthState<S, T, H>
where
    S: AccountStore + CredentialStore + Clone,
    T: TokenCodec + Clone,
    H: PasswordHasher + Clone,
{
    pub fn new(store: S, token_codec: T, password_hasher: H, cookies: SessionCookies) -> Self {
        Self {
            sessions: Arc::new(SessionManager::new(
                store.clone(),
                store.clone(),
                token_codec.clone(),
                password_hasher.clone(),
            )),
            signup: Arc::new(SignupUseCase::new(store.clone(), password_hasher.clone())),
            change_password: Arc::new(ChangePasswordUseCase::new(
                store.clone(),
                store.clone(),
                password_hasher,
            )),
            queries: Arc::new(AccountQueries::new(store, token_codec)),
            cookies,
        }
    }
}

// Manual impl: cloning the state only bumps reference counts, so `S`, `T`
// and `H` need not be `Clone` for routes to use it.
impl<S, T, H> Clone for AuthState<S, T, H> {
    fn clone(&self) -> Self {
        Self {
            sessions: Arc::clone(&self.sessions),
            signup: Arc::clone(&self.signup),
            change_password: Arc::clone(&self.change_password),
            queries: Arc::clone(&self.queries),
            cookies: self.cookies.clone(),
        }
    }
}
