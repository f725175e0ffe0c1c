pub mod domain;
pub mod http_abstraction;
pub mod ports;
pub mod request_authenticator;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountError, AccountProfile, FullName},
    account_id::{AccountId, AccountIdError},
    email::Email,
    login_identifier::{LoginIdentifier, LoginIdentifierError},
    password::{MIN_PASSWORD_LENGTH, Password},
    password_hash::PasswordHash,
    token::{CredentialPair, Token, TokenKind},
    username::Username,
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError, CredentialStore, CredentialStoreError},
    services::{
        PasswordHasher, PasswordHasherError, TokenCodec, TokenCodecError, TokenRejection,
    },
};

pub use http_abstraction::{AuthRequest, AuthResponseBuilder};
pub use request_authenticator::{AuthenticatedAccount, RequestAuthenticator};
