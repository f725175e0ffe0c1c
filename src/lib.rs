//! # Tether - paired access/refresh credential service
//!
//! Facade crate re-exporting the public APIs of the workspace members.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! tether = { path = "../tether" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Account`, `Token`, `CredentialPair`, etc.
//! - **Port traits**: `AccountStore`, `CredentialStore`, `TokenCodec`, `PasswordHasher`
//! - **Application**: `SessionManager`, `SignupUseCase`, `ChangePasswordUseCase`, `AccountQueries`
//! - **Adapters**: `JwtTokenCodec`, `Argon2PasswordHasher`, `HashMapAccountStore`, `PostgresAccountStore`
//! - **Service**: `AuthService` - the main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use tether_core::*;
}

pub use tether_core::{
    Account, AccountId, AccountProfile, AuthenticatedAccount, CredentialPair, Email, FullName,
    LoginIdentifier, Password, PasswordHash, Token, TokenKind, Username,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Repository and service traits
pub mod ports {
    pub use tether_core::{
        AccountStore, AccountStoreError, CredentialStore, CredentialStoreError, PasswordHasher,
        PasswordHasherError, RequestAuthenticator, TokenCodec, TokenCodecError, TokenRejection,
    };
}

pub use ports::{AccountStore, CredentialStore, PasswordHasher, TokenCodec};

// ============================================================================
// Application Layer
// ============================================================================

/// Session manager and use cases
pub mod application {
    pub use tether_application::*;
}

pub use tether_application::{
    AccountQueries, ChangePasswordUseCase, SessionError, SessionManager, SignupUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Framework-agnostic HTTP plumbing
    pub mod http {
        pub use tether_adapters::http::*;
    }

    /// Framework-agnostic handlers
    pub mod handlers {
        pub use tether_adapters::handlers::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use tether_adapters::persistence::*;
    }

    /// Access-token request authentication
    pub mod auth {
        pub use tether_adapters::auth_validation::*;
    }

    /// Configuration
    pub mod config {
        pub use tether_adapters::config::*;
    }
}

pub use tether_adapters::{
    passwords::Argon2PasswordHasher,
    persistence::{HashMapAccountStore, PostgresAccountStore},
    tokens::{JwtTokenCodec, TokenConfig},
};

// ============================================================================
// Axum Integration
// ============================================================================

pub mod axum_integration {
    pub use tether_axum::*;
}

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

pub use tether_auth_service::{AuthService, USERS_PREFIX, helpers::configure_postgresql};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
