//! Axum-specific route handlers.
//!
//! These routes use Axum's extractors to get data from requests, call the
//! framework-agnostic handlers and hand their responses back to Axum.

pub mod account;
pub mod change_password;
pub mod health;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;
pub mod state;

pub use account::{
    account_from_access_token, account_from_refresh_token, current_account, list_accounts,
};
pub use change_password::{change_password, change_password_by_email};
pub use health::health;
pub use login::login;
pub use logout::logout;
pub use refresh::refresh_token;
pub use register::register;
pub use state::AuthState;
