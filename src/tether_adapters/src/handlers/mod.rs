//! Framework-agnostic authentication handlers.
//!
//! These handlers contain the request-to-response logic without any framework dependencies.
//! Framework-specific routes (Axum, Actix, etc.) extract data from requests, call these handlers,
//! and convert the results back to framework responses.

pub mod account;
pub mod change_password;
pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;

pub use account::{
    handle_account_from_access_token, handle_account_from_refresh_token, handle_current_account,
    handle_list_accounts,
};
pub use change_password::{handle_change_password, handle_change_password_by_email};
pub use login::handle_login;
pub use logout::handle_logout;
pub use refresh::handle_refresh;
pub use register::handle_register;
