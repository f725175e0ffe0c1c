pub mod account;
pub mod account_id;
pub mod email;
pub mod login_identifier;
pub mod password;
pub mod password_hash;
pub mod token;
pub mod username;
