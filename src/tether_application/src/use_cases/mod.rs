pub mod account_queries;
pub mod change_password;
pub mod signup;
