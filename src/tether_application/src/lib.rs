pub mod error;
pub mod session_manager;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use error::{ClassifiedError, ErrorKind, INTERNAL_ERROR_MESSAGE};
pub use session_manager::{LoginCredentials, LoginOutcome, SessionError, SessionManager};
pub use use_cases::{
    account_queries::{AccountQueries, AccountQueryError},
    change_password::{ChangePasswordError, ChangePasswordUseCase},
    signup::{RegistrationData, SignupError, SignupUseCase},
};
