pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AllowedOrigins, ApplicationSetting, AuthServiceSetting, AuthSetting, CorsSetting,
    PostgresSetting, TokenSetting,
};
