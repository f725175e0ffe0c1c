pub mod env {
    pub const ENV_PREFIX: &str = "TETHER";
    pub const APP_ENV_ENV_VAR: &str = "APP_ENV";
}

pub const CONFIG_DIR: &str = "config";
pub const DEFAULT_APP_ENV: &str = "local";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

/// 15 minutes.
pub const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 15 * 60;
/// 10 days.
pub const DEFAULT_REFRESH_TOKEN_TTL_SECS: i64 = 10 * 24 * 60 * 60;

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
