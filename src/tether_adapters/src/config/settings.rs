use ::config::ConfigError;
use axum::http::HeaderValue;
use chrono::TimeDelta;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::{
    config::constants::{self, env},
    tokens::TokenConfig,
};

/// Service settings, layered from `config/base.json`, `config/<APP_ENV>.json`
/// and `TETHER__*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthServiceSetting {
    pub application: ApplicationSetting,
    pub auth: AuthSetting,
    #[serde(default)]
    pub cors: CorsSetting,
    #[serde(default)]
    pub postgres: Option<PostgresSetting>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSetting {
    pub host: String,
    pub port: u16,
}

impl ApplicationSetting {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSetting {
    pub access_token: TokenSetting,
    pub refresh_token: TokenSetting,
}

impl AuthSetting {
    /// Access and refresh configs, in that order.
    pub fn token_configs(&self) -> Result<(TokenConfig, TokenConfig), ConfigError> {
        let access = self
            .access_token
            .token_config()
            .map_err(|e| ConfigError::Message(format!("auth.access_token: {e}")))?;
        let refresh = self
            .refresh_token
            .token_config()
            .map_err(|e| ConfigError::Message(format!("auth.refresh_token: {e}")))?;
        Ok((access, refresh))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenSetting {
    pub secret: Secret<String>,
    /// Seconds.
    pub time_to_live: i64,
    pub cookie_name: String,
}

impl TokenSetting {
    /// Rejects a blank secret and a lifetime that is not a positive,
    /// representable number of seconds.
    pub fn token_config(&self) -> Result<TokenConfig, ConfigError> {
        if self.secret.expose_secret().trim().is_empty() {
            return Err(ConfigError::Message("secret must not be empty".to_owned()));
        }
        if self.time_to_live <= 0 {
            return Err(ConfigError::Message(
                "time_to_live must be a positive number of seconds".to_owned(),
            ));
        }
        let time_to_live = TimeDelta::try_seconds(self.time_to_live).ok_or_else(|| {
            ConfigError::Message("time_to_live is out of range".to_owned())
        })?;

        Ok(TokenConfig {
            secret: self.secret.clone(),
            time_to_live,
            cookie_name: self.cookie_name.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsSetting {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostgresSetting {
    pub url: Secret<String>,
}

impl AuthServiceSetting {
    /// Loads `.env` first, then the layered configuration.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment = std::env::var(env::APP_ENV_ENV_VAR)
            .unwrap_or_else(|_| constants::DEFAULT_APP_ENV.to_owned());
        Self::load_from(constants::CONFIG_DIR, &environment)
    }

    /// Token settings are checked here so a bad secret or lifetime stops
    /// the service at startup.
    pub fn load_from(config_dir: &str, environment: &str) -> Result<Self, ConfigError> {
        let settings: Self = ::config::Config::builder()
            .set_default("application.host", constants::DEFAULT_HOST)?
            .set_default("application.port", i64::from(constants::DEFAULT_PORT))?
            .set_default(
                "auth.access_token.time_to_live",
                constants::DEFAULT_ACCESS_TOKEN_TTL_SECS,
            )?
            .set_default("auth.access_token.cookie_name", constants::ACCESS_TOKEN_COOKIE)?
            .set_default(
                "auth.refresh_token.time_to_live",
                constants::DEFAULT_REFRESH_TOKEN_TTL_SECS,
            )?
            .set_default("auth.refresh_token.cookie_name", constants::REFRESH_TOKEN_COOKIE)?
            .add_source(::config::File::with_name(&format!("{config_dir}/base")).required(false))
            .add_source(
                ::config::File::with_name(&format!("{config_dir}/{environment}")).required(false),
            )
            .add_source(
                ::config::Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.auth.token_configs()?;
        Ok(settings)
    }

    pub fn allowed_origins(&self) -> AllowedOrigins {
        AllowedOrigins::parse(&self.cors.allowed_origins)
    }
}

/// CORS origins accepted by the service, pre-parsed as header values.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    /// Invalid origins are dropped with a warning.
    pub fn parse<S: AsRef<str>>(origins: &[S]) -> Self {
        let origins = origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin.as_ref().trim()) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = origin.as_ref(), "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
