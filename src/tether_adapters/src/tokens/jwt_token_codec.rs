use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use tether_core::{AccountId, Token, TokenCodec, TokenCodecError, TokenKind, TokenRejection};
use uuid::Uuid;

/// Signing configuration of one token kind.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub secret: Secret<String>,
    pub time_to_live: Duration,
    pub cookie_name: String,
}

impl TokenConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }

    /// Lifetime rounded up to whole seconds, as used for cookie `Max-Age`.
    /// A sub-second lifetime still yields one second, since `Max-Age=0`
    /// deletes the cookie.
    pub fn max_age_seconds(&self) -> i64 {
        let seconds = self.time_to_live.num_seconds();
        (seconds + i64::from(self.time_to_live.subsec_nanos() > 0)).max(0)
    }
}

/// `iat`/`exp` are NumericDate values with millisecond precision.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: AccountId,
    kind: TokenKind,
    jti: Uuid,
    iat: f64,
    exp: f64,
}

/// HS256 JWT codec with a separate secret and lifetime per token kind.
#[derive(Debug, Clone)]
pub struct JwtTokenCodec {
    access: TokenConfig,
    refresh: TokenConfig,
}

impl JwtTokenCodec {
    pub fn new(access: TokenConfig, refresh: TokenConfig) -> Self {
        Self { access, refresh }
    }

    pub fn config(&self, kind: TokenKind) -> &TokenConfig {
        match kind {
            TokenKind::Access => &self.access,
            TokenKind::Refresh => &self.refresh,
        }
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against millisecond timestamps after decoding.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        validation
    }
}

fn now_in_seconds() -> f64 {
    Utc::now().timestamp_millis() as f64 / 1000.0
}

impl TokenCodec for JwtTokenCodec {
    fn issue(&self, account_id: &AccountId, kind: TokenKind) -> Result<Token, TokenCodecError> {
        let config = self.config(kind);
        if config.secret.expose_secret().is_empty() {
            return Err(TokenCodecError::Signing(format!("{kind} token secret is empty")));
        }

        let iat = now_in_seconds();
        let claims = Claims {
            sub: *account_id,
            kind,
            jti: Uuid::new_v4(),
            iat,
            exp: iat + config.time_to_live.num_milliseconds() as f64 / 1000.0,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.as_bytes()),
        )
        .map(Token::from)
        .map_err(|e| TokenCodecError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str, expected: TokenKind) -> Result<AccountId, TokenCodecError> {
        let config = self.config(expected);

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.as_bytes()),
            &Self::validation(),
        )
        .map(|data| data.claims)
        .map_err(|e| {
            let rejection = match e.kind() {
                ErrorKind::InvalidSignature => TokenRejection::InvalidSignature,
                _ => TokenRejection::Malformed,
            };
            TokenCodecError::Rejected(rejection)
        })?;

        if claims.kind != expected {
            return Err(TokenCodecError::Rejected(TokenRejection::WrongKind));
        }
        if now_in_seconds() >= claims.exp {
            return Err(TokenCodecError::Rejected(TokenRejection::Expired));
        }

        Ok(claims.sub)
    }
}
