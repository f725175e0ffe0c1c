use axum_extra::extract::cookie::{Cookie, SameSite};
use cookie::CookieBuilder;
use time::Duration;
use tether_core::{AuthRequest, AuthResponseBuilder, CredentialPair, Token};

use crate::tokens::TokenConfig;

/// Delivers a credential pair as `HttpOnly` cookies and clears it again.
#[derive(Debug, Clone)]
pub struct SessionCookies {
    access: CookieSpec,
    refresh: CookieSpec,
}

#[derive(Debug, Clone)]
struct CookieSpec {
    name: String,
    max_age_seconds: i64,
}

impl From<&TokenConfig> for CookieSpec {
    fn from(config: &TokenConfig) -> Self {
        Self {
            name: config.cookie_name.clone(),
            max_age_seconds: config.max_age_seconds(),
        }
    }
}

impl SessionCookies {
    pub fn new(access: &TokenConfig, refresh: &TokenConfig) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }

    pub fn access_cookie_name(&self) -> &str {
        &self.access.name
    }

    pub fn refresh_cookie_name(&self) -> &str {
        &self.refresh.name
    }

    /// Refresh token from the request's refresh cookie.
    pub fn refresh_token_from<R: AuthRequest>(&self, request: &R) -> Option<Token> {
        request
            .cookie(&self.refresh.name)
            .filter(|value| !value.is_empty())
            .map(|value| Token::from(value.to_owned()))
    }

    pub fn set_pair<B: AuthResponseBuilder>(&self, builder: B, pair: &CredentialPair) -> B {
        builder
            .cookie(&set_cookie(&self.access, pair.access_token.as_str()))
            .cookie(&set_cookie(&self.refresh, pair.refresh_token.as_str()))
    }

    pub fn clear_pair<B: AuthResponseBuilder>(&self, builder: B) -> B {
        builder
            .cookie(&removal_cookie(&self.access.name))
            .cookie(&removal_cookie(&self.refresh.name))
    }
}

fn auth_cookie(name: &str, value: &str) -> CookieBuilder<'static> {
    Cookie::build((name.to_owned(), value.to_owned()))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
}

fn set_cookie(spec: &CookieSpec, value: &str) -> String {
    auth_cookie(&spec.name, value)
        .max_age(Duration::seconds(spec.max_age_seconds))
        .build()
        .to_string()
}

fn removal_cookie(name: &str) -> String {
    let mut cookie = auth_cookie(name, "").build();
    cookie.make_removal();
    cookie.to_string()
}
