use ::config::ConfigError;
use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
        request,
    },
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tether_adapters::{
    auth_validation::AccessTokenAuthenticator,
    config::{AllowedOrigins, AuthSetting},
    http::SessionCookies,
    passwords::Argon2PasswordHasher,
    tokens::JwtTokenCodec,
};
use tether_axum::{
    AuthState, require_authentication,
    routes::{
        account_from_access_token, account_from_refresh_token, change_password,
        change_password_by_email, current_account, health, list_accounts, login, logout,
        refresh_token, register,
    },
};
use tether_core::{AccountStore, CredentialStore, PasswordHasher, TokenCodec};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Prefix of every credential route.
pub const USERS_PREFIX: &str = "/api/v1/users";

/// Credential service: registration, login, refresh rotation, logout,
/// password change and account lookups.
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Assemble the routes over one store serving both accounts and refresh
    /// slots.
    ///
    /// Logout, password change, current user and the account list sit behind
    /// access-token authentication; the rest is public. The email-keyed
    /// password change proves the caller with the old password instead.
    pub fn new<S, T, H>(store: S, token_codec: T, password_hasher: H, cookies: SessionCookies) -> Self
    where
        S: AccountStore + CredentialStore + Clone + 'static,
        T: TokenCodec + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
    {
        let authenticator =
            AccessTokenAuthenticator::new(token_codec.clone(), cookies.access_cookie_name());
        let state = AuthState::new(store, token_codec, password_hasher, cookies);

        let protected = Router::new()
            .route("/logout", post(logout::<S, T, H>))
            .route("/change-password", post(change_password::<S, T, H>))
            .route("/current-user", get(current_account::<S, T, H>))
            .route("/", get(list_accounts::<S, T, H>))
            .route_layer(from_fn_with_state(
                authenticator,
                require_authentication::<AccessTokenAuthenticator<T>>,
            ));

        let users = Router::new()
            .route("/register", post(register::<S, T, H>))
            .route("/login", post(login::<S, T, H>))
            .route("/refresh-token", post(refresh_token::<S, T, H>))
            .route(
                "/change-password-by-email",
                post(change_password_by_email::<S, T, H>),
            )
            .route("/details/access-token", post(account_from_access_token::<S, T, H>))
            .route("/details/refresh-token", post(account_from_refresh_token::<S, T, H>))
            .merge(protected)
            .with_state(state);

        let router = Router::new()
            .nest(USERS_PREFIX, users)
            .route("/health", get(health));

        Self { router }
    }

    /// JWT tokens and Argon2id hashing, configured from the `auth` settings.
    pub fn from_settings<S>(store: S, settings: &AuthSetting) -> Result<Self, ConfigError>
    where
        S: AccountStore + CredentialStore + Clone + 'static,
    {
        let (access, refresh) = settings.token_configs()?;
        let cookies = SessionCookies::new(&access, &refresh);

        Ok(Self::new(
            store,
            JwtTokenCodec::new(access, refresh),
            Argon2PasswordHasher,
            cookies,
        ))
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be nested into another
    /// application.
    ///
    /// Without allowed origins no CORS layer is installed.
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([CONTENT_TYPE, AUTHORIZATION])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server until Ctrl-C.
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Gracefully shutdown");
}
