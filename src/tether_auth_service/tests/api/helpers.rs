use chrono::Duration;
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use reqwest::{Response, header::SET_COOKIE};
use secrecy::Secret;
use serde_json::{Value, json};
use tether_adapters::{
    config::test,
    http::SessionCookies,
    passwords::Argon2PasswordHasher,
    persistence::HashMapAccountStore,
    tokens::{JwtTokenCodec, TokenConfig},
};
use tether_auth_service::{AuthService, USERS_PREFIX};

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

#[derive(Debug, Clone)]
pub struct TestUser {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl TestUser {
    pub fn random() -> Self {
        let id = uuid::Uuid::new_v4().simple().to_string();
        Self {
            full_name: Name().fake(),
            username: format!("user_{}", &id[..12]),
            email: SafeEmail().fake(),
            password: "secret123".to_owned(),
        }
    }

    pub fn register_body(&self) -> Value {
        json!({
            "fullName": self.full_name,
            "username": self.username,
            "email": self.email,
            "password": self.password,
        })
    }
}

/// Tokens issued by a successful login or refresh.
#[derive(Debug, Clone)]
pub struct IssuedPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl IssuedPair {
    pub async fn from_response(response: Response) -> Self {
        let body: Value = response.json().await.expect("Failed to parse response body");
        Self {
            access_token: body["data"]["accessToken"]
                .as_str()
                .expect("accessToken missing")
                .to_owned(),
            refresh_token: body["data"]["refreshToken"]
                .as_str()
                .expect("refreshToken missing")
                .to_owned(),
        }
    }
}

fn token_config(secret: &str, time_to_live: Duration, cookie_name: &str) -> TokenConfig {
    TokenConfig {
        secret: Secret::new(secret.to_owned()),
        time_to_live,
        cookie_name: cookie_name.to_owned(),
    }
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_access_ttl(Duration::minutes(15)).await
    }

    /// Spawns the service on a random port over a fresh in-memory store.
    pub async fn with_access_ttl(access_ttl: Duration) -> Self {
        let access = token_config("test-access-secret", access_ttl, "accessToken");
        let refresh = token_config("test-refresh-secret", Duration::days(10), "refreshToken");
        let cookies = SessionCookies::new(&access, &refresh);

        let router = AuthService::new(
            HashMapAccountStore::new(),
            JwtTokenCodec::new(access, refresh),
            Argon2PasswordHasher,
            cookies,
        )
        .as_nested_router(None);

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Failed to run test server")
        });

        let http_client = reqwest::Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            address,
            http_client,
        }
    }

    fn users_url(&self, path: &str) -> String {
        format!("{}{USERS_PREFIX}{path}", self.address)
    }

    pub async fn get_health(&self) -> Response {
        self.http_client
            .get(format!("{}/health", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_register<Body: serde::Serialize>(&self, body: &Body) -> Response {
        self.http_client
            .post(self.users_url("/register"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login(&self, body: &Value) -> Response {
        self.http_client
            .post(self.users_url("/login"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_refresh(&self, refresh_token: &str) -> Response {
        self.http_client
            .post(self.users_url("/refresh-token"))
            .json(&json!({ "refreshToken": refresh_token }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_refresh_with_cookie(&self, refresh_token: &str) -> Response {
        self.http_client
            .post(self.users_url("/refresh-token"))
            .header("cookie", format!("refreshToken={refresh_token}"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_logout(&self, access_token: &str) -> Response {
        self.http_client
            .post(self.users_url("/logout"))
            .bearer_auth(access_token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_change_password(&self, access_token: &str, body: &Value) -> Response {
        self.http_client
            .post(self.users_url("/change-password"))
            .bearer_auth(access_token)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_change_password_by_email(&self, body: &Value) -> Response {
        self.http_client
            .post(self.users_url("/change-password-by-email"))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_current_user(&self, access_token: &str) -> Response {
        self.http_client
            .get(self.users_url("/current-user"))
            .header("cookie", format!("accessToken={access_token}"))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_access_token_details(&self, access_token: &str) -> Response {
        self.http_client
            .post(self.users_url("/details/access-token"))
            .json(&json!({ "accessToken": access_token }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_refresh_token_details(&self, refresh_token: &str) -> Response {
        self.http_client
            .post(self.users_url("/details/refresh-token"))
            .json(&json!({ "refreshToken": refresh_token }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_accounts(&self, access_token: &str) -> Response {
        self.http_client
            .get(self.users_url(""))
            .bearer_auth(access_token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Registers `user` and logs in by username.
    pub async fn register_and_login(&self, user: &TestUser) -> IssuedPair {
        let response = self.post_register(&user.register_body()).await;
        assert_eq!(response.status().as_u16(), 201);

        let response = self
            .post_login(&json!({ "username": user.username, "password": user.password }))
            .await;
        assert_eq!(response.status().as_u16(), 200);
        IssuedPair::from_response(response).await
    }
}

/// All `Set-Cookie` header values of a response.
pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_owned)
        .collect()
}

/// Asserts the failure envelope and returns its message.
pub async fn error_message(response: Response, status: u16) -> String {
    assert_eq!(response.status().as_u16(), status);
    let body: Value = response.json().await.expect("Failed to parse error body");
    assert_eq!(body["success"], false);
    assert_eq!(body["statusCode"], status);
    assert!(body["errors"].is_array());
    body["message"].as_str().unwrap_or_default().to_owned()
}
