use reqwest::cookie::{CookieStore, Jar};
use serde_json::{Value, json};

use crate::helpers::{IssuedPair, TestApp, TestUser, error_message, set_cookies};

#[tokio::test]
async fn login_by_username_returns_pair_profile_and_cookies() {
    let app = TestApp::new().await;
    let user = TestUser::random();
    app.post_register(&user.register_body()).await;

    let response = app
        .post_login(&json!({ "username": user.username, "password": user.password }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 2);
    for cookie in &cookies {
        assert!(cookie.contains("HttpOnly"), "{cookie}");
        assert!(cookie.contains("Secure"), "{cookie}");
        assert!(cookie.contains("Max-Age="), "{cookie}");
    }

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User logged In Successfully");
    assert_eq!(body["data"]["user"]["username"], user.username.as_str());

    let access = body["data"]["accessToken"].as_str().unwrap();
    let refresh = body["data"]["refreshToken"].as_str().unwrap();
    assert_ne!(access, refresh);
    assert!(cookies.iter().any(|c| c.starts_with(&format!("accessToken={access}"))));
    assert!(cookies.iter().any(|c| c.starts_with(&format!("refreshToken={refresh}"))));
}

#[tokio::test]
async fn login_cookies_are_accepted_by_a_cookie_jar() {
    let app = TestApp::new().await;
    let user = TestUser::random();
    app.post_register(&user.register_body()).await;

    let response = app
        .post_login(&json!({ "email": user.email, "password": user.password }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let url = reqwest::Url::parse("https://localhost/").unwrap();
    let headers: Vec<_> = response.headers().get_all("set-cookie").iter().cloned().collect();
    let jar = Jar::default();
    jar.set_cookies(&mut headers.iter(), &url);

    let stored = jar.cookies(&url).unwrap();
    let stored = stored.to_str().unwrap();
    assert!(stored.contains("accessToken="));
    assert!(stored.contains("refreshToken="));
}

#[tokio::test]
async fn login_by_email_succeeds() {
    let app = TestApp::new().await;
    let user = TestUser::random();
    app.post_register(&user.register_body()).await;

    let response = app
        .post_login(&json!({ "email": user.email, "password": user.password }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let pair = IssuedPair::from_response(response).await;
    assert!(!pair.access_token.is_empty());
}

#[tokio::test]
async fn wrong_password_and_unknown_user_fail_identically() {
    let app = TestApp::new().await;
    let user = TestUser::random();
    app.post_register(&user.register_body()).await;

    let wrong_password = app
        .post_login(&json!({ "username": user.username, "password": "wrong-password" }))
        .await;
    let unknown_user = app
        .post_login(&json!({ "username": "nobody_here", "password": "wrong-password" }))
        .await;

    assert_eq!(error_message(wrong_password, 401).await, "Invalid user credentials");
    assert_eq!(error_message(unknown_user, 401).await, "Invalid user credentials");
}

#[tokio::test]
async fn login_without_identifier_is_400() {
    let app = TestApp::new().await;

    let message = error_message(
        app.post_login(&json!({ "password": "secret123" })).await,
        400,
    )
    .await;

    assert_eq!(message, "username or email is required");
}

#[tokio::test]
async fn second_login_invalidates_first_refresh_token() {
    let app = TestApp::new().await;
    let user = TestUser::random();
    let first = app.register_and_login(&user).await;

    let response = app
        .post_login(&json!({ "username": user.username, "password": user.password }))
        .await;
    let second = IssuedPair::from_response(response).await;

    let message = error_message(app.post_refresh(&first.refresh_token).await, 401).await;
    assert_eq!(message, "Refresh Token is expired or used");

    let response = app.post_refresh(&second.refresh_token).await;
    assert_eq!(response.status().as_u16(), 200);
}
