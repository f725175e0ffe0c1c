use serde_json::json;

use crate::helpers::{TestApp, TestUser, error_message};

#[tokio::test]
async fn change_password_swaps_credentials_and_revokes_refresh() {
    let app = TestApp::new().await;
    let user = TestUser::random();
    let pair = app.register_and_login(&user).await;

    let response = app
        .post_change_password(
            &pair.access_token,
            &json!({ "oldPassword": user.password, "newPassword": "brand-new-secret" }),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Password change successfully");

    let old = app
        .post_login(&json!({ "username": user.username, "password": user.password }))
        .await;
    assert_eq!(error_message(old, 401).await, "Invalid user credentials");

    let new = app
        .post_login(&json!({ "username": user.username, "password": "brand-new-secret" }))
        .await;
    assert_eq!(new.status().as_u16(), 200);

    let message = error_message(app.post_refresh(&pair.refresh_token).await, 401).await;
    assert_eq!(message, "Refresh Token is expired or used");
}

#[tokio::test]
async fn wrong_old_password_is_rejected() {
    let app = TestApp::new().await;
    let user = TestUser::random();
    let pair = app.register_and_login(&user).await;

    let response = app
        .post_change_password(
            &pair.access_token,
            &json!({ "oldPassword": "not-my-password", "newPassword": "brand-new-secret" }),
        )
        .await;

    assert_eq!(error_message(response, 401).await, "Invalid old password");
}

#[tokio::test]
async fn short_new_password_is_rejected() {
    let app = TestApp::new().await;
    let user = TestUser::random();
    let pair = app.register_and_login(&user).await;

    let response = app
        .post_change_password(
            &pair.access_token,
            &json!({ "oldPassword": user.password, "newPassword": "short" }),
        )
        .await;

    assert_eq!(
        error_message(response, 400).await,
        "Password must be at least 8 characters long"
    );
}

#[tokio::test]
async fn change_password_requires_access_token() {
    let app = TestApp::new().await;

    let response = app
        .post_change_password(
            "not-a-token",
            &json!({ "oldPassword": "secret123", "newPassword": "brand-new-secret" }),
        )
        .await;

    assert_eq!(error_message(response, 401).await, "Invalid Access Token");
}

#[tokio::test]
async fn change_password_by_email_needs_no_session() {
    let app = TestApp::new().await;
    let user = TestUser::random();
    let pair = app.register_and_login(&user).await;

    let response = app
        .post_change_password_by_email(&json!({
            "email": user.email,
            "oldPassword": user.password,
            "newPassword": "brand-new-secret",
        }))
        .await;
    assert_eq!(response.status().as_u16(), 200);

    let new = app
        .post_login(&json!({ "email": user.email, "password": "brand-new-secret" }))
        .await;
    assert_eq!(new.status().as_u16(), 200);

    let message = error_message(app.post_refresh(&pair.refresh_token).await, 401).await;
    assert_eq!(message, "Refresh Token is expired or used");
}

#[tokio::test]
async fn change_password_by_email_does_not_reveal_accounts() {
    let app = TestApp::new().await;
    let user = TestUser::random();
    app.register_and_login(&user).await;

    let wrong_password = app
        .post_change_password_by_email(&json!({
            "email": user.email,
            "oldPassword": "not-my-password",
            "newPassword": "brand-new-secret",
        }))
        .await;
    let unknown_email = app
        .post_change_password_by_email(&json!({
            "email": "nobody@example.com",
            "oldPassword": user.password,
            "newPassword": "brand-new-secret",
        }))
        .await;

    assert_eq!(
        error_message(wrong_password, 401).await,
        error_message(unknown_email, 401).await
    );
}

#[tokio::test]
async fn change_password_by_email_requires_email() {
    let app = TestApp::new().await;

    let response = app
        .post_change_password_by_email(&json!({
            "oldPassword": "secret123",
            "newPassword": "brand-new-secret",
        }))
        .await;

    assert_eq!(error_message(response, 400).await, "email is required");
}
