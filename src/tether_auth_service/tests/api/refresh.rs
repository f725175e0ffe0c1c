use chrono::Duration;
use serde_json::Value;

use crate::helpers::{IssuedPair, TestApp, TestUser, error_message, set_cookies};

#[tokio::test]
async fn refresh_rotates_both_tokens() {
    let app = TestApp::new().await;
    let first = app.register_and_login(&TestUser::random()).await;

    let response = app.post_refresh(&first.refresh_token).await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(set_cookies(&response).len(), 2);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Access Token Refreshed");

    let second = IssuedPair {
        access_token: body["data"]["accessToken"].as_str().unwrap().to_owned(),
        refresh_token: body["data"]["refreshToken"].as_str().unwrap().to_owned(),
    };
    assert_ne!(second.access_token, first.access_token);
    assert_ne!(second.refresh_token, first.refresh_token);

    let response = app.get_current_user(&second.access_token).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn replayed_refresh_token_is_rejected() {
    let app = TestApp::new().await;
    let first = app.register_and_login(&TestUser::random()).await;
    let second = IssuedPair::from_response(app.post_refresh(&first.refresh_token).await).await;

    let message = error_message(app.post_refresh(&first.refresh_token).await, 401).await;
    assert_eq!(message, "Refresh Token is expired or used");

    // The replay does not disturb the current token.
    let response = app.post_refresh(&second.refresh_token).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn concurrent_refreshes_have_exactly_one_winner() {
    let app = TestApp::new().await;
    let pair = app.register_and_login(&TestUser::random()).await;

    let (a, b, c) = tokio::join!(
        app.post_refresh(&pair.refresh_token),
        app.post_refresh(&pair.refresh_token),
        app.post_refresh(&pair.refresh_token),
    );

    let mut statuses = [a.status().as_u16(), b.status().as_u16(), c.status().as_u16()];
    statuses.sort_unstable();
    assert_eq!(statuses, [200, 401, 401]);
}

#[tokio::test]
async fn refresh_token_is_read_from_cookie() {
    let app = TestApp::new().await;
    let pair = app.register_and_login(&TestUser::random()).await;

    let response = app.post_refresh_with_cookie(&pair.refresh_token).await;

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn missing_refresh_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/api/v1/users/refresh-token", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(error_message(response, 401).await, "UnAuthorized Request");
}

#[tokio::test]
async fn access_token_is_not_a_refresh_token() {
    let app = TestApp::new().await;
    let pair = app.register_and_login(&TestUser::random()).await;

    let message = error_message(app.post_refresh(&pair.access_token).await, 401).await;

    assert_eq!(message, "Invalid Refresh Token");
}

#[tokio::test]
async fn garbage_refresh_token_is_rejected() {
    let app = TestApp::new().await;

    let message = error_message(app.post_refresh("not.a.token").await, 401).await;

    assert_eq!(message, "Invalid Refresh Token");
}

#[tokio::test]
async fn expired_access_token_can_be_renewed_by_refresh() {
    let app = TestApp::with_access_ttl(Duration::milliseconds(1)).await;
    let pair = app.register_and_login(&TestUser::random()).await;
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    let message = error_message(app.get_current_user(&pair.access_token).await, 401).await;
    assert_eq!(message, "Invalid Access Token");

    let response = app.post_refresh(&pair.refresh_token).await;
    assert_eq!(response.status().as_u16(), 200);
}
