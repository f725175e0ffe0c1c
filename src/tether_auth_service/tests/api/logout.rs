use crate::helpers::{TestApp, TestUser, error_message, set_cookies};

#[tokio::test]
async fn logout_clears_cookies_and_revokes_refresh_token() {
    let app = TestApp::new().await;
    let pair = app.register_and_login(&TestUser::random()).await;

    let response = app.post_logout(&pair.access_token).await;

    assert_eq!(response.status().as_u16(), 200);
    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().all(|c| c.contains("Max-Age=0")), "{cookies:?}");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User logged Out");

    let message = error_message(app.post_refresh(&pair.refresh_token).await, 401).await;
    assert_eq!(message, "Refresh Token is expired or used");
}

#[tokio::test]
async fn access_token_stays_valid_until_expiry_after_logout() {
    let app = TestApp::new().await;
    let pair = app.register_and_login(&TestUser::random()).await;

    app.post_logout(&pair.access_token).await;

    let response = app.get_current_user(&pair.access_token).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn logout_requires_access_token() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/api/v1/users/logout", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(error_message(response, 401).await, "UnAuthorized Request");
}

#[tokio::test]
async fn refresh_token_cannot_authenticate_logout() {
    let app = TestApp::new().await;
    let pair = app.register_and_login(&TestUser::random()).await;

    let message = error_message(app.post_logout(&pair.refresh_token).await, 401).await;

    assert_eq!(message, "Invalid Access Token");
}
