use serde_json::Value;

use crate::helpers::{TestApp, TestUser, error_message};

#[tokio::test]
async fn current_user_returns_profile() {
    let app = TestApp::new().await;
    let user = TestUser::random();
    let pair = app.register_and_login(&user).await;

    let response = app.get_current_user(&pair.access_token).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "This is current user");
    assert_eq!(body["data"]["username"], user.username.as_str());
    assert_eq!(body["data"]["fullName"], user.full_name.as_str());
}

#[tokio::test]
async fn details_resolve_tokens_of_matching_kind() {
    let app = TestApp::new().await;
    let user = TestUser::random();
    let pair = app.register_and_login(&user).await;

    let response = app.post_access_token_details(&pair.access_token).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Get information Successfully");
    assert_eq!(body["data"]["user"]["username"], user.username.as_str());

    let response = app.post_refresh_token_details(&pair.refresh_token).await;
    assert_eq!(response.status().as_u16(), 200);

    let message = error_message(app.post_access_token_details(&pair.refresh_token).await, 401).await;
    assert_eq!(message, "Invalid Access Token");

    let message = error_message(app.post_refresh_token_details(&pair.access_token).await, 401).await;
    assert_eq!(message, "Invalid Refresh Token");
}

#[tokio::test]
async fn refresh_details_do_not_consume_the_token() {
    let app = TestApp::new().await;
    let pair = app.register_and_login(&TestUser::random()).await;

    app.post_refresh_token_details(&pair.refresh_token).await;

    let response = app.post_refresh(&pair.refresh_token).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn details_without_token_are_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/api/v1/users/details/access-token", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(error_message(response, 401).await, "UnAuthorized Request");
}

#[tokio::test]
async fn list_accounts_in_registration_order() {
    let app = TestApp::new().await;
    let first = TestUser::random();
    let pair = app.register_and_login(&first).await;
    let second = TestUser::random();
    app.post_register(&second.register_body()).await;

    let response = app.get_accounts(&pair.access_token).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "All users list");
    let usernames: Vec<_> = body["data"]["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(usernames, [first.username, second.username]);
}

#[tokio::test]
async fn list_accounts_requires_access_token() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/api/v1/users", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}
