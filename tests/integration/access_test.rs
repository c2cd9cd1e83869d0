//! Integration tests for the pole access endpoints.

mod helpers;

use http::StatusCode;
use serde_json::json;

use mkb_auth::jwt::JwtEncoder;
use mkb_core::config::AuthConfig;
use mkb_core::types::UserId;

fn denied() -> serde_json::Value {
    json!({
        "role_level": null,
        "can_read": false,
        "can_write": false,
        "can_manage": false,
    })
}

#[tokio::test]
async fn test_access_without_token_is_401_and_denied() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/access?pole=Stock", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, denied());
    assert_eq!(app.store_calls(), 0);
}

#[tokio::test]
async fn test_access_with_foreign_token_is_401() {
    let app = helpers::TestApp::new();
    let user = UserId::new();
    app.assign(user, "Stock", Some(1));

    let foreign = JwtEncoder::new(&AuthConfig {
        jwt_secret: "someone-else".to_string(),
        ..AuthConfig::default()
    })
    .mint(user, None)
    .expect("mint");

    let response = app.get("/api/access?pole=Stock", Some(&foreign)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, denied());

    let response = app.get("/api/access?pole=Stock", Some("not-a-jwt")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.store_calls(), 0);
}

#[tokio::test]
async fn test_pole_head_gets_full_access() {
    let app = helpers::TestApp::new();
    let user = UserId::new();
    app.assign(user, "Stock", Some(3));
    let token = app.token_for(user);

    let response = app.get("/api/access?pole=Stock", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "role_level": 3,
            "can_read": true,
            "can_write": true,
            "can_manage": true,
        })
    );
}

#[tokio::test]
async fn test_unassigned_pole_is_denied_with_200() {
    let app = helpers::TestApp::new();
    let user = UserId::new();
    app.assign(user, "Stock", Some(3));
    let token = app.token_for(user);

    let response = app.get("/api/access?pole=Direction", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, denied());
}

#[tokio::test]
async fn test_pole_name_is_trimmed() {
    let app = helpers::TestApp::new();
    let user = UserId::new();
    app.assign(user, "Pricing", Some(4));
    let token = app.token_for(user);

    let response = app
        .get("/api/access?pole=%20Pricing%20", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role_level"], 4);
    assert_eq!(response.body["can_write"], true);
    assert_eq!(response.body["can_manage"], false);
}

#[tokio::test]
async fn test_missing_pole_is_400() {
    let app = helpers::TestApp::new();
    let token = app.token_for(UserId::new());

    let response = app.get("/api/access", Some(&token)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(app.store_calls(), 0);
}

#[tokio::test]
async fn test_store_failure_is_503() {
    let app = helpers::TestApp::new();
    let user = UserId::new();
    app.assign(user, "Stock", Some(1));
    app.break_store();
    let token = app.token_for(user);

    let response = app.get("/api/access?pole=Stock", Some(&token)).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["error"], "SERVICE_UNAVAILABLE");

    let response = app.get("/api/access/poles", Some(&token)).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_list_poles_sorted_by_name() {
    let app = helpers::TestApp::new();
    let user = UserId::new();
    app.assign(user, "Stock", Some(5));
    app.assign(user, "Commercial", Some(5));
    let token = app.token_for(user);

    let response = app.get("/api/access/poles", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([
            {
                "pole_name": "Commercial",
                "role_level": 5,
                "can_read": true,
                "can_write": false,
                "can_manage": false,
            },
            {
                "pole_name": "Stock",
                "role_level": 5,
                "can_read": true,
                "can_write": false,
                "can_manage": false,
            },
        ])
    );
}

#[tokio::test]
async fn test_list_poles_without_token_is_401_and_empty() {
    let app = helpers::TestApp::new();

    let response = app.get("/api/access/poles", None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, json!([]));
    assert_eq!(app.store_calls(), 0);
}

#[tokio::test]
async fn test_check_capability() {
    let app = helpers::TestApp::new();
    let user = UserId::new();
    app.assign(user, "Stock", Some(4));
    let token = app.token_for(user);

    let response = app
        .get("/api/access/check?pole=Stock&capability=write", Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "pole_name": "Stock",
            "capability": "write",
            "allowed": true,
            "role_level": 4,
        })
    );

    let response = app
        .get("/api/access/check?pole=Stock&capability=manage", Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["allowed"], false);
}

#[tokio::test]
async fn test_check_rejects_unknown_capability() {
    let app = helpers::TestApp::new();
    let token = app.token_for(UserId::new());

    let response = app
        .get("/api/access/check?pole=Stock&capability=delete", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store_calls(), 0);
}

#[tokio::test]
async fn test_check_requires_token() {
    let app = helpers::TestApp::new();

    let response = app
        .get("/api/access/check?pole=Stock&capability=read", None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}
