mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_owner_creates_venue() {
    let app = TestApp::new().await;
    let token = app.signup("Alice", "alice@mail.com", "owner").await;

    let response = app.api("POST", "/api/v1/venues", Some(&token), Some(json!({
        "name": "GOR Senayan",
        "phone": "081234567890",
        "address": "Jl. Asia Afrika 1",
    }))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["message"], "success create venue");
    assert_eq!(body["data"]["name"], "GOR Senayan");

    let response = app.api("GET", "/api/v1/venues", Some(&token), None).await;
    let body = parse_body(response).await;
    assert_eq!(body["message"], "success get venues");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["fields"], json!([]));
}

#[tokio::test]
async fn test_plain_user_cannot_create_venue() {
    let app = TestApp::new().await;
    let token = app.signup("Dave", "dave@mail.com", "user").await;

    let response = app.api("POST", "/api/v1/venues", Some(&token), Some(json!({
        "name": "Dave's Gym",
        "phone": "081234567890",
        "address": "Somewhere 1",
    }))).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_body(response).await;
    assert_eq!(body["message"], "Owner privilege only");

    // The deny must have short-circuited before any insert.
    let response = app.api("GET", "/api/v1/venues", Some(&token), None).await;
    let body = parse_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_invalid_phone_rejected() {
    let app = TestApp::new().await;
    let token = app.signup("Alice", "alice@mail.com", "owner").await;

    let response = app.api("POST", "/api/v1/venues", Some(&token), Some(json!({
        "name": "GOR Senayan",
        "phone": "not a phone",
        "address": "Jl. Asia Afrika 1",
    }))).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = parse_body(response).await;
    assert_eq!(body["message"], "phone must be a valid mobile number");
}

#[tokio::test]
async fn test_update_venue_partial() {
    let app = TestApp::new().await;
    let token = app.signup("Alice", "alice@mail.com", "owner").await;

    let response = app.api("POST", "/api/v1/venues", Some(&token), Some(json!({
        "name": "GOR Senayan",
        "phone": "081234567890",
        "address": "Jl. Asia Afrika 1",
    }))).await;
    let venue_id = parse_body(response).await["data"]["id"].as_str().unwrap().to_string();

    // Only the phone is supplied; name and address stay untouched.
    let response = app.api("PUT", &format!("/api/v1/venues/{}", venue_id), Some(&token), Some(json!({
        "phone": "089999999999",
    }))).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["message"], "success update venue");
    assert_eq!(body["data"]["name"], "GOR Senayan");
    assert_eq!(body["data"]["phone"], "089999999999");
    assert_eq!(body["data"]["address"], "Jl. Asia Afrika 1");
}

#[tokio::test]
async fn test_update_venue_of_another_owner() {
    let app = TestApp::new().await;
    let alice = app.signup("Alice", "alice@mail.com", "owner").await;
    let mallory = app.signup("Mallory", "mallory@mail.com", "owner").await;

    let response = app.api("POST", "/api/v1/venues", Some(&alice), Some(json!({
        "name": "GOR Senayan",
        "phone": "081234567890",
        "address": "Jl. Asia Afrika 1",
    }))).await;
    let venue_id = parse_body(response).await["data"]["id"].as_str().unwrap().to_string();

    let response = app.api("PUT", &format!("/api/v1/venues/{}", venue_id), Some(&mallory), Some(json!({
        "name": "Mallory's Now",
    }))).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = parse_body(response).await;
    assert_eq!(body["message"], "While you are an owner, this venue is not yours");
}

#[tokio::test]
async fn test_update_unknown_venue() {
    let app = TestApp::new().await;
    let token = app.signup("Alice", "alice@mail.com", "owner").await;

    let response = app.api("PUT", "/api/v1/venues/no-such-venue", Some(&token), Some(json!({
        "name": "Ghost",
    }))).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_body(response).await;
    assert_eq!(body["message"], "venue not found");
}

#[tokio::test]
async fn test_plain_user_update_denied_before_lookup() {
    let app = TestApp::new().await;
    let user = app.signup("Dave", "dave@mail.com", "user").await;

    // Role gate fires first, so even an unknown id reports the owner denial.
    let response = app.api("PUT", "/api/v1/venues/no-such-venue", Some(&user), Some(json!({
        "name": "Ghost",
    }))).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = parse_body(response).await;
    assert_eq!(body["message"], "Owner privilege only");
}

#[tokio::test]
async fn test_delete_venue() {
    let app = TestApp::new().await;
    let token = app.signup("Alice", "alice@mail.com", "owner").await;

    let response = app.api("POST", "/api/v1/venues", Some(&token), Some(json!({
        "name": "GOR Senayan",
        "phone": "081234567890",
        "address": "Jl. Asia Afrika 1",
    }))).await;
    let venue_id = parse_body(response).await["data"]["id"].as_str().unwrap().to_string();

    let response = app.api("DELETE", &format!("/api/v1/venues/{}", venue_id), Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body["message"], "success delete venue");

    let response = app.api("GET", "/api/v1/venues", Some(&token), None).await;
    let body = parse_body(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}
