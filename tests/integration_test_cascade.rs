mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{parse_body, TestApp};
use serde_json::json;

fn play_time(days: i64, hours: i64) -> String {
    (Utc::now() + Duration::days(days) + Duration::hours(hours))
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

async fn count(app: &TestApp, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(&app.pool)
        .await
        .unwrap()
}

/// Full chain: owner's venue with a field, a booking by Bob, Carol joined.
async fn setup_chain(app: &TestApp) -> (String, String) {
    let owner = app.signup("Alice", "alice@mail.com", "owner").await;

    let response = app.api("POST", "/api/v1/venues", Some(&owner), Some(json!({
        "name": "GOR Senayan",
        "phone": "081234567890",
        "address": "Jl. Asia Afrika 1",
    }))).await;
    let venue_id = parse_body(response).await["data"]["id"].as_str().unwrap().to_string();

    let response = app.api("POST", &format!("/api/v1/venues/{}/fields", venue_id), Some(&owner), Some(json!({
        "name": "Court 1",
        "type": "futsal",
    }))).await;
    let field_id = parse_body(response).await["data"]["id"].as_str().unwrap().to_string();

    let bob = app.signup("Bob", "bob@mail.com", "user").await;
    let response = app.api("POST", &format!("/api/v1/fields/{}/bookings", field_id), Some(&bob), Some(json!({
        "play_start_time": play_time(3, 0),
        "play_end_time": play_time(3, 2),
    }))).await;
    let booking_id = parse_body(response).await["data"]["id"].as_str().unwrap().to_string();

    let carol = app.signup("Carol", "carol@mail.com", "user").await;
    let response = app.api("PUT", &format!("/api/v1/bookings/{}/join", booking_id), Some(&carol), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    (owner, venue_id)
}

#[tokio::test]
async fn test_delete_venue_cascades_to_memberships() {
    let app = TestApp::new().await;
    let (owner, venue_id) = setup_chain(&app).await;

    assert_eq!(count(&app, "fields").await, 1);
    assert_eq!(count(&app, "bookings").await, 1);
    assert_eq!(count(&app, "booking_members").await, 1);

    let response = app.api("DELETE", &format!("/api/v1/venues/{}", venue_id), Some(&owner), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    // No orphans anywhere down the chain.
    assert_eq!(count(&app, "venues").await, 0);
    assert_eq!(count(&app, "fields").await, 0);
    assert_eq!(count(&app, "bookings").await, 0);
    assert_eq!(count(&app, "booking_members").await, 0);

    // Users are untouched.
    assert_eq!(count(&app, "users").await, 3);
}

#[tokio::test]
async fn test_unbook_removes_memberships() {
    let app = TestApp::new().await;
    setup_chain(&app).await;

    let bob = app.login("bob@mail.com").await;
    let booking_id: String = sqlx::query_scalar("SELECT id FROM bookings")
        .fetch_one(&app.pool)
        .await
        .unwrap();

    let response = app.api("DELETE", &format!("/api/v1/bookings/{}", booking_id), Some(&bob), None).await;
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(count(&app, "bookings").await, 0);
    assert_eq!(count(&app, "booking_members").await, 0);

    // The field and venue survive a cancelled booking.
    assert_eq!(count(&app, "fields").await, 1);
    assert_eq!(count(&app, "venues").await, 1);
}
