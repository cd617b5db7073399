use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{auth, booking, field, health, membership, venue};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/register", post(auth::register))
        .route("/api/v1/login", post(auth::login))

        // Venues
        .route("/api/v1/venues", get(venue::list_venues).post(venue::create_venue))
        .route("/api/v1/venues/{venue_id}", put(venue::update_venue).delete(venue::delete_venue))

        // Fields
        .route("/api/v1/venues/{venue_id}/fields", get(field::list_fields).post(field::create_field))
        .route("/api/v1/venues/{venue_id}/fields/{field_id}", put(field::update_field).delete(field::delete_field))

        // Bookings
        .route("/api/v1/fields/{field_id}/bookings", get(booking::list_bookings).post(booking::create_booking))
        .route("/api/v1/fields/{field_id}/bookings/{booking_id}", put(booking::update_booking))
        .route("/api/v1/bookings/{booking_id}", get(booking::get_booking).delete(booking::unbook))

        // Membership
        .route("/api/v1/bookings/{booking_id}/join", put(membership::join_booking))
        .route("/api/v1/bookings/{booking_id}/unjoin", put(membership::unjoin_booking))

        // Schedules
        .route("/api/v1/schedules", get(booking::get_schedule))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
