use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateBookingRequest, UpdateBookingRequest};
use crate::api::dtos::responses::{BookingWithMembers, UserProfile};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::booking::Booking;
use crate::domain::policy::{authorize, Rule};
use crate::domain::services::validation::parse_future_play_time;
use crate::error::AppError;
use std::sync::Arc;
use serde_json::json;
use tracing::info;

pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
    _actor: AuthUser,
    Path(field_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.field_repo.find_by_id(&field_id).await?
        .ok_or(AppError::NotFound("field not found".to_string()))?;

    let bookings = state.booking_repo.list_by_field(&field_id).await?;
    Ok(Json(json!({ "message": "success get bookings", "data": bookings })))
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(field_id): Path<String>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let field = state.field_repo.find_by_id(&field_id).await?
        .ok_or(AppError::NotFound("field not found".to_string()))?;

    let play_start_time = parse_future_play_time(&payload.play_start_time)?;
    let play_end_time = parse_future_play_time(&payload.play_end_time)?;
    if play_start_time >= play_end_time {
        return Err(AppError::Validation("play_start_time must be before play_end_time".to_string()));
    }

    // Overlapping bookings on the same field are allowed; there is no
    // conflict check.
    let booking = Booking::new(field.id.clone(), actor.id.clone(), play_start_time, play_end_time);
    let created = state.booking_repo.create(&booking).await?;

    info!("Booking created: {} on field {} by {}", created.id, field.id, actor.id);

    Ok(Json(json!({ "message": "success create booking", "data": created })))
}

pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path((field_id, booking_id)): Path<(String, String)>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("booking not found".to_string()))?;

    if booking.field_id != field_id {
        return Err(AppError::NotFound("booking not found".to_string()));
    }

    authorize(&actor, Rule::BookingOwnership(&booking))?;

    if let Some(raw) = payload.play_start_time {
        booking.play_start_time = parse_future_play_time(&raw)?;
    }
    if let Some(raw) = payload.play_end_time {
        booking.play_end_time = parse_future_play_time(&raw)?;
    }
    if booking.play_start_time >= booking.play_end_time {
        return Err(AppError::Validation("play_start_time must be before play_end_time".to_string()));
    }

    let updated = state.booking_repo.update(&booking).await?;

    info!("Booking updated: {}", updated.id);

    Ok(Json(json!({ "message": "success update booking", "data": updated })))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    _actor: AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("booking not found".to_string()))?;

    let users_joined = state.membership_repo.list_users(&booking.id).await?
        .into_iter()
        .map(UserProfile::from)
        .collect();

    let data = BookingWithMembers { booking, users_joined };

    Ok(Json(json!({ "message": "success get booking", "data": data })))
}

pub async fn unbook(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("booking not found".to_string()))?;

    authorize(&actor, Rule::BookingOwnership(&booking))?;

    state.booking_repo.delete_with_members(&booking.id).await?;

    info!("Booking deleted: {}", booking.id);

    Ok(Json(json!({ "message": "success delete booking" })))
}

pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list_joined_by_user(&actor.id).await?;
    Ok(Json(json!({ "message": "success get current user schedule", "data": bookings })))
}
