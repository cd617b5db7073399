use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::booking::BookingMember;
use crate::error::AppError;
use std::sync::Arc;
use serde_json::json;
use tracing::info;

pub async fn join_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("booking not found".to_string()))?;

    if booking.creator_id == actor.id {
        return Err(AppError::Forbidden("cannot join your own booking".to_string()));
    }

    if state.membership_repo.find(&booking.id, &actor.id).await?.is_some() {
        return Err(AppError::Conflict("already joined this booking".to_string()));
    }

    // A concurrent duplicate join loses against the unique index and
    // surfaces as 409 instead of a second row.
    let member = BookingMember::new(booking.id.clone(), actor.id.clone());
    let created = state.membership_repo.create(&member).await?;

    info!("User {} joined booking {}", actor.id, booking.id);

    Ok(Json(json!({ "message": "success joined booking", "data": created })))
}

pub async fn unjoin_booking(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state.booking_repo.find_by_id(&booking_id).await?
        .ok_or(AppError::NotFound("booking not found".to_string()))?;

    if booking.creator_id == actor.id {
        return Err(AppError::Forbidden("cannot leave your own booking".to_string()));
    }

    if state.membership_repo.find(&booking.id, &actor.id).await?.is_none() {
        return Err(AppError::Conflict("not joined this booking".to_string()));
    }

    state.membership_repo.delete(&booking.id, &actor.id).await?;

    info!("User {} left booking {}", actor.id, booking.id);

    Ok(Json(json!({ "message": "success unjoined booking" })))
}
