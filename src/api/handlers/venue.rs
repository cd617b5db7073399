use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateVenueRequest, UpdateVenueRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::venue::Venue;
use crate::domain::policy::{authorize, Rule};
use crate::domain::services::validation::is_mobile_phone;
use crate::error::AppError;
use std::sync::Arc;
use serde_json::json;
use tracing::info;

pub async fn list_venues(
    State(state): State<Arc<AppState>>,
    _actor: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let venues = state.venue_repo.list_with_fields().await?;
    Ok(Json(json!({ "message": "success get venues", "data": venues })))
}

pub async fn create_venue(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Json(payload): Json<CreateVenueRequest>,
) -> Result<impl IntoResponse, AppError> {
    authorize(&actor, Rule::OwnerRole)?;

    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }

    let phone = payload.phone.trim();
    if !is_mobile_phone(phone) {
        return Err(AppError::Validation("phone must be a valid mobile number".to_string()));
    }

    let address = payload.address.trim();
    if address.is_empty() {
        return Err(AppError::Validation("address is required".to_string()));
    }

    let venue = Venue::new(name.to_string(), phone.to_string(), address.to_string(), actor.id.clone());
    let created = state.venue_repo.create(&venue).await?;

    info!("Venue created: {} by owner {}", created.id, actor.id);

    Ok(Json(json!({ "message": "success create venue", "data": created })))
}

pub async fn update_venue(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(venue_id): Path<String>,
    Json(payload): Json<UpdateVenueRequest>,
) -> Result<impl IntoResponse, AppError> {
    authorize(&actor, Rule::OwnerRole)?;

    let mut venue = state.venue_repo.find_by_id(&venue_id).await?
        .ok_or(AppError::NotFound("venue not found".to_string()))?;

    authorize(&actor, Rule::VenueOwnership(&venue))?;

    if let Some(name) = payload.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }
        venue.name = name;
    }
    if let Some(phone) = payload.phone {
        let phone = phone.trim().to_string();
        if !is_mobile_phone(&phone) {
            return Err(AppError::Validation("phone must be a valid mobile number".to_string()));
        }
        venue.phone = phone;
    }
    if let Some(address) = payload.address {
        venue.address = address.trim().to_string();
    }

    let updated = state.venue_repo.update(&venue).await?;

    info!("Venue updated: {}", updated.id);

    Ok(Json(json!({ "message": "success update venue", "data": updated })))
}

pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(venue_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let venue = state.venue_repo.find_by_id(&venue_id).await?
        .ok_or(AppError::NotFound("venue not found".to_string()))?;

    authorize(&actor, Rule::OwnerRole)?;
    authorize(&actor, Rule::VenueOwnership(&venue))?;

    // Fields, their bookings and those bookings' members go with the venue.
    state.venue_repo.delete(&venue.id).await?;

    info!("Venue deleted: {}", venue.id);

    Ok(Json(json!({ "message": "success delete venue" })))
}
