use axum::{extract::{Path, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateFieldRequest, UpdateFieldRequest};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::field::{Field, FieldKind};
use crate::domain::policy::{authorize, Rule};
use crate::error::AppError;
use std::sync::Arc;
use serde_json::json;
use tracing::info;

fn parse_kind(raw: &str) -> Result<FieldKind, AppError> {
    raw.parse::<FieldKind>().map_err(|_| {
        AppError::Validation(
            "unknown field type, expected one of: soccer, minisoccer, futsal, basketball, volleyball".to_string(),
        )
    })
}

pub async fn list_fields(
    State(state): State<Arc<AppState>>,
    _actor: AuthUser,
    Path(venue_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.venue_repo.find_by_id(&venue_id).await?
        .ok_or(AppError::NotFound("venue not found".to_string()))?;

    let fields = state.field_repo.list_by_venue(&venue_id).await?;
    Ok(Json(json!({ "message": "success get fields", "data": fields })))
}

pub async fn create_field(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path(venue_id): Path<String>,
    Json(payload): Json<CreateFieldRequest>,
) -> Result<impl IntoResponse, AppError> {
    authorize(&actor, Rule::OwnerRole)?;

    let venue = state.venue_repo.find_by_id(&venue_id).await?
        .ok_or(AppError::NotFound("venue not found".to_string()))?;

    authorize(&actor, Rule::VenueOwnership(&venue))?;

    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    let kind = parse_kind(&payload.kind)?;

    let field = Field::new(venue.id.clone(), name.to_string(), kind);
    let created = state.field_repo.create(&field).await?;

    info!("Field created: {} in venue {}", created.id, venue.id);

    Ok(Json(json!({ "message": "success create field", "data": created })))
}

pub async fn update_field(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path((venue_id, field_id)): Path<(String, String)>,
    Json(payload): Json<UpdateFieldRequest>,
) -> Result<impl IntoResponse, AppError> {
    authorize(&actor, Rule::OwnerRole)?;

    let mut field = state.field_repo.find_by_id(&field_id).await?
        .ok_or(AppError::NotFound("field not found".to_string()))?;
    if field.venue_id != venue_id {
        return Err(AppError::NotFound("field not found".to_string()));
    }

    let venue = state.venue_repo.find_by_id(&field.venue_id).await?
        .ok_or(AppError::Internal)?;

    authorize(&actor, Rule::VenueOwnership(&venue))?;

    if let Some(name) = payload.name {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("name is required".to_string()));
        }
        field.name = name;
    }
    if let Some(kind) = payload.kind {
        field.kind = parse_kind(&kind)?;
    }

    let updated = state.field_repo.update(&field).await?;

    info!("Field updated: {}", updated.id);

    Ok(Json(json!({ "message": "success update field", "data": updated })))
}

pub async fn delete_field(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
    Path((venue_id, field_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    authorize(&actor, Rule::OwnerRole)?;

    let field = state.field_repo.find_by_id(&field_id).await?
        .ok_or(AppError::NotFound("field not found".to_string()))?;
    if field.venue_id != venue_id {
        return Err(AppError::NotFound("field not found".to_string()));
    }

    let venue = state.venue_repo.find_by_id(&field.venue_id).await?
        .ok_or(AppError::Internal)?;

    authorize(&actor, Rule::VenueOwnership(&venue))?;

    state.field_repo.delete(&field.id).await?;

    info!("Field deleted: {}", field.id);

    Ok(Json(json!({ "message": "success delete field" })))
}
