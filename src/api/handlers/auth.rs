use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{requests::{LoginRequest, RegisterRequest}, responses::TokenResponse};
use crate::domain::models::user::{Role, User};
use crate::error::AppError;
use std::sync::Arc;
use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::rngs::OsRng;
use serde_json::json;
use tracing::info;

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let role = payload.role.parse::<Role>()
        .map_err(|_| AppError::Validation("role must be either 'user' or 'owner'".to_string()))?;

    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }

    let email = payload.email.trim().to_string();
    if !email.contains('@') {
        return Err(AppError::Validation("invalid email address".to_string()));
    }

    if payload.password.len() < 8 {
        return Err(AppError::Validation("password must be at least 8 characters".to_string()));
    }
    if payload.password != payload.password_confirmation {
        return Err(AppError::Validation("password confirmation does not match".to_string()));
    }

    if state.user_repo.find_by_email(&email).await?.is_some() {
        return Err(AppError::Conflict("email already registered".to_string()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(payload.password.as_bytes(), &salt)
        .map_err(|_| AppError::Internal)?
        .to_string();

    let user = User::new(name.to_string(), email, password_hash, role);
    let created = state.user_repo.create(&user).await?;

    info!("User registered: {} ({})", created.id, created.role);

    Ok(Json(json!({ "message": "register success", "data": created })))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = state.user_repo.find_by_email(payload.email.trim()).await?
        .ok_or(AppError::Unauthorized)?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal)?;

    Argon2::default().verify_password(payload.password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized)?;

    let (token, expires_at) = state.auth_service.issue_token(&user)?;

    info!("User logged in: {}", user.id);

    Ok(Json(json!({
        "message": "login success",
        "data": TokenResponse {
            token_type: "bearer",
            token,
            expires_at,
        }
    })))
}
