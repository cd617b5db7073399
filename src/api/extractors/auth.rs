use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use crate::domain::models::auth::{Actor, Claims};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use jsonwebtoken::{decode, DecodingKey, Validation};
use tracing::Span;

/// Rejects with 401 when the bearer token is absent, malformed, or expired,
/// so every protected handler starts from a known actor.
pub struct AuthUser(pub Actor);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts.headers.get(header::AUTHORIZATION)
            .ok_or(AppError::Unauthorized)?
            .to_str()
            .map_err(|_| AppError::Unauthorized)?;

        let token = header_value.strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let decoding_key = DecodingKey::from_secret(app_state.config.jwt_secret.as_bytes());

        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(|_| AppError::Unauthorized)?;

        let actor = Actor {
            id: token_data.claims.sub,
            role: token_data.claims.role,
        };

        Span::current().record("user_id", actor.id.as_str());

        Ok(AuthUser(actor))
    }
}
