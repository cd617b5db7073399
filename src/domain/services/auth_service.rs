use crate::config::Config;
use crate::domain::models::{auth::Claims, user::User};
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

/// Bearer tokens are valid for seven days from issue.
pub const TOKEN_TTL_DAYS: i64 = 7;

pub struct AuthService {
    encoding_key: EncodingKey,
}

impl AuthService {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    pub fn issue_token(&self, user: &User) -> Result<(String, DateTime<Utc>), AppError> {
        let now = Utc::now();
        let expires_at = now + Duration::days(TOKEN_TTL_DAYS);

        let claims = Claims {
            sub: user.id.clone(),
            role: user.role,
            iat: now.timestamp() as usize,
            exp: expires_at.timestamp() as usize,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!("JWT encoding failed: {}", e);
                AppError::Internal
            })?;

        Ok((token, expires_at))
    }
}
