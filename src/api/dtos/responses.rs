use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::{booking::Booking, user::{Role, User}};

#[derive(Serialize)]
pub struct TokenResponse {
    #[serde(rename = "type")]
    pub token_type: &'static str,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

#[derive(Serialize)]
pub struct BookingWithMembers {
    #[serde(flatten)]
    pub booking: Booking,
    pub users_joined: Vec<UserProfile>,
}
