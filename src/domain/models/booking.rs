use serde::Serialize;
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct Booking {
    pub id: String,
    pub field_id: String,
    pub creator_id: String,
    pub play_start_time: DateTime<Utc>,
    pub play_end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        field_id: String,
        creator_id: String,
        play_start_time: DateTime<Utc>,
        play_end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            field_id,
            creator_id,
            play_start_time,
            play_end_time,
            created_at: Utc::now(),
        }
    }
}

/// One row per user who has joined a booking they did not create.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct BookingMember {
    pub id: String,
    pub booking_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl BookingMember {
    pub fn new(booking_id: String, user_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            booking_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
