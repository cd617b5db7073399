use serde::Serialize;
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::models::field::Field;

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
}

impl Venue {
    pub fn new(name: String, phone: String, address: String, owner_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            phone,
            address,
            owner_id,
            created_at: Utc::now(),
        }
    }
}

/// A venue together with its bookable fields, as returned by the venue listing.
#[derive(Debug, Serialize)]
pub struct VenueWithFields {
    #[serde(flatten)]
    pub venue: Venue,
    pub fields: Vec<Field>,
}
