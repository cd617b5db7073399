use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum FieldKind {
    Soccer,
    Minisoccer,
    Futsal,
    Basketball,
    Volleyball,
}

impl FromStr for FieldKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "soccer" => Ok(FieldKind::Soccer),
            "minisoccer" => Ok(FieldKind::Minisoccer),
            "futsal" => Ok(FieldKind::Futsal),
            "basketball" => Ok(FieldKind::Basketball),
            "volleyball" => Ok(FieldKind::Volleyball),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize, FromRow, Clone)]
pub struct Field {
    pub id: String,
    pub venue_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub created_at: DateTime<Utc>,
}

impl Field {
    pub fn new(venue_id: String, name: String, kind: FieldKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            venue_id,
            name,
            kind,
            created_at: Utc::now(),
        }
    }
}
