use crate::domain::{
    models::{field::Field, venue::{Venue, VenueWithFields}},
    ports::VenueRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use std::collections::HashMap;

pub struct SqliteVenueRepo {
    pool: SqlitePool,
}

impl SqliteVenueRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueRepository for SqliteVenueRepo {
    async fn create(&self, venue: &Venue) -> Result<Venue, AppError> {
        sqlx::query_as::<_, Venue>(
            "INSERT INTO venues (id, name, phone, address, owner_id, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&venue.id).bind(&venue.name).bind(&venue.phone)
            .bind(&venue.address).bind(&venue.owner_id).bind(venue.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Venue>, AppError> {
        sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_with_fields(&self) -> Result<Vec<VenueWithFields>, AppError> {
        let venues = sqlx::query_as::<_, Venue>("SELECT * FROM venues ORDER BY created_at ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)?;

        let fields = sqlx::query_as::<_, Field>("SELECT * FROM fields ORDER BY created_at ASC")
            .fetch_all(&self.pool).await.map_err(AppError::Database)?;

        let mut by_venue: HashMap<String, Vec<Field>> = HashMap::new();
        for field in fields {
            by_venue.entry(field.venue_id.clone()).or_default().push(field);
        }

        Ok(venues
            .into_iter()
            .map(|venue| {
                let fields = by_venue.remove(&venue.id).unwrap_or_default();
                VenueWithFields { venue, fields }
            })
            .collect())
    }

    async fn update(&self, venue: &Venue) -> Result<Venue, AppError> {
        sqlx::query_as::<_, Venue>(
            "UPDATE venues SET name = ?, phone = ?, address = ?
             WHERE id = ?
             RETURNING *"
        )
            .bind(&venue.name).bind(&venue.phone).bind(&venue.address).bind(&venue.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        // Cascades through fields, bookings and booking_members.
        let result = sqlx::query("DELETE FROM venues WHERE id = ?")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("venue not found".to_string()));
        }
        Ok(())
    }
}
