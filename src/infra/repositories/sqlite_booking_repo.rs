use crate::domain::{models::booking::Booking, ports::BookingRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteBookingRepo {
    pool: SqlitePool,
}

impl SqliteBookingRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqliteBookingRepo {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (id, field_id, creator_id, play_start_time, play_end_time, created_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&booking.id).bind(&booking.field_id).bind(&booking.creator_id)
            .bind(booking.play_start_time).bind(booking.play_end_time).bind(booking.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_field(&self, field_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE field_id = ? ORDER BY play_start_time ASC")
            .bind(field_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, booking: &Booking) -> Result<Booking, AppError> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET play_start_time = ?, play_end_time = ?
             WHERE id = ?
             RETURNING *"
        )
            .bind(booking.play_start_time).bind(booking.play_end_time).bind(&booking.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete_with_members(&self, id: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query("DELETE FROM booking_members WHERE booking_id = ?")
            .bind(id).execute(&mut *tx).await.map_err(AppError::Database)?;

        let result = sqlx::query("DELETE FROM bookings WHERE id = ?")
            .bind(id).execute(&mut *tx).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("booking not found".to_string()));
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }

    async fn list_joined_by_user(&self, user_id: &str) -> Result<Vec<Booking>, AppError> {
        sqlx::query_as::<_, Booking>(
            "SELECT b.* FROM bookings b
             JOIN booking_members m ON m.booking_id = b.id
             WHERE m.user_id = ?
             ORDER BY b.play_start_time ASC"
        )
            .bind(user_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
