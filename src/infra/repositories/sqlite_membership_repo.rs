use crate::domain::{
    models::{booking::BookingMember, user::User},
    ports::MembershipRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteMembershipRepo {
    pool: SqlitePool,
}

impl SqliteMembershipRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembershipRepository for SqliteMembershipRepo {
    async fn create(&self, member: &BookingMember) -> Result<BookingMember, AppError> {
        // UNIQUE (booking_id, user_id) turns a racing duplicate into a
        // constraint violation rather than a second row.
        sqlx::query_as::<_, BookingMember>(
            "INSERT INTO booking_members (id, booking_id, user_id, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&member.id).bind(&member.booking_id).bind(&member.user_id).bind(member.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find(&self, booking_id: &str, user_id: &str) -> Result<Option<BookingMember>, AppError> {
        sqlx::query_as::<_, BookingMember>(
            "SELECT * FROM booking_members WHERE booking_id = ? AND user_id = ?"
        )
            .bind(booking_id).bind(user_id)
            .fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, booking_id: &str, user_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM booking_members WHERE booking_id = ? AND user_id = ?")
            .bind(booking_id).bind(user_id)
            .execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::Conflict("not joined this booking".to_string()));
        }
        Ok(())
    }

    async fn list_users(&self, booking_id: &str) -> Result<Vec<User>, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT u.* FROM users u
             JOIN booking_members m ON m.user_id = u.id
             WHERE m.booking_id = ?
             ORDER BY m.created_at ASC"
        )
            .bind(booking_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }
}
