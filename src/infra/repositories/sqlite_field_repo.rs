use crate::domain::{models::field::Field, ports::FieldRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteFieldRepo {
    pool: SqlitePool,
}

impl SqliteFieldRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FieldRepository for SqliteFieldRepo {
    async fn create(&self, field: &Field) -> Result<Field, AppError> {
        sqlx::query_as::<_, Field>(
            "INSERT INTO fields (id, venue_id, name, kind, created_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING *"
        )
            .bind(&field.id).bind(&field.venue_id).bind(&field.name)
            .bind(field.kind).bind(field.created_at)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Field>, AppError> {
        sqlx::query_as::<_, Field>("SELECT * FROM fields WHERE id = ?")
            .bind(id).fetch_optional(&self.pool).await.map_err(AppError::Database)
    }

    async fn list_by_venue(&self, venue_id: &str) -> Result<Vec<Field>, AppError> {
        sqlx::query_as::<_, Field>("SELECT * FROM fields WHERE venue_id = ? ORDER BY created_at ASC")
            .bind(venue_id).fetch_all(&self.pool).await.map_err(AppError::Database)
    }

    async fn update(&self, field: &Field) -> Result<Field, AppError> {
        sqlx::query_as::<_, Field>(
            "UPDATE fields SET name = ?, kind = ?
             WHERE id = ?
             RETURNING *"
        )
            .bind(&field.name).bind(field.kind).bind(&field.id)
            .fetch_one(&self.pool).await.map_err(AppError::Database)
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM fields WHERE id = ?")
            .bind(id).execute(&self.pool).await.map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("field not found".to_string()));
        }
        Ok(())
    }
}
