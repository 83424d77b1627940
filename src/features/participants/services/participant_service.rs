use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::participants::dtos::{
    ParticipantFormDto, ParticipantOptionDto, ParticipantResponseDto,
};
use crate::features::participants::models::Participant;

/// Service for participant operations
pub struct ParticipantService {
    pool: PgPool,
}

impl ParticipantService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all participants ordered by full name
    pub async fn list(&self) -> Result<Vec<ParticipantResponseDto>> {
        let participants = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, full_name, email, phone, birth_date, gender, city
            FROM participants
            ORDER BY full_name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list participants: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(participants.into_iter().map(|p| p.into()).collect())
    }

    pub async fn options(&self) -> Result<Vec<ParticipantOptionDto>> {
        sqlx::query_as::<_, ParticipantOptionDto>(
            "SELECT id, full_name FROM participants ORDER BY full_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list participant options: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn find(&self, id: i64) -> Result<Option<ParticipantResponseDto>> {
        let participant = sqlx::query_as::<_, Participant>(
            r#"
            SELECT id, full_name, email, phone, birth_date, gender, city
            FROM participants
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get participant {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(participant.map(|p| p.into()))
    }

    pub async fn create(&self, dto: ParticipantFormDto) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO participants (full_name, email, phone, birth_date, gender, city)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&dto.full_name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(dto.birth_date)
        .bind(&dto.gender)
        .bind(&dto.city)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert participant: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Participant created: id={}", id);
        Ok(id)
    }

    pub async fn update(&self, id: i64, dto: ParticipantFormDto) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE participants
            SET full_name = $1, email = $2, phone = $3, birth_date = $4, gender = $5, city = $6
            WHERE id = $7
            "#,
        )
        .bind(&dto.full_name)
        .bind(&dto.email)
        .bind(&dto.phone)
        .bind(dto.birth_date)
        .bind(&dto.gender)
        .bind(&dto.city)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update participant {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Participant updated: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(())
    }

    /// Registrations of this participant stay behind and drop out of the
    /// registration list.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM participants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete participant {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Participant deleted: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(())
    }
}
