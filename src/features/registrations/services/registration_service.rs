use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::registrations::dtos::{
    CreateRegistrationDto, RegistrationListItemDto, RegistrationResponseDto,
    UpdateRegistrationDto,
};
use crate::features::registrations::models::{Registration, RegistrationListRow};

/// Service for registration operations
pub struct RegistrationService {
    pool: PgPool,
}

impl RegistrationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Most recent sign-ups first. Rows whose event or participant is gone are
    /// not listed.
    pub async fn list(&self) -> Result<Vec<RegistrationListItemDto>> {
        let rows = sqlx::query_as::<_, RegistrationListRow>(
            r#"
            SELECT
                r.id,
                e.name AS event_name,
                p.full_name AS participant_name,
                r.registered_at,
                r.status,
                r.attendance_status
            FROM registrations r
            INNER JOIN events e ON r.event_id = e.id
            INNER JOIN participants p ON r.participant_id = p.id
            ORDER BY r.registered_at DESC, r.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list registrations: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn find(&self, id: i64) -> Result<Option<RegistrationResponseDto>> {
        let registration = sqlx::query_as::<_, Registration>(
            r#"
            SELECT id, event_id, participant_id, registered_at, status, attendance_status
            FROM registrations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get registration {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(registration.map(|r| r.into()))
    }

    pub async fn create(&self, dto: CreateRegistrationDto) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO registrations (event_id, participant_id, status)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(dto.event_id)
        .bind(dto.participant_id)
        .bind(&dto.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert registration: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Registration created: id={}, event_id={}, participant_id={}",
            id,
            dto.event_id,
            dto.participant_id
        );
        Ok(id)
    }

    pub async fn update(&self, id: i64, dto: UpdateRegistrationDto) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE registrations
            SET event_id = $1, participant_id = $2, status = $3, attendance_status = $4
            WHERE id = $5
            "#,
        )
        .bind(dto.event_id)
        .bind(dto.participant_id)
        .bind(&dto.status)
        .bind(&dto.attendance_status)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update registration {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Registration updated: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM registrations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete registration {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Registration deleted: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(())
    }
}
