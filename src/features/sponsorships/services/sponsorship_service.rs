use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::sponsorships::dtos::{
    CreateSponsorshipDto, SponsoredEventDto, SponsorshipListItemDto, SponsorshipResponseDto,
    UpdateSponsorshipDto,
};
use crate::features::sponsorships::models::{SponsoredEventRow, Sponsorship, SponsorshipListRow};
use crate::shared::constants::DEFAULT_CONTRIBUTION_KIND;

const LIST_SELECT: &str = r#"
    SELECT
        es.id,
        es.event_id,
        e.name AS event_name,
        s.name AS sponsor_name,
        s.sector AS sponsor_sector,
        es.contribution_amount,
        es.contribution_kind,
        es.created_at
    FROM event_sponsors es
    INNER JOIN events e ON es.event_id = e.id
    INNER JOIN sponsors s ON es.sponsor_id = s.id
"#;

/// Service for event-sponsor links
pub struct SponsorshipService {
    pool: PgPool,
}

impl SponsorshipService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<SponsorshipListItemDto>> {
        let sql = format!("{} ORDER BY es.created_at DESC, es.id DESC", LIST_SELECT);
        let rows = sqlx::query_as::<_, SponsorshipListRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list sponsorships: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Sponsors of one event, largest contribution first
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<SponsorshipListItemDto>> {
        let sql = format!(
            "{} WHERE es.event_id = $1 ORDER BY es.contribution_amount DESC, es.id",
            LIST_SELECT
        );
        let rows = sqlx::query_as::<_, SponsorshipListRow>(&sql)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list sponsorships of event {}: {:?}", event_id, e);
                AppError::Database(e)
            })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Events one sponsor supports, soonest start first
    pub async fn list_for_sponsor(&self, sponsor_id: i64) -> Result<Vec<SponsoredEventDto>> {
        let rows = sqlx::query_as::<_, SponsoredEventRow>(
            r#"
            SELECT
                es.id,
                es.event_id,
                e.name AS event_name,
                e.start_date,
                e.status,
                es.contribution_amount,
                es.contribution_kind
            FROM event_sponsors es
            INNER JOIN events e ON es.event_id = e.id
            WHERE es.sponsor_id = $1
            ORDER BY e.start_date, es.id
            "#,
        )
        .bind(sponsor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to list sponsorships of sponsor {}: {:?}",
                sponsor_id,
                e
            );
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn find(&self, id: i64) -> Result<Option<SponsorshipResponseDto>> {
        let sponsorship = sqlx::query_as::<_, Sponsorship>(
            r#"
            SELECT id, event_id, sponsor_id, contribution_amount, contribution_kind, created_at
            FROM event_sponsors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get sponsorship {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(sponsorship.map(|s| s.into()))
    }

    pub async fn create(&self, dto: CreateSponsorshipDto) -> Result<i64> {
        let (amount, kind) = contribution(dto.contribution_amount, dto.contribution_kind);
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO event_sponsors (event_id, sponsor_id, contribution_amount, contribution_kind)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(dto.event_id)
        .bind(dto.sponsor_id)
        .bind(amount)
        .bind(&kind)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert sponsorship: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Sponsorship created: id={}, event_id={}, sponsor_id={}, amount={}",
            id,
            dto.event_id,
            dto.sponsor_id,
            amount
        );
        Ok(id)
    }

    pub async fn update(&self, id: i64, dto: UpdateSponsorshipDto) -> Result<()> {
        let (amount, kind) = contribution(dto.contribution_amount, dto.contribution_kind);
        let result = sqlx::query(
            r#"
            UPDATE event_sponsors
            SET contribution_amount = $1, contribution_kind = $2
            WHERE id = $3
            "#,
        )
        .bind(amount)
        .bind(&kind)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update sponsorship {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Sponsorship updated: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM event_sponsors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete sponsorship {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Sponsorship deleted: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(())
    }
}

fn contribution(amount: Option<Decimal>, kind: Option<String>) -> (Decimal, String) {
    (
        amount.unwrap_or(Decimal::ZERO),
        kind.unwrap_or_else(|| DEFAULT_CONTRIBUTION_KIND.to_string()),
    )
}
