use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::dashboard::dtos::{DashboardSummaryDto, UpcomingEventDto};
use crate::shared::constants::{EVENT_STATUS_ACTIVE, UPCOMING_EVENT_LIMIT};

pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Raw table counts; orphaned rows are counted too.
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        sqlx::query_as::<_, DashboardSummaryDto>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM events) AS event_count,
                (SELECT COUNT(*) FROM participants) AS participant_count,
                (SELECT COUNT(*) FROM registrations) AS registration_count,
                (SELECT COUNT(*) FROM venues) AS venue_count,
                (SELECT COUNT(*) FROM events
                  WHERE end_date < CURRENT_DATE AND status = $1) AS stale_active_event_count
            "#,
        )
        .bind(EVENT_STATUS_ACTIVE)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get summary counts: {:?}", e);
            AppError::Database(e)
        })
    }

    /// Active events starting after today, soonest first
    pub async fn upcoming_events(&self) -> Result<Vec<UpcomingEventDto>> {
        sqlx::query_as::<_, UpcomingEventDto>(
            r#"
            SELECT id, name, start_date, end_date, capacity, status
            FROM events
            WHERE start_date > CURRENT_DATE AND status = $1
            ORDER BY start_date, id
            LIMIT $2
            "#,
        )
        .bind(EVENT_STATUS_ACTIVE)
        .bind(UPCOMING_EVENT_LIMIT)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list upcoming events: {:?}", e);
            AppError::Database(e)
        })
    }
}
