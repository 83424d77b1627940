use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Record counts shown on the landing page
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DashboardSummaryDto {
    pub event_count: i64,
    pub participant_count: i64,
    pub registration_count: i64,
    pub venue_count: i64,
    /// Events that ended before today but still carry the active status
    pub stale_active_event_count: i64,
}

/// Active event that has not started yet
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct UpcomingEventDto {
    pub id: i64,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: i32,
    pub status: String,
}
