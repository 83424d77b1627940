use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for registration
#[derive(Debug, Clone, FromRow)]
pub struct Registration {
    pub id: i64,
    pub event_id: i64,
    pub participant_id: i64,
    pub registered_at: DateTime<Utc>,
    pub status: String,
    pub attendance_status: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct RegistrationListRow {
    pub id: i64,
    pub event_name: String,
    pub participant_name: String,
    pub registered_at: DateTime<Utc>,
    pub status: String,
    pub attendance_status: String,
}
