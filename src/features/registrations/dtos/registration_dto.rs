use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::registrations::models::{Registration, RegistrationListRow};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponseDto {
    pub id: i64,
    pub event_id: i64,
    pub participant_id: i64,
    pub registered_at: DateTime<Utc>,
    pub status: String,
    pub attendance_status: String,
}

impl From<Registration> for RegistrationResponseDto {
    fn from(r: Registration) -> Self {
        Self {
            id: r.id,
            event_id: r.event_id,
            participant_id: r.participant_id,
            registered_at: r.registered_at,
            status: r.status,
            attendance_status: r.attendance_status,
        }
    }
}

/// Registration list entry with event and participant names resolved
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationListItemDto {
    pub id: i64,
    pub event_name: String,
    pub participant_name: String,
    pub registered_at: DateTime<Utc>,
    pub status: String,
    pub attendance_status: String,
}

impl From<RegistrationListRow> for RegistrationListItemDto {
    fn from(r: RegistrationListRow) -> Self {
        Self {
            id: r.id,
            event_name: r.event_name,
            participant_name: r.participant_name,
            registered_at: r.registered_at,
            status: r.status,
            attendance_status: r.attendance_status,
        }
    }
}

/// Add form. `registered_at` and `attendance_status` come from column defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRegistrationDto {
    pub event_id: i64,
    pub participant_id: i64,
    pub status: String,
}

/// Edit form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRegistrationDto {
    pub event_id: i64,
    pub participant_id: i64,
    pub status: String,
    pub attendance_status: String,
}
