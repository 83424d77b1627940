use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::features::participants::models::Participant;

/// Response DTO for participant
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ParticipantResponseDto {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub city: String,
}

impl From<Participant> for ParticipantResponseDto {
    fn from(p: Participant) -> Self {
        Self {
            id: p.id,
            full_name: p.full_name,
            email: p.email,
            phone: p.phone,
            birth_date: p.birth_date,
            gender: p.gender,
            city: p.city,
        }
    }
}

/// Submitted by both the add and the edit form; `birth_date` is `YYYY-MM-DD`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantFormDto {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub city: String,
}

/// Id + name pair for the registration form
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ParticipantOptionDto {
    pub id: i64,
    pub full_name: String,
}
