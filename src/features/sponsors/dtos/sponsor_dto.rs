use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::features::sponsors::models::Sponsor;

/// Response DTO for sponsor
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SponsorResponseDto {
    pub id: i64,
    pub name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub website: String,
    pub sector: String,
    pub description: String,
}

impl From<Sponsor> for SponsorResponseDto {
    fn from(s: Sponsor) -> Self {
        Self {
            id: s.id,
            name: s.name,
            contact_email: s.contact_email,
            contact_phone: s.contact_phone,
            website: s.website,
            sector: s.sector,
            description: s.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SponsorFormDto {
    pub name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub website: String,
    pub sector: String,
    pub description: String,
}

/// Id + name pair for the sponsorship form
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SponsorOptionDto {
    pub id: i64,
    pub name: String,
}
