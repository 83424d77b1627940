use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::features::venues::models::Venue;

/// Response DTO for venue
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueResponseDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub capacity: i32,
    pub contact_phone: String,
}

impl From<Venue> for VenueResponseDto {
    fn from(v: Venue) -> Self {
        Self {
            id: v.id,
            name: v.name,
            address: v.address,
            city: v.city,
            capacity: v.capacity,
            contact_phone: v.contact_phone,
        }
    }
}

/// Submitted by both the add and the edit form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueFormDto {
    pub name: String,
    pub address: String,
    pub city: String,
    pub capacity: i32,
    pub contact_phone: String,
}

/// Venue entry for the event form's select input
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct VenueOptionDto {
    pub id: i64,
    pub name: String,
    pub city: String,
}
