use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::sponsorships::models::{SponsoredEventRow, Sponsorship, SponsorshipListRow};
use crate::shared::forms::blank_as_none;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SponsorshipResponseDto {
    pub id: i64,
    pub event_id: i64,
    pub sponsor_id: i64,
    pub contribution_amount: Decimal,
    pub contribution_kind: String,
    pub created_at: DateTime<Utc>,
}

impl From<Sponsorship> for SponsorshipResponseDto {
    fn from(s: Sponsorship) -> Self {
        Self {
            id: s.id,
            event_id: s.event_id,
            sponsor_id: s.sponsor_id,
            contribution_amount: s.contribution_amount,
            contribution_kind: s.contribution_kind,
            created_at: s.created_at,
        }
    }
}

/// Sponsorship list entry with event and sponsor resolved
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SponsorshipListItemDto {
    pub id: i64,
    pub event_id: i64,
    pub event_name: String,
    pub sponsor_name: String,
    pub sponsor_sector: String,
    pub contribution_amount: Decimal,
    pub contribution_kind: String,
    pub created_at: DateTime<Utc>,
}

impl From<SponsorshipListRow> for SponsorshipListItemDto {
    fn from(r: SponsorshipListRow) -> Self {
        Self {
            id: r.id,
            event_id: r.event_id,
            event_name: r.event_name,
            sponsor_name: r.sponsor_name,
            sponsor_sector: r.sponsor_sector,
            contribution_amount: r.contribution_amount,
            contribution_kind: r.contribution_kind,
            created_at: r.created_at,
        }
    }
}

/// Event supported by a sponsor, with that sponsor's contribution
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SponsoredEventDto {
    pub id: i64,
    pub event_id: i64,
    pub event_name: String,
    pub start_date: NaiveDate,
    pub status: String,
    pub contribution_amount: Decimal,
    pub contribution_kind: String,
}

impl From<SponsoredEventRow> for SponsoredEventDto {
    fn from(r: SponsoredEventRow) -> Self {
        Self {
            id: r.id,
            event_id: r.event_id,
            event_name: r.event_name,
            start_date: r.start_date,
            status: r.status,
            contribution_amount: r.contribution_amount,
            contribution_kind: r.contribution_kind,
        }
    }
}

/// Add form. Blank amount and kind fall back to 0 and `Maddi`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSponsorshipDto {
    pub event_id: i64,
    pub sponsor_id: i64,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub contribution_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub contribution_kind: Option<String>,
}

/// Edit form; the event and sponsor of a link are fixed once created.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSponsorshipDto {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub contribution_amount: Option<Decimal>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub contribution_kind: Option<String>,
}
