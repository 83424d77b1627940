use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for an event-sponsor link (`event_sponsors`)
#[derive(Debug, Clone, FromRow)]
pub struct Sponsorship {
    pub id: i64,
    pub event_id: i64,
    pub sponsor_id: i64,
    pub contribution_amount: Decimal,
    pub contribution_kind: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct SponsorshipListRow {
    pub id: i64,
    pub event_id: i64,
    pub event_name: String,
    pub sponsor_name: String,
    pub sponsor_sector: String,
    pub contribution_amount: Decimal,
    pub contribution_kind: String,
    pub created_at: DateTime<Utc>,
}

/// A sponsor's link joined with the event it supports
#[derive(Debug, Clone, FromRow)]
pub struct SponsoredEventRow {
    pub id: i64,
    pub event_id: i64,
    pub event_name: String,
    pub start_date: NaiveDate,
    pub status: String,
    pub contribution_amount: Decimal,
    pub contribution_kind: String,
}
