use chrono::NaiveDate;
use sqlx::FromRow;

/// Database model for event
#[derive(Debug, Clone, FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: i32,
    pub category_id: i64,
    pub venue_id: i64,
    pub creator_id: i64,
    pub status: String,
}

/// Event joined with its category and venue names
#[derive(Debug, Clone, FromRow)]
pub struct EventListRow {
    pub id: i64,
    pub name: String,
    pub category_name: String,
    pub venue_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: i32,
    pub status: String,
}
