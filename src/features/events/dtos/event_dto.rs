use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::features::events::models::{Event, EventListRow};

/// Full event row
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponseDto {
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

impl From<Event> for EventResponseDto {
    fn from(e: Event) -> Self {
        Self {
            id: e.id,
            name: e.name,
            description: e.description,
            start_date: e.start_date,
            end_date: e.end_date,
            capacity: e.capacity,
            category_id: e.category_id,
            venue_id: e.venue_id,
            creator_id: e.creator_id,
            status: e.status,
        }
    }
}

/// Event list entry with category and venue names resolved
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventListItemDto {
    pub id: i64,
    pub name: String,
    pub category_name: String,
    pub venue_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: i32,
    pub status: String,
}

impl From<EventListRow> for EventListItemDto {
    fn from(r: EventListRow) -> Self {
        Self {
            id: r.id,
            name: r.name,
            category_name: r.category_name,
            venue_name: r.venue_name,
            start_date: r.start_date,
            end_date: r.end_date,
            capacity: r.capacity,
            status: r.status,
        }
    }
}

/// Submitted by both the add and the edit form. `creator_id` is not part of
/// the form; new events get the configured default actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventFormDto {
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub capacity: i32,
    pub category_id: i64,
    pub venue_id: i64,
    pub status: String,
}

/// Id + name pair for the registration and sponsorship forms
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EventOptionDto {
    pub id: i64,
    pub name: String,
}
