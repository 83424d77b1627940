use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::events::dtos::{
    EventFormDto, EventListItemDto, EventOptionDto, EventResponseDto,
};
use crate::features::events::models::{Event, EventListRow};

/// Service for event operations
pub struct EventService {
    pool: PgPool,
    default_creator_id: i64,
}

impl EventService {
    pub fn new(pool: PgPool, default_creator_id: i64) -> Self {
        Self {
            pool,
            default_creator_id,
        }
    }

    /// List events with category and venue names, latest start first.
    ///
    /// Inner joins: an event whose category or venue row no longer exists is
    /// left out even though the event row itself is still stored.
    pub async fn list(&self) -> Result<Vec<EventListItemDto>> {
        let rows = sqlx::query_as::<_, EventListRow>(
            r#"
            SELECT
                e.id,
                e.name,
                c.name AS category_name,
                v.name AS venue_name,
                e.start_date,
                e.end_date,
                e.capacity,
                e.status
            FROM events e
            INNER JOIN categories c ON e.category_id = c.id
            INNER JOIN venues v ON e.venue_id = v.id
            ORDER BY e.start_date DESC, e.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list events: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    pub async fn options(&self) -> Result<Vec<EventOptionDto>> {
        sqlx::query_as::<_, EventOptionDto>("SELECT id, name FROM events ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list event options: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn find(&self, id: i64) -> Result<Option<EventResponseDto>> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, name, description, start_date, end_date, capacity,
                   category_id, venue_id, creator_id, status
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get event {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(event.map(|e| e.into()))
    }

    /// Insert an event owned by the configured default actor
    pub async fn create(&self, dto: EventFormDto) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO events (
                name, description, start_date, end_date, capacity,
                category_id, venue_id, creator_id, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.start_date)
        .bind(dto.end_date)
        .bind(dto.capacity)
        .bind(dto.category_id)
        .bind(dto.venue_id)
        .bind(self.default_creator_id)
        .bind(&dto.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert event: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Event created: id={}, category_id={}, venue_id={}, creator_id={}",
            id,
            dto.category_id,
            dto.venue_id,
            self.default_creator_id
        );
        Ok(id)
    }

    /// Replace every editable column; `creator_id` is kept.
    pub async fn update(&self, id: i64, dto: EventFormDto) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE events
            SET name = $1, description = $2, start_date = $3, end_date = $4,
                capacity = $5, category_id = $6, venue_id = $7, status = $8
            WHERE id = $9
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .bind(dto.start_date)
        .bind(dto.end_date)
        .bind(dto.capacity)
        .bind(dto.category_id)
        .bind(dto.venue_id)
        .bind(&dto.status)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update event {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Event updated: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete event {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Event deleted: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::categories::{dtos::CategoryFormDto, CategoryService};
    use crate::features::venues::{dtos::VenueFormDto, VenueService};
    use chrono::NaiveDate;

    struct Fixture {
        events: EventService,
        categories: CategoryService,
        venues: VenueService,
        music_id: i64,
        hall_id: i64,
    }

    async fn fixture(pool: PgPool) -> Fixture {
        let categories = CategoryService::new(pool.clone());
        let venues = VenueService::new(pool.clone());
        let music_id = categories
            .create(CategoryFormDto {
                name: "Music".to_string(),
                description: String::new(),
            })
            .await
            .unwrap();
        let hall_id = venues
            .create(VenueFormDto {
                name: "Hall A".to_string(),
                address: "Main St 1".to_string(),
                city: "X".to_string(),
                capacity: 100,
                contact_phone: "555-0100".to_string(),
            })
            .await
            .unwrap();

        Fixture {
            events: EventService::new(pool, 42),
            categories,
            venues,
            music_id,
            hall_id,
        }
    }

    fn concert(fixture: &Fixture, name: &str, start_day: u32) -> EventFormDto {
        EventFormDto {
            name: name.to_string(),
            description: "Live".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, start_day).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, start_day + 1).unwrap(),
            capacity: 100,
            category_id: fixture.music_id,
            venue_id: fixture.hall_id,
            status: "active".to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_joins_names_and_orders_by_start(pool: PgPool) {
        let f = fixture(pool).await;
        f.events.create(concert(&f, "Early", 1)).await.unwrap();
        f.events.create(concert(&f, "Late", 20)).await.unwrap();

        let rows = f.events.list().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Late");
        assert_eq!(rows[1].name, "Early");
        assert!(rows
            .iter()
            .all(|r| r.category_name == "Music" && r.venue_name == "Hall A"));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_creator_is_default_actor(pool: PgPool) {
        let f = fixture(pool).await;
        let id = f.events.create(concert(&f, "Concert", 1)).await.unwrap();

        let stored = f.events.find(id).await.unwrap().unwrap();
        assert_eq!(stored.creator_id, 42);

        f.events
            .update(id, concert(&f, "Concert II", 5))
            .await
            .unwrap();
        let stored = f.events.find(id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Concert II");
        assert_eq!(stored.start_date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(stored.creator_id, 42);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_orphaned_events_drop_out_of_list(pool: PgPool) {
        let f = fixture(pool).await;
        let id = f.events.create(concert(&f, "Concert", 1)).await.unwrap();
        assert_eq!(f.events.list().await.unwrap().len(), 1);

        f.categories.delete(f.music_id).await.unwrap();

        assert!(f.events.list().await.unwrap().is_empty());
        // The row itself survives
        assert!(f.events.find(id).await.unwrap().is_some());
        assert_eq!(f.events.options().await.unwrap().len(), 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_deleting_venue_hides_event(pool: PgPool) {
        let f = fixture(pool).await;
        f.events.create(concert(&f, "Concert", 1)).await.unwrap();

        f.venues.delete(f.hall_id).await.unwrap();

        assert!(f.events.list().await.unwrap().is_empty());
    }
}
