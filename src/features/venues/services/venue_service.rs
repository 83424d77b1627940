use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::venues::dtos::{VenueFormDto, VenueOptionDto, VenueResponseDto};
use crate::features::venues::models::Venue;

/// Service for venue operations
pub struct VenueService {
    pool: PgPool,
}

impl VenueService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all venues grouped by city
    pub async fn list(&self) -> Result<Vec<VenueResponseDto>> {
        let venues = sqlx::query_as::<_, Venue>(
            r#"
            SELECT id, name, address, city, capacity, contact_phone
            FROM venues
            ORDER BY city, name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list venues: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(venues.into_iter().map(|v| v.into()).collect())
    }

    pub async fn options(&self) -> Result<Vec<VenueOptionDto>> {
        sqlx::query_as::<_, VenueOptionDto>(
            "SELECT id, name, city FROM venues ORDER BY city, name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list venue options: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn find(&self, id: i64) -> Result<Option<VenueResponseDto>> {
        let venue = sqlx::query_as::<_, Venue>(
            r#"
            SELECT id, name, address, city, capacity, contact_phone
            FROM venues
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get venue {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(venue.map(|v| v.into()))
    }

    pub async fn create(&self, dto: VenueFormDto) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO venues (name, address, city, capacity, contact_phone)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.address)
        .bind(&dto.city)
        .bind(dto.capacity)
        .bind(&dto.contact_phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert venue: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Venue created: id={}, city={}", id, dto.city);
        Ok(id)
    }

    pub async fn update(&self, id: i64, dto: VenueFormDto) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE venues
            SET name = $1, address = $2, city = $3, capacity = $4, contact_phone = $5
            WHERE id = $6
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.address)
        .bind(&dto.city)
        .bind(dto.capacity)
        .bind(&dto.contact_phone)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update venue {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Venue updated: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete venue {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Venue deleted: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(name: &str, city: &str) -> VenueFormDto {
        VenueFormDto {
            name: name.to_string(),
            address: "Main St 1".to_string(),
            city: city.to_string(),
            capacity: 100,
            contact_phone: "555-0100".to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_orders_by_city_then_name(pool: PgPool) {
        let service = VenueService::new(pool);
        service.create(venue("Hall B", "Izmir")).await.unwrap();
        service.create(venue("Hall A", "Izmir")).await.unwrap();
        service.create(venue("Arena", "Ankara")).await.unwrap();

        let order: Vec<(String, String)> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|v| (v.city, v.name))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Ankara".to_string(), "Arena".to_string()),
                ("Izmir".to_string(), "Hall A".to_string()),
                ("Izmir".to_string(), "Hall B".to_string()),
            ]
        );

        let options = service.options().await.unwrap();
        assert_eq!(options[0].name, "Arena");
        assert_eq!(options[0].city, "Ankara");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_replaces_every_field(pool: PgPool) {
        let service = VenueService::new(pool);
        let id = service.create(venue("Hall A", "X")).await.unwrap();

        let replacement = VenueFormDto {
            name: "Hall Z".to_string(),
            address: "Side St 9".to_string(),
            city: "Y".to_string(),
            capacity: 250,
            contact_phone: "555-0199".to_string(),
        };
        service.update(id, replacement).await.unwrap();

        let stored = service.find(id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Hall Z");
        assert_eq!(stored.address, "Side St 9");
        assert_eq!(stored.city, "Y");
        assert_eq!(stored.capacity, 250);
        assert_eq!(stored.contact_phone, "555-0199");
    }
}
