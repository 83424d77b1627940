use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::sponsors::dtos::{SponsorFormDto, SponsorOptionDto, SponsorResponseDto};
use crate::features::sponsors::models::Sponsor;

/// Service for sponsor operations
pub struct SponsorService {
    pool: PgPool,
}

impl SponsorService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<SponsorResponseDto>> {
        let sponsors = sqlx::query_as::<_, Sponsor>(
            r#"
            SELECT id, name, contact_email, contact_phone, website, sector, description
            FROM sponsors
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list sponsors: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(sponsors.into_iter().map(|s| s.into()).collect())
    }

    pub async fn options(&self) -> Result<Vec<SponsorOptionDto>> {
        sqlx::query_as::<_, SponsorOptionDto>("SELECT id, name FROM sponsors ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list sponsor options: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn find(&self, id: i64) -> Result<Option<SponsorResponseDto>> {
        let sponsor = sqlx::query_as::<_, Sponsor>(
            r#"
            SELECT id, name, contact_email, contact_phone, website, sector, description
            FROM sponsors
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get sponsor {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(sponsor.map(|s| s.into()))
    }

    pub async fn create(&self, dto: SponsorFormDto) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO sponsors (name, contact_email, contact_phone, website, sector, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.contact_email)
        .bind(&dto.contact_phone)
        .bind(&dto.website)
        .bind(&dto.sector)
        .bind(&dto.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert sponsor: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Sponsor created: id={}, sector={}", id, dto.sector);
        Ok(id)
    }

    pub async fn update(&self, id: i64, dto: SponsorFormDto) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE sponsors
            SET name = $1, contact_email = $2, contact_phone = $3,
                website = $4, sector = $5, description = $6
            WHERE id = $7
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.contact_email)
        .bind(&dto.contact_phone)
        .bind(&dto.website)
        .bind(&dto.sector)
        .bind(&dto.description)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update sponsor {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Sponsor updated: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(())
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM sponsors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete sponsor {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Sponsor deleted: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::company::en::{CompanyName, Industry};
    use fake::faker::internet::en::{DomainSuffix, SafeEmail};
    use fake::faker::lorem::en::Sentence;
    use fake::faker::phone_number::en::PhoneNumber;
    use fake::Fake;

    fn fake_sponsor() -> SponsorFormDto {
        let name: String = CompanyName().fake();
        let suffix: String = DomainSuffix().fake();
        SponsorFormDto {
            website: format!("https://sponsor.{}", suffix),
            name,
            contact_email: SafeEmail().fake(),
            contact_phone: PhoneNumber().fake(),
            sector: Industry().fake(),
            description: Sentence(3..8).fake(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_update_delete(pool: PgPool) {
        let service = SponsorService::new(pool);
        let dto = fake_sponsor();
        let id = service.create(dto.clone()).await.unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, dto.name);
        assert_eq!(listed[0].website, dto.website);

        let replacement = fake_sponsor();
        service.update(id, replacement.clone()).await.unwrap();
        let stored = service.find(id).await.unwrap().unwrap();
        assert_eq!(stored.name, replacement.name);
        assert_eq!(stored.contact_email, replacement.contact_email);
        assert_eq!(stored.contact_phone, replacement.contact_phone);
        assert_eq!(stored.sector, replacement.sector);
        assert_eq!(stored.description, replacement.description);

        service.delete(id).await.unwrap();
        service.delete(id).await.unwrap();
        assert!(service.list().await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_ordered_by_name(pool: PgPool) {
        let service = SponsorService::new(pool);
        for name in ["Zeta Bank", "Acme", "Mavi Holding"] {
            let mut dto = fake_sponsor();
            dto.name = name.to_string();
            service.create(dto).await.unwrap();
        }

        let names: Vec<String> = service
            .options()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Acme", "Mavi Holding", "Zeta Bank"]);
    }
}
