use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{CategoryFormDto, CategoryOptionDto, CategoryResponseDto};
use crate::features::categories::models::Category;

/// Service for category operations
pub struct CategoryService {
    pool: PgPool,
}

impl CategoryService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by name
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, description
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list categories: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Id + name of every category, for the event form
    pub async fn options(&self) -> Result<Vec<CategoryOptionDto>> {
        sqlx::query_as::<_, CategoryOptionDto>("SELECT id, name FROM categories ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list category options: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn find(&self, id: i64) -> Result<Option<CategoryResponseDto>> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, name, description FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get category {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(category.map(|c| c.into()))
    }

    /// Insert a category, returning its generated id
    pub async fn create(&self, dto: CategoryFormDto) -> Result<i64> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO categories (name, description)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&dto.name)
        .bind(&dto.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert category: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Category created: id={}, name={}", id, dto.name);
        Ok(id)
    }

    /// Replace every editable column. A missing id is a no-op.
    pub async fn update(&self, id: i64, dto: CategoryFormDto) -> Result<()> {
        let result = sqlx::query("UPDATE categories SET name = $1, description = $2 WHERE id = $3")
            .bind(&dto.name)
            .bind(&dto.description)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update category {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Category updated: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(())
    }

    /// Remove the row if present. Events pointing at it are left untouched.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete category {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Category deleted: id={}, rows_affected={}",
            id,
            result.rows_affected()
        );
        Ok(())
    }
}
