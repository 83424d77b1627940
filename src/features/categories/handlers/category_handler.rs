use std::sync::Arc;

use axum::{extract::State, response::Response, Json};
use minijinja::context;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppForm, RecordId};
use crate::features::categories::dtos::{CategoryFormDto, CategoryResponseDto};
use crate::features::categories::services::CategoryService;
use crate::shared::flash::{redirect_with_flash, Flash, IncomingFlash};
use crate::shared::templates::render_page;
use crate::shared::types::ApiResponse;

pub const LIST_PATH: &str = "/kategoriler";

// ============================================================================
// Pages
// ============================================================================

pub async fn list_page(
    State(service): State<Arc<CategoryService>>,
    flash: IncomingFlash,
) -> Result<Response> {
    let categories = service.list().await?;
    Ok(render_page(
        "categories/list.html",
        context! { categories => categories },
        flash,
    )?)
}

pub async fn new_form() -> Result<Response> {
    Ok(render_page(
        "categories/form.html",
        context! {
            title => "Kategori Ekle",
            action => "/kategori_ekle",
            record => None::<CategoryResponseDto>,
        },
        IncomingFlash::default(),
    )?)
}

pub async fn create(
    State(service): State<Arc<CategoryService>>,
    AppForm(dto): AppForm<CategoryFormDto>,
) -> Result<Response> {
    service.create(dto).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Kategori başarıyla eklendi!"),
    ))
}

/// Edit form; an unknown id renders an empty form
pub async fn edit_form(
    State(service): State<Arc<CategoryService>>,
    RecordId(id): RecordId,
) -> Result<Response> {
    let category = service.find(id).await?;
    Ok(render_page(
        "categories/form.html",
        context! {
            title => "Kategori Güncelle",
            action => format!("/kategori_guncelle/{}", id),
            record => category,
        },
        IncomingFlash::default(),
    )?)
}

pub async fn update(
    State(service): State<Arc<CategoryService>>,
    RecordId(id): RecordId,
    AppForm(dto): AppForm<CategoryFormDto>,
) -> Result<Response> {
    service.update(id, dto).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Kategori başarıyla güncellendi!"),
    ))
}

pub async fn delete(
    State(service): State<Arc<CategoryService>>,
    RecordId(id): RecordId,
) -> Result<Response> {
    service.delete(id).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Kategori başarıyla silindi!"),
    ))
}

// ============================================================================
// JSON API
// ============================================================================

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponseDto>>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    State(service): State<Arc<CategoryService>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponseDto>>>> {
    let categories = service.list().await?;
    Ok(Json(ApiResponse::list(categories)))
}

/// Get category by id
#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(
        ("id" = i64, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = ApiResponse<CategoryResponseDto>),
        (status = 404, description = "Category not found")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(service): State<Arc<CategoryService>>,
    RecordId(id): RecordId,
) -> Result<Json<ApiResponse<CategoryResponseDto>>> {
    let category = service
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(category), None, None)))
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};
    use sqlx::PgPool;

    use crate::shared::test_helpers::{flash_cookie, location, test_server};

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_then_list(pool: PgPool) {
        let server = test_server(pool);

        server.get("/kategori_ekle").await.assert_status_ok();

        let created = server
            .post("/kategori_ekle")
            .form(&[("name", "Music"), ("description", "Concerts")])
            .await;
        created.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&created), "/kategoriler");

        let list = server
            .get("/kategoriler")
            .add_header(header::COOKIE, flash_cookie(&created))
            .await;
        list.assert_status_ok();
        let html = list.text();
        assert!(html.contains("Music"));
        assert!(html.contains("Concerts"));
        assert!(html.contains("Kategori başarıyla eklendi!"));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_missing_field_is_rejected(pool: PgPool) {
        let server = test_server(pool.clone());

        server
            .post("/kategori_ekle")
            .form(&[("name", "Music")])
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_and_delete(pool: PgPool) {
        let server = test_server(pool.clone());
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO categories (name, description) VALUES ('Music', 'x') RETURNING id",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

        let form = server.get(&format!("/kategori_guncelle/{}", id)).await;
        form.assert_status_ok();
        assert!(form.text().contains("Music"));

        server
            .post(&format!("/kategori_guncelle/{}", id))
            .form(&[("name", "Sports"), ("description", "Matches")])
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let api: serde_json::Value = server.get(&format!("/api/categories/{}", id)).await.json();
        assert_eq!(api["data"]["name"], "Sports");
        assert_eq!(api["data"]["description"], "Matches");

        for _ in 0..2 {
            let deleted = server.get(&format!("/kategori_sil/{}", id)).await;
            deleted.assert_status(StatusCode::SEE_OTHER);
            assert_eq!(location(&deleted), "/kategoriler");
        }

        server
            .get(&format!("/api/categories/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_edit_form_for_missing_row_renders(pool: PgPool) {
        let server = test_server(pool);

        server.get("/kategori_guncelle/999").await.assert_status_ok();
        server
            .post("/kategori_guncelle/999")
            .form(&[("name", "Ghost"), ("description", "")])
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let api: serde_json::Value = server.get("/api/categories").await.json();
        assert_eq!(api["meta"]["total"], 0);
    }
}
