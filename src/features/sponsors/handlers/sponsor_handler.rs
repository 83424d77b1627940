use std::sync::Arc;

use axum::{extract::State, response::Response, Json};
use minijinja::context;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppForm, RecordId};
use crate::features::sponsors::dtos::{SponsorFormDto, SponsorResponseDto};
use crate::features::sponsors::services::SponsorService;
use crate::shared::flash::{redirect_with_flash, Flash, IncomingFlash};
use crate::shared::templates::render_page;
use crate::shared::types::ApiResponse;

pub const LIST_PATH: &str = "/sponsorlar";

pub async fn list_page(
    State(service): State<Arc<SponsorService>>,
    flash: IncomingFlash,
) -> Result<Response> {
    let sponsors = service.list().await?;
    Ok(render_page(
        "sponsors/list.html",
        context! { sponsors => sponsors },
        flash,
    )?)
}

pub async fn new_form() -> Result<Response> {
    Ok(render_page(
        "sponsors/form.html",
        context! {
            title => "Sponsor Ekle",
            action => "/sponsor_ekle",
            record => None::<SponsorResponseDto>,
        },
        IncomingFlash::default(),
    )?)
}

pub async fn create(
    State(service): State<Arc<SponsorService>>,
    AppForm(dto): AppForm<SponsorFormDto>,
) -> Result<Response> {
    service.create(dto).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Sponsor başarıyla eklendi!"),
    ))
}

pub async fn edit_form(
    State(service): State<Arc<SponsorService>>,
    RecordId(id): RecordId,
) -> Result<Response> {
    let sponsor = service.find(id).await?;
    Ok(render_page(
        "sponsors/form.html",
        context! {
            title => "Sponsor Güncelle",
            action => format!("/sponsor_guncelle/{}", id),
            record => sponsor,
        },
        IncomingFlash::default(),
    )?)
}

pub async fn update(
    State(service): State<Arc<SponsorService>>,
    RecordId(id): RecordId,
    AppForm(dto): AppForm<SponsorFormDto>,
) -> Result<Response> {
    service.update(id, dto).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Sponsor başarıyla güncellendi!"),
    ))
}

pub async fn delete(
    State(service): State<Arc<SponsorService>>,
    RecordId(id): RecordId,
) -> Result<Response> {
    service.delete(id).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Sponsor başarıyla silindi!"),
    ))
}

/// List all sponsors
#[utoipa::path(
    get,
    path = "/api/sponsors",
    responses(
        (status = 200, description = "List of sponsors", body = ApiResponse<Vec<SponsorResponseDto>>),
    ),
    tag = "sponsors"
)]
pub async fn list_sponsors(
    State(service): State<Arc<SponsorService>>,
) -> Result<Json<ApiResponse<Vec<SponsorResponseDto>>>> {
    let sponsors = service.list().await?;
    Ok(Json(ApiResponse::list(sponsors)))
}

/// Get sponsor by id
#[utoipa::path(
    get,
    path = "/api/sponsors/{id}",
    params(
        ("id" = i64, Path, description = "Sponsor id")
    ),
    responses(
        (status = 200, description = "Sponsor found", body = ApiResponse<SponsorResponseDto>),
        (status = 404, description = "Sponsor not found")
    ),
    tag = "sponsors"
)]
pub async fn get_sponsor(
    State(service): State<Arc<SponsorService>>,
    RecordId(id): RecordId,
) -> Result<Json<ApiResponse<SponsorResponseDto>>> {
    let sponsor = service
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Sponsor {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(sponsor), None, None)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sqlx::PgPool;

    use crate::shared::test_helpers::location;
    use crate::shared::test_helpers::test_server;

    #[sqlx::test(migrations = "./migrations")]
    async fn test_sponsor_pages(pool: PgPool) {
        let server = test_server(pool);

        server.get("/sponsor_ekle").await.assert_status_ok();

        let created = server
            .post("/sponsor_ekle")
            .form(&[
                ("name", "Mavi Holding"),
                ("contact_email", "info@mavi.example"),
                ("contact_phone", "555-0102"),
                ("website", "https://mavi.example"),
                ("sector", "Finans"),
                ("description", "Ana sponsor"),
            ])
            .await;
        created.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&created), "/sponsorlar");

        let html = server.get("/sponsorlar").await.text();
        assert!(html.contains("Mavi Holding"));
        assert!(html.contains("Finans"));

        let api: serde_json::Value = server.get("/api/sponsors").await.json();
        let id = api["data"][0]["id"].as_i64().unwrap();

        server
            .get(&format!("/sponsor_guncelle/{}", id))
            .await
            .assert_status_ok();
        server
            .get(&format!("/sponsor_sil/{}", id))
            .await
            .assert_status(StatusCode::SEE_OTHER);
        server
            .get(&format!("/sponsor_sil/{}", id))
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let api: serde_json::Value = server.get("/api/sponsors").await.json();
        assert_eq!(api["meta"]["total"], 0);
    }
}
