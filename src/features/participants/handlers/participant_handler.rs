use std::sync::Arc;

use axum::{extract::State, response::Response, Json};
use minijinja::context;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppForm, RecordId};
use crate::features::participants::dtos::{ParticipantFormDto, ParticipantResponseDto};
use crate::features::participants::services::ParticipantService;
use crate::shared::flash::{redirect_with_flash, Flash, IncomingFlash};
use crate::shared::templates::render_page;
use crate::shared::types::ApiResponse;

pub const LIST_PATH: &str = "/katilimcilar";

pub async fn list_page(
    State(service): State<Arc<ParticipantService>>,
    flash: IncomingFlash,
) -> Result<Response> {
    let participants = service.list().await?;
    Ok(render_page(
        "participants/list.html",
        context! { participants => participants },
        flash,
    )?)
}

pub async fn new_form() -> Result<Response> {
    Ok(render_page(
        "participants/form.html",
        context! {
            title => "Katılımcı Ekle",
            action => "/katilimci_ekle",
            record => None::<ParticipantResponseDto>,
        },
        IncomingFlash::default(),
    )?)
}

pub async fn create(
    State(service): State<Arc<ParticipantService>>,
    AppForm(dto): AppForm<ParticipantFormDto>,
) -> Result<Response> {
    service.create(dto).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Katılımcı başarıyla eklendi!"),
    ))
}

pub async fn edit_form(
    State(service): State<Arc<ParticipantService>>,
    RecordId(id): RecordId,
) -> Result<Response> {
    let participant = service.find(id).await?;
    Ok(render_page(
        "participants/form.html",
        context! {
            title => "Katılımcı Güncelle",
            action => format!("/katilimci_guncelle/{}", id),
            record => participant,
        },
        IncomingFlash::default(),
    )?)
}

pub async fn update(
    State(service): State<Arc<ParticipantService>>,
    RecordId(id): RecordId,
    AppForm(dto): AppForm<ParticipantFormDto>,
) -> Result<Response> {
    service.update(id, dto).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Katılımcı başarıyla güncellendi!"),
    ))
}

pub async fn delete(
    State(service): State<Arc<ParticipantService>>,
    RecordId(id): RecordId,
) -> Result<Response> {
    service.delete(id).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Katılımcı başarıyla silindi!"),
    ))
}

/// List all participants
#[utoipa::path(
    get,
    path = "/api/participants",
    responses(
        (status = 200, description = "List of participants", body = ApiResponse<Vec<ParticipantResponseDto>>),
    ),
    tag = "participants"
)]
pub async fn list_participants(
    State(service): State<Arc<ParticipantService>>,
) -> Result<Json<ApiResponse<Vec<ParticipantResponseDto>>>> {
    let participants = service.list().await?;
    Ok(Json(ApiResponse::list(participants)))
}

/// Get participant by id
#[utoipa::path(
    get,
    path = "/api/participants/{id}",
    params(
        ("id" = i64, Path, description = "Participant id")
    ),
    responses(
        (status = 200, description = "Participant found", body = ApiResponse<ParticipantResponseDto>),
        (status = 404, description = "Participant not found")
    ),
    tag = "participants"
)]
pub async fn get_participant(
    State(service): State<Arc<ParticipantService>>,
    RecordId(id): RecordId,
) -> Result<Json<ApiResponse<ParticipantResponseDto>>> {
    let participant = service
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Participant {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(participant), None, None)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sqlx::PgPool;

    use crate::shared::test_helpers::{location, test_server};

    fn form(full_name: &'static str, birth_date: &'static str) -> [(&'static str, &'static str); 6] {
        [
            ("full_name", full_name),
            ("email", "ayse@example.com"),
            ("phone", "555-0101"),
            ("birth_date", birth_date),
            ("gender", "Kadın"),
            ("city", "İstanbul"),
        ]
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_participant_pages(pool: PgPool) {
        let server = test_server(pool);

        server.get("/katilimci_ekle").await.assert_status_ok();

        let created = server
            .post("/katilimci_ekle")
            .form(&form("Ayşe Yılmaz", "1992-03-14"))
            .await;
        created.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&created), "/katilimcilar");

        let html = server.get("/katilimcilar").await.text();
        assert!(html.contains("Ayşe Yılmaz"));
        assert!(html.contains("1992-03-14"));

        let api: serde_json::Value = server.get("/api/participants").await.json();
        let id = api["data"][0]["id"].as_i64().unwrap();

        let edit = server.get(&format!("/katilimci_guncelle/{}", id)).await;
        edit.assert_status_ok();
        assert!(edit.text().contains("ayse@example.com"));

        server
            .post(&format!("/katilimci_guncelle/{}", id))
            .form(&form("Ayşe Demir", "1992-03-15"))
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let api: serde_json::Value = server
            .get(&format!("/api/participants/{}", id))
            .await
            .json();
        assert_eq!(api["data"]["full_name"], "Ayşe Demir");
        assert_eq!(api["data"]["birth_date"], "1992-03-15");

        server
            .get(&format!("/katilimci_sil/{}", id))
            .await
            .assert_status(StatusCode::SEE_OTHER);
        server
            .get(&format!("/api/participants/{}", id))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_malformed_birth_date_is_rejected(pool: PgPool) {
        let server = test_server(pool);

        server
            .post("/katilimci_ekle")
            .form(&form("Ayşe Yılmaz", "14.03.1992"))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
