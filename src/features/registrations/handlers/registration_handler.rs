use std::sync::Arc;

use axum::{extract::State, response::Response, Json};
use minijinja::context;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppForm, RecordId};
use crate::features::events::EventService;
use crate::features::participants::ParticipantService;
use crate::features::registrations::dtos::{
    CreateRegistrationDto, RegistrationListItemDto, RegistrationResponseDto,
    UpdateRegistrationDto,
};
use crate::features::registrations::services::RegistrationService;
use crate::shared::flash::{redirect_with_flash, Flash, IncomingFlash};
use crate::shared::templates::render_page;
use crate::shared::types::ApiResponse;

pub const LIST_PATH: &str = "/kayitlar";

#[derive(Clone)]
pub struct RegistrationState {
    pub registration_service: Arc<RegistrationService>,
    pub event_service: Arc<EventService>,
    pub participant_service: Arc<ParticipantService>,
}

async fn render_form(
    state: &RegistrationState,
    title: &str,
    action: String,
    record: Option<RegistrationResponseDto>,
    editing: bool,
) -> Result<Response> {
    let events = state.event_service.options().await?;
    let participants = state.participant_service.options().await?;
    Ok(render_page(
        "registrations/form.html",
        context! {
            title => title,
            action => action,
            editing => editing,
            record => record,
            events => events,
            participants => participants,
        },
        IncomingFlash::default(),
    )?)
}

pub async fn list_page(
    State(state): State<RegistrationState>,
    flash: IncomingFlash,
) -> Result<Response> {
    let registrations = state.registration_service.list().await?;
    Ok(render_page(
        "registrations/list.html",
        context! { registrations => registrations },
        flash,
    )?)
}

pub async fn new_form(State(state): State<RegistrationState>) -> Result<Response> {
    render_form(&state, "Kayıt Ekle", "/kayit_ekle".to_string(), None, false).await
}

pub async fn create(
    State(state): State<RegistrationState>,
    AppForm(dto): AppForm<CreateRegistrationDto>,
) -> Result<Response> {
    state.registration_service.create(dto).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Kayıt başarıyla eklendi!"),
    ))
}

pub async fn edit_form(
    State(state): State<RegistrationState>,
    RecordId(id): RecordId,
) -> Result<Response> {
    let registration = state.registration_service.find(id).await?;
    render_form(
        &state,
        "Kayıt Güncelle",
        format!("/kayit_guncelle/{}", id),
        registration,
        true,
    )
    .await
}

pub async fn update(
    State(state): State<RegistrationState>,
    RecordId(id): RecordId,
    AppForm(dto): AppForm<UpdateRegistrationDto>,
) -> Result<Response> {
    state.registration_service.update(id, dto).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Kayıt başarıyla güncellendi!"),
    ))
}

pub async fn delete(
    State(state): State<RegistrationState>,
    RecordId(id): RecordId,
) -> Result<Response> {
    state.registration_service.delete(id).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Kayıt başarıyla silindi!"),
    ))
}

/// List registrations with event and participant names
#[utoipa::path(
    get,
    path = "/api/registrations",
    responses(
        (status = 200, description = "List of registrations", body = ApiResponse<Vec<RegistrationListItemDto>>),
    ),
    tag = "registrations"
)]
pub async fn list_registrations(
    State(state): State<RegistrationState>,
) -> Result<Json<ApiResponse<Vec<RegistrationListItemDto>>>> {
    let registrations = state.registration_service.list().await?;
    Ok(Json(ApiResponse::list(registrations)))
}

/// Get registration by id
#[utoipa::path(
    get,
    path = "/api/registrations/{id}",
    params(
        ("id" = i64, Path, description = "Registration id")
    ),
    responses(
        (status = 200, description = "Registration found", body = ApiResponse<RegistrationResponseDto>),
        (status = 404, description = "Registration not found")
    ),
    tag = "registrations"
)]
pub async fn get_registration(
    State(state): State<RegistrationState>,
    RecordId(id): RecordId,
) -> Result<Json<ApiResponse<RegistrationResponseDto>>> {
    let registration = state
        .registration_service
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Registration {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(registration), None, None)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use sqlx::PgPool;

    use crate::shared::test_helpers::{location, test_server};

    #[sqlx::test(migrations = "./migrations")]
    async fn test_registration_pages(pool: PgPool) {
        let event_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO events (name, description, start_date, end_date, capacity,
                                category_id, venue_id, creator_id, status)
            VALUES ('Concert', '', '2024-01-01', '2024-01-02', 100, 1, 1, 1, 'Aktif')
            RETURNING id
            "#,
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        let server = test_server(pool);
        server
            .post("/katilimci_ekle")
            .form(&[
                ("full_name", "Ayşe Yılmaz"),
                ("email", "ayse@example.com"),
                ("phone", "555-0101"),
                ("birth_date", "1992-03-14"),
                ("gender", "Kadın"),
                ("city", "İstanbul"),
            ])
            .await
            .assert_status(StatusCode::SEE_OTHER);
        let participants: serde_json::Value = server.get("/api/participants").await.json();
        let participant_id = participants["data"][0]["id"].as_i64().unwrap().to_string();
        let event_id = event_id.to_string();

        let form = server.get("/kayit_ekle").await;
        form.assert_status_ok();
        assert!(form.text().contains("Concert"));
        assert!(form.text().contains("Ayşe Yılmaz"));

        let created = server
            .post("/kayit_ekle")
            .form(&[
                ("event_id", event_id.as_str()),
                ("participant_id", participant_id.as_str()),
                ("status", "Onaylandı"),
            ])
            .await;
        created.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&created), "/kayitlar");

        let html = server.get("/kayitlar").await.text();
        assert!(html.contains("Concert"));
        assert!(html.contains("Ayşe Yılmaz"));
        assert!(html.contains("Bekleniyor"));

        let api: serde_json::Value = server.get("/api/registrations").await.json();
        let id = api["data"][0]["id"].as_i64().unwrap();

        server
            .get(&format!("/kayit_guncelle/{}", id))
            .await
            .assert_status_ok();
        server
            .post(&format!("/kayit_guncelle/{}", id))
            .form(&[
                ("event_id", event_id.as_str()),
                ("participant_id", participant_id.as_str()),
                ("status", "Onaylandı"),
                ("attendance_status", "Katıldı"),
            ])
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let detail: serde_json::Value = server
            .get(&format!("/api/registrations/{}", id))
            .await
            .json();
        assert_eq!(detail["data"]["attendance_status"], "Katıldı");

        server
            .get(&format!("/kayit_sil/{}", id))
            .await
            .assert_status(StatusCode::SEE_OTHER);
        let api: serde_json::Value = server.get("/api/registrations").await.json();
        assert_eq!(api["meta"]["total"], 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_missing_status_is_rejected(pool: PgPool) {
        let server = test_server(pool);

        server
            .post("/kayit_ekle")
            .form(&[("event_id", "1"), ("participant_id", "1")])
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
