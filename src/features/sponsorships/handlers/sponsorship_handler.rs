use std::sync::Arc;

use axum::{extract::State, response::Response, Json};
use minijinja::context;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppForm, RecordId};
use crate::features::events::EventService;
use crate::features::sponsors::SponsorService;
use crate::features::sponsorships::dtos::{
    CreateSponsorshipDto, SponsoredEventDto, SponsorshipListItemDto, SponsorshipResponseDto,
    UpdateSponsorshipDto,
};
use crate::features::sponsorships::services::SponsorshipService;
use crate::shared::flash::{redirect_with_flash, Flash, IncomingFlash};
use crate::shared::templates::render_page;
use crate::shared::types::ApiResponse;

pub const LIST_PATH: &str = "/etkinlik_sponsorlar";

#[derive(Clone)]
pub struct SponsorshipState {
    pub sponsorship_service: Arc<SponsorshipService>,
    pub event_service: Arc<EventService>,
    pub sponsor_service: Arc<SponsorService>,
}

async fn render_form(
    state: &SponsorshipState,
    title: &str,
    action: String,
    record: Option<SponsorshipResponseDto>,
    editing: bool,
) -> Result<Response> {
    let events = state.event_service.options().await?;
    let sponsors = state.sponsor_service.options().await?;
    Ok(render_page(
        "sponsorships/form.html",
        context! {
            title => title,
            action => action,
            editing => editing,
            record => record,
            events => events,
            sponsors => sponsors,
        },
        IncomingFlash::default(),
    )?)
}

pub async fn list_page(
    State(state): State<SponsorshipState>,
    flash: IncomingFlash,
) -> Result<Response> {
    let sponsorships = state.sponsorship_service.list().await?;
    Ok(render_page(
        "sponsorships/list.html",
        context! { sponsorships => sponsorships },
        flash,
    )?)
}

pub async fn new_form(State(state): State<SponsorshipState>) -> Result<Response> {
    render_form(
        &state,
        "Etkinlik Sponsoru Ekle",
        "/etkinlik_sponsor_ekle".to_string(),
        None,
        false,
    )
    .await
}

pub async fn create(
    State(state): State<SponsorshipState>,
    AppForm(dto): AppForm<CreateSponsorshipDto>,
) -> Result<Response> {
    state.sponsorship_service.create(dto).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Etkinlik sponsoru başarıyla eklendi!"),
    ))
}

pub async fn edit_form(
    State(state): State<SponsorshipState>,
    RecordId(id): RecordId,
) -> Result<Response> {
    let sponsorship = state.sponsorship_service.find(id).await?;
    render_form(
        &state,
        "Etkinlik Sponsoru Güncelle",
        format!("/etkinlik_sponsor_guncelle/{}", id),
        sponsorship,
        true,
    )
    .await
}

pub async fn update(
    State(state): State<SponsorshipState>,
    RecordId(id): RecordId,
    AppForm(dto): AppForm<UpdateSponsorshipDto>,
) -> Result<Response> {
    state.sponsorship_service.update(id, dto).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Etkinlik sponsoru başarıyla güncellendi!"),
    ))
}

pub async fn delete(
    State(state): State<SponsorshipState>,
    RecordId(id): RecordId,
) -> Result<Response> {
    state.sponsorship_service.delete(id).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Etkinlik sponsoru başarıyla silindi!"),
    ))
}

/// List all event-sponsor links
#[utoipa::path(
    get,
    path = "/api/sponsorships",
    responses(
        (status = 200, description = "List of sponsorships", body = ApiResponse<Vec<SponsorshipListItemDto>>),
    ),
    tag = "sponsorships"
)]
pub async fn list_sponsorships(
    State(state): State<SponsorshipState>,
) -> Result<Json<ApiResponse<Vec<SponsorshipListItemDto>>>> {
    let sponsorships = state.sponsorship_service.list().await?;
    Ok(Json(ApiResponse::list(sponsorships)))
}

/// Get sponsorship by id
#[utoipa::path(
    get,
    path = "/api/sponsorships/{id}",
    params(
        ("id" = i64, Path, description = "Sponsorship id")
    ),
    responses(
        (status = 200, description = "Sponsorship found", body = ApiResponse<SponsorshipResponseDto>),
        (status = 404, description = "Sponsorship not found")
    ),
    tag = "sponsorships"
)]
pub async fn get_sponsorship(
    State(state): State<SponsorshipState>,
    RecordId(id): RecordId,
) -> Result<Json<ApiResponse<SponsorshipResponseDto>>> {
    let sponsorship = state
        .sponsorship_service
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Sponsorship {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(sponsorship), None, None)))
}

/// List the sponsors of one event
#[utoipa::path(
    get,
    path = "/api/events/{id}/sponsorships",
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Sponsors of the event", body = ApiResponse<Vec<SponsorshipListItemDto>>),
        (status = 404, description = "Event not found")
    ),
    tag = "sponsorships"
)]
pub async fn list_event_sponsorships(
    State(state): State<SponsorshipState>,
    RecordId(event_id): RecordId,
) -> Result<Json<ApiResponse<Vec<SponsorshipListItemDto>>>> {
    state
        .event_service
        .find(event_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;
    let sponsorships = state.sponsorship_service.list_for_event(event_id).await?;
    Ok(Json(ApiResponse::list(sponsorships)))
}

/// List the events one sponsor supports
#[utoipa::path(
    get,
    path = "/api/sponsors/{id}/sponsorships",
    params(
        ("id" = i64, Path, description = "Sponsor id")
    ),
    responses(
        (status = 200, description = "Events supported by the sponsor", body = ApiResponse<Vec<SponsoredEventDto>>),
        (status = 404, description = "Sponsor not found")
    ),
    tag = "sponsorships"
)]
pub async fn list_sponsor_sponsorships(
    State(state): State<SponsorshipState>,
    RecordId(sponsor_id): RecordId,
) -> Result<Json<ApiResponse<Vec<SponsoredEventDto>>>> {
    state
        .sponsor_service
        .find(sponsor_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Sponsor {} not found", sponsor_id)))?;
    let events = state.sponsorship_service.list_for_sponsor(sponsor_id).await?;
    Ok(Json(ApiResponse::list(events)))
}

#[cfg(test)]
mod tests {
    use axum::http::{header, StatusCode};
    use sqlx::PgPool;

    use crate::shared::test_helpers::{flash_cookie, location, test_server};

    async fn seed(pool: &PgPool) -> (String, String) {
        let event_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO events (name, description, start_date, end_date, capacity,
                                category_id, venue_id, creator_id, status)
            VALUES ('Concert', '', '2024-01-01', '2024-01-02', 100, 1, 1, 1, 'Aktif')
            RETURNING id
            "#,
        )
        .fetch_one(pool)
        .await
        .unwrap();
        let sponsor_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO sponsors (name, contact_email, contact_phone, website, sector, description)
            VALUES ('Mavi Holding', '', '', '', 'Finans', '')
            RETURNING id
            "#,
        )
        .fetch_one(pool)
        .await
        .unwrap();
        (event_id.to_string(), sponsor_id.to_string())
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_sponsorship_pages(pool: PgPool) {
        let (event_id, sponsor_id) = seed(&pool).await;
        let server = test_server(pool);

        let form = server.get("/etkinlik_sponsor_ekle").await;
        form.assert_status_ok();
        assert!(form.text().contains("Mavi Holding"));

        let created = server
            .post("/etkinlik_sponsor_ekle")
            .form(&[
                ("event_id", event_id.as_str()),
                ("sponsor_id", sponsor_id.as_str()),
                ("contribution_amount", ""),
                ("contribution_kind", ""),
            ])
            .await;
        created.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(location(&created), "/etkinlik_sponsorlar");

        let html = server
            .get("/etkinlik_sponsorlar")
            .add_header(header::COOKIE, flash_cookie(&created))
            .await
            .text();
        assert!(html.contains("Concert"));
        assert!(html.contains("Mavi Holding"));
        assert!(html.contains("Maddi"));
        assert!(html.contains("Etkinlik sponsoru başarıyla eklendi!"));

        let api: serde_json::Value = server.get("/api/sponsorships").await.json();
        let id = api["data"][0]["id"].as_i64().unwrap();

        server
            .get(&format!("/etkinlik_sponsor_guncelle/{}", id))
            .await
            .assert_status_ok();
        server
            .post(&format!("/etkinlik_sponsor_guncelle/{}", id))
            .form(&[
                ("contribution_amount", "1500.75"),
                ("contribution_kind", "Ayni"),
            ])
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let by_event: serde_json::Value = server
            .get(&format!("/api/events/{}/sponsorships", event_id))
            .await
            .json();
        assert_eq!(by_event["meta"]["total"], 1);
        assert_eq!(by_event["data"][0]["contribution_kind"], "Ayni");
        assert_eq!(by_event["data"][0]["contribution_amount"], "1500.75");

        server
            .get(&format!("/etkinlik_sponsor_sil/{}", id))
            .await
            .assert_status(StatusCode::SEE_OTHER);
        let api: serde_json::Value = server.get("/api/sponsorships").await.json();
        assert_eq!(api["meta"]["total"], 0);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_sponsorships_of_unknown_event(pool: PgPool) {
        let server = test_server(pool);

        server
            .get("/api/events/999/sponsorships")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_unparsable_amount_is_rejected(pool: PgPool) {
        let (event_id, sponsor_id) = seed(&pool).await;
        let server = test_server(pool);

        server
            .post("/etkinlik_sponsor_ekle")
            .form(&[
                ("event_id", event_id.as_str()),
                ("sponsor_id", sponsor_id.as_str()),
                ("contribution_amount", "bin lira"),
            ])
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_events_of_a_sponsor(pool: PgPool) {
        let (event_id, sponsor_id) = seed(&pool).await;
        let server = test_server(pool);

        let empty: serde_json::Value = server
            .get(&format!("/api/sponsors/{}/sponsorships", sponsor_id))
            .await
            .json();
        assert_eq!(empty["meta"]["total"], 0);

        server
            .post("/etkinlik_sponsor_ekle")
            .form(&[
                ("event_id", event_id.as_str()),
                ("sponsor_id", sponsor_id.as_str()),
                ("contribution_amount", "2500"),
                ("contribution_kind", "  Ayni  "),
            ])
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let events: serde_json::Value = server
            .get(&format!("/api/sponsors/{}/sponsorships", sponsor_id))
            .await
            .json();
        assert_eq!(events["meta"]["total"], 1);
        assert_eq!(events["data"][0]["event_name"], "Concert");
        assert_eq!(events["data"][0]["start_date"], "2024-01-01");
        assert_eq!(events["data"][0]["status"], "Aktif");
        assert_eq!(events["data"][0]["contribution_amount"], "2500.00");
        assert_eq!(events["data"][0]["contribution_kind"], "  Ayni  ");

        server
            .get("/api/sponsors/999/sponsorships")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
