use std::sync::Arc;

use axum::{extract::State, response::Response, Json};
use minijinja::context;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppForm, RecordId};
use crate::features::categories::CategoryService;
use crate::features::events::dtos::{EventFormDto, EventListItemDto, EventResponseDto};
use crate::features::events::services::EventService;
use crate::features::venues::VenueService;
use crate::shared::flash::{redirect_with_flash, Flash, IncomingFlash};
use crate::shared::templates::render_page;
use crate::shared::types::ApiResponse;

pub const LIST_PATH: &str = "/etkinlikler";

/// The event form offers category and venue dropdowns, so the handlers need
/// those services alongside their own.
#[derive(Clone)]
pub struct EventState {
    pub event_service: Arc<EventService>,
    pub category_service: Arc<CategoryService>,
    pub venue_service: Arc<VenueService>,
}

async fn render_form(
    state: &EventState,
    title: &str,
    action: String,
    record: Option<EventResponseDto>,
) -> Result<Response> {
    let categories = state.category_service.options().await?;
    let venues = state.venue_service.options().await?;
    Ok(render_page(
        "events/form.html",
        context! {
            title => title,
            action => action,
            record => record,
            categories => categories,
            venues => venues,
        },
        IncomingFlash::default(),
    )?)
}

pub async fn list_page(State(state): State<EventState>, flash: IncomingFlash) -> Result<Response> {
    let events = state.event_service.list().await?;
    Ok(render_page(
        "events/list.html",
        context! { events => events },
        flash,
    )?)
}

pub async fn new_form(State(state): State<EventState>) -> Result<Response> {
    render_form(&state, "Etkinlik Ekle", "/etkinlik_ekle".to_string(), None).await
}

pub async fn create(
    State(state): State<EventState>,
    AppForm(dto): AppForm<EventFormDto>,
) -> Result<Response> {
    state.event_service.create(dto).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Etkinlik başarıyla eklendi!"),
    ))
}

pub async fn edit_form(State(state): State<EventState>, RecordId(id): RecordId) -> Result<Response> {
    let event = state.event_service.find(id).await?;
    render_form(
        &state,
        "Etkinlik Güncelle",
        format!("/etkinlik_guncelle/{}", id),
        event,
    )
    .await
}

pub async fn update(
    State(state): State<EventState>,
    RecordId(id): RecordId,
    AppForm(dto): AppForm<EventFormDto>,
) -> Result<Response> {
    state.event_service.update(id, dto).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Etkinlik başarıyla güncellendi!"),
    ))
}

pub async fn delete(State(state): State<EventState>, RecordId(id): RecordId) -> Result<Response> {
    state.event_service.delete(id).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Etkinlik başarıyla silindi!"),
    ))
}

/// List events with category and venue names
#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List of events", body = ApiResponse<Vec<EventListItemDto>>),
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<EventState>,
) -> Result<Json<ApiResponse<Vec<EventListItemDto>>>> {
    let events = state.event_service.list().await?;
    Ok(Json(ApiResponse::list(events)))
}

/// Get event by id
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = i64, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event found", body = ApiResponse<EventResponseDto>),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<EventState>,
    RecordId(id): RecordId,
) -> Result<Json<ApiResponse<EventResponseDto>>> {
    let event = state
        .event_service
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(event), None, None)))
}
