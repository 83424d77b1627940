use std::sync::Arc;

use axum::{extract::State, response::Response, Json};
use minijinja::context;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppForm, RecordId};
use crate::features::venues::dtos::{VenueFormDto, VenueResponseDto};
use crate::features::venues::services::VenueService;
use crate::shared::flash::{redirect_with_flash, Flash, IncomingFlash};
use crate::shared::templates::render_page;
use crate::shared::types::ApiResponse;

pub const LIST_PATH: &str = "/mekanlar";

pub async fn list_page(
    State(service): State<Arc<VenueService>>,
    flash: IncomingFlash,
) -> Result<Response> {
    let venues = service.list().await?;
    Ok(render_page(
        "venues/list.html",
        context! { venues => venues },
        flash,
    )?)
}

pub async fn new_form() -> Result<Response> {
    Ok(render_page(
        "venues/form.html",
        context! {
            title => "Mekan Ekle",
            action => "/mekan_ekle",
            record => None::<VenueResponseDto>,
        },
        IncomingFlash::default(),
    )?)
}

pub async fn create(
    State(service): State<Arc<VenueService>>,
    AppForm(dto): AppForm<VenueFormDto>,
) -> Result<Response> {
    service.create(dto).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Mekan başarıyla eklendi!"),
    ))
}

pub async fn edit_form(
    State(service): State<Arc<VenueService>>,
    RecordId(id): RecordId,
) -> Result<Response> {
    let venue = service.find(id).await?;
    Ok(render_page(
        "venues/form.html",
        context! {
            title => "Mekan Güncelle",
            action => format!("/mekan_guncelle/{}", id),
            record => venue,
        },
        IncomingFlash::default(),
    )?)
}

pub async fn update(
    State(service): State<Arc<VenueService>>,
    RecordId(id): RecordId,
    AppForm(dto): AppForm<VenueFormDto>,
) -> Result<Response> {
    service.update(id, dto).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Mekan başarıyla güncellendi!"),
    ))
}

pub async fn delete(
    State(service): State<Arc<VenueService>>,
    RecordId(id): RecordId,
) -> Result<Response> {
    service.delete(id).await?;
    Ok(redirect_with_flash(
        LIST_PATH,
        Flash::success("Mekan başarıyla silindi!"),
    ))
}

/// List all venues
#[utoipa::path(
    get,
    path = "/api/venues",
    responses(
        (status = 200, description = "List of venues", body = ApiResponse<Vec<VenueResponseDto>>),
    ),
    tag = "venues"
)]
pub async fn list_venues(
    State(service): State<Arc<VenueService>>,
) -> Result<Json<ApiResponse<Vec<VenueResponseDto>>>> {
    let venues = service.list().await?;
    Ok(Json(ApiResponse::list(venues)))
}

/// Get venue by id
#[utoipa::path(
    get,
    path = "/api/venues/{id}",
    params(
        ("id" = i64, Path, description = "Venue id")
    ),
    responses(
        (status = 200, description = "Venue found", body = ApiResponse<VenueResponseDto>),
        (status = 404, description = "Venue not found")
    ),
    tag = "venues"
)]
pub async fn get_venue(
    State(service): State<Arc<VenueService>>,
    RecordId(id): RecordId,
) -> Result<Json<ApiResponse<VenueResponseDto>>> {
    let venue = service
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {} not found", id)))?;
    Ok(Json(ApiResponse::success(Some(venue), None, None)))
}
