use std::sync::Arc;

use axum::{extract::State, response::Response, Json};
use minijinja::context;

use crate::core::error::Result;
use crate::features::dashboard::dtos::{DashboardSummaryDto, UpcomingEventDto};
use crate::features::dashboard::services::DashboardService;
use crate::shared::flash::IncomingFlash;
use crate::shared::templates::render_page;
use crate::shared::types::ApiResponse;

pub async fn index(
    State(service): State<Arc<DashboardService>>,
    flash: IncomingFlash,
) -> Result<Response> {
    let summary = service.get_summary().await?;
    let upcoming_events = service.upcoming_events().await?;
    Ok(render_page(
        "dashboard.html",
        context! { summary => summary, upcoming_events => upcoming_events },
        flash,
    )?)
}

/// Get dashboard summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard summary", body = ApiResponse<DashboardSummaryDto>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_summary(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardSummaryDto>>> {
    let summary = service.get_summary().await?;
    Ok(Json(ApiResponse::success(Some(summary), None, None)))
}

/// Get the next active events
#[utoipa::path(
    get,
    path = "/api/dashboard/upcoming-events",
    tag = "dashboard",
    responses(
        (status = 200, description = "Active events that have not started yet", body = ApiResponse<Vec<UpcomingEventDto>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_upcoming_events(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<Vec<UpcomingEventDto>>>> {
    let events = service.upcoming_events().await?;
    Ok(Json(ApiResponse::list(events)))
}
