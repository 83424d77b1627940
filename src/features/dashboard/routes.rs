use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/dashboard/summary", get(handlers::get_summary))
        .route(
            "/api/dashboard/upcoming-events",
            get(handlers::get_upcoming_events),
        )
        .with_state(dashboard_service)
}
