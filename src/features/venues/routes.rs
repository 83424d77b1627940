use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::venues::handlers;
use crate::features::venues::services::VenueService;

/// Create routes for the venues feature
pub fn routes(service: Arc<VenueService>) -> Router {
    Router::new()
        .route("/mekanlar", get(handlers::list_page))
        .route("/mekan_ekle", get(handlers::new_form).post(handlers::create))
        .route(
            "/mekan_guncelle/{id}",
            get(handlers::edit_form).post(handlers::update),
        )
        .route("/mekan_sil/{id}", get(handlers::delete))
        .route("/api/venues", get(handlers::list_venues))
        .route("/api/venues/{id}", get(handlers::get_venue))
        .with_state(service)
}
