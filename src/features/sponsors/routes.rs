use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::sponsors::handlers;
use crate::features::sponsors::services::SponsorService;

/// Create routes for the sponsors feature
pub fn routes(service: Arc<SponsorService>) -> Router {
    Router::new()
        .route("/sponsorlar", get(handlers::list_page))
        .route(
            "/sponsor_ekle",
            get(handlers::new_form).post(handlers::create),
        )
        .route(
            "/sponsor_guncelle/{id}",
            get(handlers::edit_form).post(handlers::update),
        )
        .route("/sponsor_sil/{id}", get(handlers::delete))
        .route("/api/sponsors", get(handlers::list_sponsors))
        .route("/api/sponsors/{id}", get(handlers::get_sponsor))
        .with_state(service)
}
