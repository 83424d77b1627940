use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::participants::handlers;
use crate::features::participants::services::ParticipantService;

/// Create routes for the participants feature
pub fn routes(service: Arc<ParticipantService>) -> Router {
    Router::new()
        .route("/katilimcilar", get(handlers::list_page))
        .route(
            "/katilimci_ekle",
            get(handlers::new_form).post(handlers::create),
        )
        .route(
            "/katilimci_guncelle/{id}",
            get(handlers::edit_form).post(handlers::update),
        )
        .route("/katilimci_sil/{id}", get(handlers::delete))
        .route("/api/participants", get(handlers::list_participants))
        .route("/api/participants/{id}", get(handlers::get_participant))
        .with_state(service)
}
