use axum::{routing::get, Router};

use crate::features::events::handlers::{self, EventState};

/// Create routes for the events feature
pub fn routes(state: EventState) -> Router {
    Router::new()
        .route("/etkinlikler", get(handlers::list_page))
        .route(
            "/etkinlik_ekle",
            get(handlers::new_form).post(handlers::create),
        )
        .route(
            "/etkinlik_guncelle/{id}",
            get(handlers::edit_form).post(handlers::update),
        )
        .route("/etkinlik_sil/{id}", get(handlers::delete))
        .route("/api/events", get(handlers::list_events))
        .route("/api/events/{id}", get(handlers::get_event))
        .with_state(state)
}
