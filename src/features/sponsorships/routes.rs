use axum::{routing::get, Router};

use crate::features::sponsorships::handlers::{self, SponsorshipState};

/// Create routes for the sponsorships feature
pub fn routes(state: SponsorshipState) -> Router {
    Router::new()
        .route("/etkinlik_sponsorlar", get(handlers::list_page))
        .route(
            "/etkinlik_sponsor_ekle",
            get(handlers::new_form).post(handlers::create),
        )
        .route(
            "/etkinlik_sponsor_guncelle/{id}",
            get(handlers::edit_form).post(handlers::update),
        )
        .route("/etkinlik_sponsor_sil/{id}", get(handlers::delete))
        .route("/api/sponsorships", get(handlers::list_sponsorships))
        .route("/api/sponsorships/{id}", get(handlers::get_sponsorship))
        .route(
            "/api/events/{id}/sponsorships",
            get(handlers::list_event_sponsorships),
        )
        .route(
            "/api/sponsors/{id}/sponsorships",
            get(handlers::list_sponsor_sponsorships),
        )
        .with_state(state)
}
