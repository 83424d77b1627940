use axum::{routing::get, Router};

use crate::features::registrations::handlers::{self, RegistrationState};

/// Create routes for the registrations feature
pub fn routes(state: RegistrationState) -> Router {
    Router::new()
        .route("/kayitlar", get(handlers::list_page))
        .route("/kayit_ekle", get(handlers::new_form).post(handlers::create))
        .route(
            "/kayit_guncelle/{id}",
            get(handlers::edit_form).post(handlers::update),
        )
        .route("/kayit_sil/{id}", get(handlers::delete))
        .route("/api/registrations", get(handlers::list_registrations))
        .route("/api/registrations/{id}", get(handlers::get_registration))
        .with_state(state)
}
