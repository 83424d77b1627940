use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Create routes for the categories feature
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route("/kategoriler", get(handlers::list_page))
        .route(
            "/kategori_ekle",
            get(handlers::new_form).post(handlers::create),
        )
        .route(
            "/kategori_guncelle/{id}",
            get(handlers::edit_form).post(handlers::update),
        )
        .route("/kategori_sil/{id}", get(handlers::delete))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/categories/{id}", get(handlers::get_category))
        .with_state(service)
}
