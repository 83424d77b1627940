use axum::http::{header, HeaderValue};
use axum_test::{TestResponse, TestServer};
use sqlx::PgPool;

use crate::core::config::default_template_dir;
use crate::core::router::record_routes;
use crate::shared::templates::init_templates;

/// Server over the full record router, with events created by actor 1.
pub fn test_server(pool: PgPool) -> TestServer {
    init_templates(&default_template_dir());
    TestServer::new(record_routes(pool, 1)).expect("Failed to build test server")
}

/// Target of a redirect response
pub fn location(response: &TestResponse) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// The `flash=...` pair from a redirect, ready to send back as a `Cookie` header
pub fn flash_cookie(response: &TestResponse) -> HeaderValue {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("response sets no cookie");
    let pair = set_cookie.split(';').next().unwrap_or_default();
    HeaderValue::from_str(pair).expect("cookie pair is a valid header value")
}
