//! HTML page rendering.
//!
//! Every page template receives two variables: `page`, the handler's own
//! context, and `flash`, the notification left by the previous request.

pub mod engine;

pub use engine::{init_templates, render_template, template_exists, TemplateError};

use axum::{
    http::header,
    response::{Html, IntoResponse, Response},
};
use minijinja::{context, Value};

use crate::shared::flash::{clear_flash_cookie, IncomingFlash};

/// Render a full page, consuming the incoming notification.
pub fn render_page(
    template_name: &str,
    page: Value,
    flash: IncomingFlash,
) -> Result<Response, TemplateError> {
    let had_flash = flash.0.is_some();
    let html = render_template(
        template_name,
        context! {
            page => page,
            flash => flash.0,
        },
    )?;

    let mut response = Html(html).into_response();
    if had_flash {
        response
            .headers_mut()
            .insert(header::SET_COOKIE, clear_flash_cookie());
    }
    Ok(response)
}
