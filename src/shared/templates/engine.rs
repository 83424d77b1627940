//! Page template engine using Jinja2 syntax.
//!
//! Templates live in `templates/pages/` (overridable through `TEMPLATE_DIR`)
//! and are loaded once into a process-wide [`Environment`].

use minijinja::{Environment, Value};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

use crate::core::config::default_template_dir;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

/// Load every template under `dir` into the global environment.
///
/// Must run before the first render to take effect; later calls are ignored.
/// Returns the number of templates available afterwards.
pub fn init_templates(dir: &Path) -> usize {
    let env = TEMPLATE_ENV.get_or_init(|| build_environment(dir));
    env.templates().count()
}

fn build_environment(dir: &Path) -> Environment<'static> {
    let mut env = Environment::new();

    if dir.exists() {
        load_templates_recursive(&mut env, dir, dir);
    } else {
        tracing::warn!("Template directory {} does not exist", dir.display());
    }

    env
}

/// Recursively load all .html templates from a directory
fn load_templates_recursive(env: &mut Environment<'static>, base_path: &Path, current_path: &Path) {
    let Ok(entries) = std::fs::read_dir(current_path) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            load_templates_recursive(env, base_path, &path);
        } else if path.extension().is_some_and(|ext| ext == "html") {
            let Some(template_name) = template_name(base_path, &path) else {
                continue;
            };
            let Ok(content) = std::fs::read_to_string(&path) else {
                tracing::warn!("Unreadable template {}", path.display());
                continue;
            };
            // Templates live for the whole process
            let static_name: &'static str = Box::leak(template_name.clone().into_boxed_str());
            let static_content: &'static str = Box::leak(content.into_boxed_str());
            if let Err(e) = env.add_template(static_name, static_content) {
                tracing::warn!("Failed to load template {}: {}", template_name, e);
            } else {
                tracing::debug!("Loaded template: {}", template_name);
            }
        }
    }
}

/// Forward-slash name relative to the template root, e.g. `categories/list.html`
fn template_name(base_path: &Path, path: &Path) -> Option<String> {
    let relative: PathBuf = path.strip_prefix(base_path).ok()?.to_path_buf();
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

/// Get the global template environment
fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(|| build_environment(&default_template_dir()))
}

/// Render `template_name` with `ctx`.
pub fn render_template(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

/// Check if a template exists
pub fn template_exists(template_name: &str) -> bool {
    get_environment().get_template(template_name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_missing_template() {
        let result = render_template("definitely_not_a_real_template.html", context! {});
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
        assert!(!template_exists("definitely_not_a_real_template.html"));
    }

    #[test]
    fn test_template_name_uses_forward_slashes() {
        let base = Path::new("/srv/templates");
        let path = base.join("events").join("form.html");
        assert_eq!(
            template_name(base, &path).as_deref(),
            Some("events/form.html")
        );
    }

    #[test]
    fn test_shipped_pages_are_loaded() {
        for name in [
            "base.html",
            "dashboard.html",
            "categories/list.html",
            "categories/form.html",
            "venues/list.html",
            "participants/form.html",
            "sponsors/list.html",
            "events/form.html",
            "registrations/list.html",
            "sponsorships/form.html",
        ] {
            assert!(template_exists(name), "missing template {}", name);
        }
    }
}
