//! Template rendering.
//!
//! One Tera template, compiled from source per build, with four registered
//! helpers the template can call:
//!
//! - `json` (filter): JSON-serialize any value. Output goes through Tera's
//!   default HTML escaping like everything else; pipe through `safe` to
//!   embed raw JSON (e.g. inside a `<script>` block).
//! - `isString` / `isObject` / `isArray` (testers): variant tag checks on
//!   the underlying JSON value. `isObject` holds only for mappings — never
//!   for null, never for arrays.
//!
//! The context carries every top-level résumé field, then `theme`,
//! `allThemes` and `currentTheme`. The reserved names are inserted last so
//! they win when résumé data collides with them. Résumé data is trusted
//! input; no sanitization happens beyond the engine default.

use crate::theme::{Theme, ThemeCollection};
use serde_json::Value;
use std::collections::HashMap;
use tera::{Context, Tera};
use thiserror::Error;

/// Name the raw template is registered under. The `.html` suffix keeps
/// Tera's default auto-escaping on.
pub const TEMPLATE_NAME: &str = "resume.html";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

fn json_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = serde_json::to_string(value).map_err(tera::Error::msg)?;
    Ok(Value::String(text))
}

fn is_string(value: Option<&Value>, _args: &[Value]) -> tera::Result<bool> {
    Ok(matches!(value, Some(Value::String(_))))
}

fn is_object(value: Option<&Value>, _args: &[Value]) -> tera::Result<bool> {
    Ok(matches!(value, Some(Value::Object(_))))
}

fn is_array(value: Option<&Value>, _args: &[Value]) -> tera::Result<bool> {
    Ok(matches!(value, Some(Value::Array(_))))
}

/// Build the engine: one raw template plus the four helpers.
fn engine(template_src: &str) -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, template_src)?;
    tera.register_filter("json", json_filter);
    tera.register_tester("isString", is_string);
    tera.register_tester("isObject", is_object);
    tera.register_tester("isArray", is_array);
    Ok(tera)
}

/// Render the résumé into HTML.
pub fn render(
    template_src: &str,
    resume: &serde_json::Map<String, Value>,
    theme: &Theme,
    themes: &ThemeCollection,
    current_theme: &str,
) -> Result<String, RenderError> {
    let tera = engine(template_src)?;

    let mut context = Context::new();
    for (key, value) in resume {
        context.insert(key.as_str(), value);
    }
    context.insert("theme", theme);
    context.insert("allThemes", &themes.to_value());
    context.insert("currentTheme", current_theme);

    Ok(tera.render(TEMPLATE_NAME, &context)?)
}
