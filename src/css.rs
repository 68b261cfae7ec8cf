//! Stylesheet pipeline.
//!
//! Two fixed-order steps over one source stylesheet: compile with grass,
//! then a vendor-prefix pass. The result is inlined into the rendered HTML
//! by replacing the literal stylesheet `<link>` tag with a `<style>` block.
//!
//! A template without the `<link>` tag is left untouched. The substitution
//! is deliberately lenient — templates that manage their own styling simply
//! render an inert CSS pipeline, they do not fail the build.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The exact `<link>` tag a template must carry for CSS inlining.
pub const STYLESHEET_LINK: &str = r#"<link rel="stylesheet" href="./style.css">"#;

#[derive(Error, Debug)]
pub enum CssError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{}: {message}", path.display())]
    Compile { path: PathBuf, message: String },
}

/// Properties that still want vendor-prefixed copies in the wild. Prefixed
/// declarations are emitted ahead of the standard one so the standard form
/// wins wherever the browser supports it.
const PREFIXED_PROPERTIES: &[(&str, &[&str])] = &[
    ("appearance", &["-webkit-", "-moz-"]),
    ("backdrop-filter", &["-webkit-"]),
    ("background-clip", &["-webkit-"]),
    ("hyphens", &["-webkit-", "-ms-"]),
    ("tab-size", &["-moz-"]),
    ("text-size-adjust", &["-webkit-", "-ms-"]),
    ("user-select", &["-webkit-", "-moz-", "-ms-"]),
];

/// Run the full pipeline over the stylesheet file: read, compile, prefix.
pub fn process_stylesheet(path: &Path) -> Result<String, CssError> {
    let source = fs::read_to_string(path)?;
    let compiled = compile(&source, path)?;
    Ok(add_vendor_prefixes(&compiled))
}

/// Step 1: compile the source. Plain CSS passes through; SCSS features
/// (variables, nesting) are resolved.
fn compile(source: &str, path: &Path) -> Result<String, CssError> {
    grass::from_string(source.to_owned(), &grass::Options::default()).map_err(|e| {
        CssError::Compile {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })
}

/// Step 2: emit vendor-prefixed copies of known declarations.
///
/// Works line by line so indentation and declaration order survive; grass
/// output puts one declaration per line. Already-prefixed declarations are
/// left alone.
pub fn add_vendor_prefixes(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    for line in css.lines() {
        let trimmed = line.trim_start();
        if let Some(prefixes) = prefix_rule(trimmed) {
            let indent = &line[..line.len() - trimmed.len()];
            for prefix in prefixes {
                out.push_str(indent);
                out.push_str(prefix);
                out.push_str(trimmed);
                out.push('\n');
            }
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Match a declaration line against the prefix table. Returns the prefixes
/// to emit, or `None` for selectors, at-rules and unlisted properties.
fn prefix_rule(declaration: &str) -> Option<&'static [&'static str]> {
    let name = declaration.split(':').next()?.trim_end();
    if name.starts_with('-') {
        return None;
    }
    PREFIXED_PROPERTIES
        .iter()
        .find(|(property, _)| *property == name)
        .map(|(_, prefixes)| *prefixes)
}

/// Replace the stylesheet `<link>` tag with an inline `<style>` block.
///
/// At most one substitution; a missing tag leaves the HTML unchanged.
pub fn inline_stylesheet(html: &str, css: &str) -> String {
    html.replacen(STYLESHEET_LINK, &format!("<style>{css}</style>"), 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // =========================================================================
    // Compile step tests
    // =========================================================================

    #[test]
    fn plain_css_passes_through() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("style.css");
        fs::write(&path, "body { color: #111; }").unwrap();
        let css = process_stylesheet(&path).unwrap();
        assert!(css.contains("color: #111"));
    }

    #[test]
    fn scss_variables_are_resolved() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("style.css");
        fs::write(&path, "$accent: #0af;\nh1 { color: $accent; }").unwrap();
        let css = process_stylesheet(&path).unwrap();
        assert!(css.contains("color: #0af"));
        assert!(!css.contains("$accent"));
    }

    #[test]
    fn broken_stylesheet_is_a_compile_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("style.css");
        fs::write(&path, "body { color: ; }").unwrap();
        let result = process_stylesheet(&path);
        assert!(matches!(result, Err(CssError::Compile { .. })));
    }

    #[test]
    fn missing_stylesheet_is_an_io_error() {
        let result = process_stylesheet(Path::new("/nonexistent/style.css"));
        assert!(matches!(result, Err(CssError::Io(_))));
    }

    // =========================================================================
    // Vendor prefix tests
    // =========================================================================

    #[test]
    fn listed_property_gets_prefixed_copies_first() {
        let css = "p {\n  user-select: none;\n}\n";
        let out = add_vendor_prefixes(css);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "  -webkit-user-select: none;");
        assert_eq!(lines[2], "  -moz-user-select: none;");
        assert_eq!(lines[3], "  -ms-user-select: none;");
        assert_eq!(lines[4], "  user-select: none;");
    }

    #[test]
    fn unlisted_properties_are_untouched() {
        let css = "p {\n  color: red;\n}\n";
        assert_eq!(add_vendor_prefixes(css), css);
    }

    #[test]
    fn already_prefixed_declarations_are_not_doubled() {
        let css = "p {\n  -webkit-user-select: none;\n}\n";
        assert_eq!(add_vendor_prefixes(css), css);
    }

    #[test]
    fn selectors_with_colons_do_not_match() {
        let css = "a:hover {\n  color: red;\n}\n";
        assert_eq!(add_vendor_prefixes(css), css);
    }

    // =========================================================================
    // Inlining tests
    // =========================================================================

    #[test]
    fn link_tag_becomes_style_block() {
        let html = format!("<head>{STYLESHEET_LINK}</head>");
        let out = inline_stylesheet(&html, "body { color: red; }");
        assert_eq!(out, "<head><style>body { color: red; }</style></head>");
        assert!(!out.contains(STYLESHEET_LINK));
    }

    #[test]
    fn missing_link_tag_is_a_silent_noop() {
        let html = "<head><title>cv</title></head>";
        assert_eq!(inline_stylesheet(html, "x"), html);
    }

    #[test]
    fn only_the_first_link_tag_is_replaced() {
        let html = format!("{STYLESHEET_LINK}{STYLESHEET_LINK}");
        let out = inline_stylesheet(&html, "c");
        assert_eq!(out, format!("<style>c</style>{STYLESHEET_LINK}"));
    }
}
