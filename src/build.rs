//! Build pipeline orchestration.
//!
//! One synchronous pass: résumé data → theme collection → default selection
//! → template render → CSS pipeline → output write. Each step's output is
//! the next step's input; the first failure aborts the build. There is no
//! atomic write and no backup — single local file, single writer.

use crate::config::BuildConfig;
use crate::css::{self, CssError};
use crate::data::{self, DataError};
use crate::render::{self, RenderError};
use crate::theme::{self, ThemeCollection, ThemeError};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Theme(#[from] ThemeError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Css(#[from] CssError),
}

/// What a finished build looked like; the CLI formats this for display.
#[derive(Debug)]
pub struct BuildSummary {
    /// The résumé file the build actually read.
    pub resume_source: PathBuf,
    /// Selected default theme name.
    pub current_theme: String,
    /// The selected theme's `name` field, when it has one.
    pub theme_display_name: Option<String>,
    /// Every theme embedded in the artifact, in collection order.
    pub embedded_themes: Vec<String>,
    pub output_path: PathBuf,
    pub size_bytes: usize,
}

impl BuildSummary {
    /// Output size in kilobytes, one decimal, as reported to the user.
    pub fn size_kb(&self) -> String {
        format!("{:.1}", self.size_bytes as f64 / 1024.0)
    }
}

/// Everything a build produces before anything touches the output directory.
struct Rendered {
    html: String,
    resume_source: PathBuf,
    current_theme: String,
    theme_display_name: Option<String>,
    embedded_themes: Vec<String>,
}

/// Run the pipeline up to, but not including, the output write.
fn run_pipeline(config: &BuildConfig) -> Result<Rendered, BuildError> {
    let source = data::resolve_source(config.resume_file.as_deref(), Path::new("."));
    let resume = data::load_resume(&source)?;
    // load_resume already rejected the NotFound case.
    let resume_source = source.path().map(Path::to_path_buf).unwrap_or_default();

    let themes = ThemeCollection::load(&config.themes_dir)?;
    let current_theme = theme::select_default(&themes, config.theme_override.as_deref())?.to_string();
    let selected = themes.get(&current_theme).cloned().unwrap_or_default();

    let template_src = fs::read_to_string(&config.template_file)?;
    let html = render::render(&template_src, &resume, &selected, &themes, &current_theme)?;

    let css_text = css::process_stylesheet(&config.style_file)?;
    let html = css::inline_stylesheet(&html, &css_text);

    let theme_display_name = selected
        .get("name")
        .and_then(|v| v.as_str())
        .map(String::from);

    Ok(Rendered {
        html,
        resume_source,
        current_theme,
        theme_display_name,
        embedded_themes: themes.names(),
    })
}

/// Build the résumé and write `index.html` into the output directory.
///
/// The directory create is recursive and idempotent; the write happens only
/// after every earlier step succeeded, so a failed build leaves no fresh
/// output behind.
pub fn build(config: &BuildConfig) -> Result<BuildSummary, BuildError> {
    let rendered = run_pipeline(config)?;

    fs::create_dir_all(&config.output_dir)?;
    let output_path = config.output_dir.join("index.html");
    fs::write(&output_path, &rendered.html)?;

    Ok(BuildSummary {
        resume_source: rendered.resume_source,
        current_theme: rendered.current_theme,
        theme_display_name: rendered.theme_display_name,
        embedded_themes: rendered.embedded_themes,
        output_path,
        size_bytes: rendered.html.len(),
    })
}

/// Run the full pipeline without writing anything; backs the `check`
/// subcommand.
pub fn check(config: &BuildConfig) -> Result<BuildSummary, BuildError> {
    let rendered = run_pipeline(config)?;
    Ok(BuildSummary {
        resume_source: rendered.resume_source,
        current_theme: rendered.current_theme,
        theme_display_name: rendered.theme_display_name,
        embedded_themes: rendered.embedded_themes,
        output_path: config.output_dir.join("index.html"),
        size_bytes: rendered.html.len(),
    })
}
