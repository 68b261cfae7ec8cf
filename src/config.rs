//! Build and deploy configuration.
//!
//! Both structs are constructed exactly once in `main` — from CLI flags plus
//! environment variables — and threaded as parameters through every pipeline
//! step. No configuration lives in module-level state.
//!
//! ## Environment Variables
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `RESUME_FILE` | Explicit résumé data file (only honored for `.yaml`/`.json` paths) |
//! | `THEME` | Theme to preselect; a `default-theme` file still wins |
//! | `DEPLOY_HOST` | SSH connection string for the deploy command |
//! | `DEPLOY_PATH` | Remote directory for the deploy command |
//!
//! CLI flags win over environment variables; empty environment values count
//! as unset.

use std::env;
use std::path::PathBuf;

pub const RESUME_FILE_VAR: &str = "RESUME_FILE";
pub const THEME_VAR: &str = "THEME";
pub const DEPLOY_HOST_VAR: &str = "DEPLOY_HOST";
pub const DEPLOY_PATH_VAR: &str = "DEPLOY_PATH";

/// Fallback SSH target when `DEPLOY_HOST` is unset.
pub const DEFAULT_DEPLOY_HOST: &str = "user@example.com";
/// Fallback remote directory when `DEPLOY_PATH` is unset.
pub const DEFAULT_DEPLOY_PATH: &str = "/var/www/html/resume";

/// Everything the build pipeline needs to know, resolved up front.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Explicit résumé file (flag or `RESUME_FILE`). `None` probes the
    /// conventional `resume.yaml` / `resume.json` pair.
    pub resume_file: Option<PathBuf>,
    /// Directory scanned for `*.json` theme files.
    pub themes_dir: PathBuf,
    /// Tera template source file.
    pub template_file: PathBuf,
    /// Stylesheet fed through the CSS pipeline.
    pub style_file: PathBuf,
    /// Directory receiving `index.html`.
    pub output_dir: PathBuf,
    /// Theme name to preselect (flag or `THEME`). A theme file literally
    /// named `default-theme` still wins over this.
    pub theme_override: Option<String>,
}

impl BuildConfig {
    /// Resolve flag values against the process environment.
    pub fn resolve(
        resume: Option<PathBuf>,
        themes_dir: PathBuf,
        template_file: PathBuf,
        style_file: PathBuf,
        output_dir: PathBuf,
        theme: Option<String>,
    ) -> Self {
        let resume_file = resume.or_else(|| env_nonempty(RESUME_FILE_VAR).map(PathBuf::from));
        let theme_override = theme.or_else(|| env_nonempty(THEME_VAR));
        Self {
            resume_file,
            themes_dir,
            template_file,
            style_file,
            output_dir,
            theme_override,
        }
    }
}

/// Target settings for the deploy report.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Directory a production build must have produced.
    pub build_dir: PathBuf,
    /// SSH connection string, e.g. `user@host`.
    pub remote_host: String,
    /// Remote directory the build is copied into.
    pub remote_path: String,
}

impl DeployConfig {
    /// Resolve the deploy target from the environment, with the documented
    /// hardcoded fallbacks.
    pub fn resolve(build_dir: PathBuf) -> Self {
        Self {
            build_dir,
            remote_host: env_nonempty(DEPLOY_HOST_VAR)
                .unwrap_or_else(|| DEFAULT_DEPLOY_HOST.to_string()),
            remote_path: env_nonempty(DEPLOY_PATH_VAR)
                .unwrap_or_else(|| DEFAULT_DEPLOY_PATH.to_string()),
        }
    }
}

/// Read an environment variable, treating empty values as unset.
fn env_nonempty(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    }
}
