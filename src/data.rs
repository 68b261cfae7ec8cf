//! Résumé data loading.
//!
//! The résumé is one YAML or JSON document with no enforced schema — its
//! structure is whatever the template dereferences. Source resolution is a
//! tagged sum type handled by one exhaustive match: an explicit path ending
//! in `.yaml` or `.json` pins the format, anything else probes the
//! conventional `resume.yaml` then `resume.json` pair. An explicit path with
//! a foreign extension is ignored entirely and the defaults are probed, the
//! same way the `RESUME_FILE` contract has always worked.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// YAML file name probed when no explicit path pins the format.
pub const DEFAULT_YAML: &str = "resume.yaml";
/// JSON fallback probed after [`DEFAULT_YAML`].
pub const DEFAULT_JSON: &str = "resume.json";

#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("resume file not found: {}", join_paths(attempted))]
    NotFound { attempted: Vec<PathBuf> },
    #[error("{}: top-level value must be a mapping", path.display())]
    NotAMapping { path: PathBuf },
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}

/// Resolved résumé source, ready for one exhaustive match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeSource {
    Yaml(PathBuf),
    Json(PathBuf),
    /// Nothing usable on disk; carries every path that was tried.
    NotFound { attempted: Vec<PathBuf> },
}

impl ResumeSource {
    /// The path behind a resolved source, if there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ResumeSource::Yaml(path) | ResumeSource::Json(path) => Some(path),
            ResumeSource::NotFound { .. } => None,
        }
    }
}

/// Decide which résumé file the build reads.
///
/// The extension check is case-insensitive. When both conventional defaults
/// exist, YAML wins.
pub fn resolve_source(explicit: Option<&Path>, dir: &Path) -> ResumeSource {
    let lower = explicit.map(|p| p.to_string_lossy().to_lowercase());
    let (yaml, json) = match (explicit, lower.as_deref()) {
        (Some(path), Some(l)) if l.ends_with(".yaml") => (Some(path.to_path_buf()), None),
        (Some(path), Some(l)) if l.ends_with(".json") => (None, Some(path.to_path_buf())),
        _ => (Some(dir.join(DEFAULT_YAML)), Some(dir.join(DEFAULT_JSON))),
    };

    if let Some(path) = yaml.clone().filter(|p| p.exists()) {
        return ResumeSource::Yaml(path);
    }
    if let Some(path) = json.clone().filter(|p| p.exists()) {
        return ResumeSource::Json(path);
    }
    ResumeSource::NotFound {
        attempted: yaml.into_iter().chain(json).collect(),
    }
}

/// Parse the resolved source into a JSON object.
///
/// YAML goes through serde_yaml, JSON through serde_json; either way the
/// document root must be a mapping, because the render context spreads its
/// fields at top level.
pub fn load_resume(source: &ResumeSource) -> Result<serde_json::Map<String, Value>, DataError> {
    let (path, value) = match source {
        ResumeSource::Yaml(path) => {
            let text = fs::read_to_string(path)?;
            (path, serde_yaml::from_str::<Value>(&text)?)
        }
        ResumeSource::Json(path) => {
            let text = fs::read_to_string(path)?;
            (path, serde_json::from_str::<Value>(&text)?)
        }
        ResumeSource::NotFound { attempted } => {
            return Err(DataError::NotFound {
                attempted: attempted.clone(),
            });
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DataError::NotAMapping { path: path.clone() }),
    }
}
