//! Theme loading and default selection.
//!
//! A theme is one JSON object per file under the themes directory, keyed by
//! file stem: `themes/dark.json` is the theme `dark`. The collection keeps a
//! stable order — entries sorted by file name, the deterministic stand-in
//! for directory listing order — because the default-selection fallback is
//! "first available".
//!
//! Collection building is all-or-nothing: one malformed theme file aborts
//! the whole build rather than shipping a partial theme set.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File stem whose presence always wins default selection.
pub const DEFAULT_THEME_NAME: &str = "default-theme";

/// A single theme: a free-form JSON object of presentation attributes.
pub type Theme = Map<String, Value>;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("theme not found: {}\navailable themes:\n{}", path.display(), list_names(available))]
    NotFound {
        path: PathBuf,
        available: Vec<String>,
    },
    #[error("{}: theme must be a JSON object", path.display())]
    NotAnObject { path: PathBuf },
    #[error("no themes found in {}", dir.display())]
    Empty { dir: PathBuf },
}

fn list_names(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("  - {name}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Name → theme mapping in stable order.
#[derive(Debug, Clone)]
pub struct ThemeCollection {
    dir: PathBuf,
    entries: Vec<(String, Theme)>,
}

impl ThemeCollection {
    /// Scan a directory and parse every `*.json` file into the collection.
    pub fn load(dir: &Path) -> Result<Self, ThemeError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let theme = read_theme_file(&path)?;
            entries.push((stem.to_string(), theme));
        }
        // read_dir order is filesystem-dependent; sort for a stable listing.
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(Self {
            dir: dir.to_path_buf(),
            entries,
        })
    }

    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, theme)| theme)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Theme names in collection order.
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(n, _)| n.clone()).collect()
    }

    pub fn first_name(&self) -> Option<&str> {
        self.entries.first().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The whole collection as one JSON object, for the render context.
    pub fn to_value(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(name, theme)| (name.clone(), Value::Object(theme.clone())))
                .collect(),
        )
    }
}

/// Load a single named theme from `<dir>/<name>.json`.
///
/// A missing file reports the requested path together with every valid theme
/// name found in the directory.
pub fn load_theme(dir: &Path, name: &str) -> Result<Theme, ThemeError> {
    let path = dir.join(format!("{name}.json"));
    if !path.exists() {
        return Err(ThemeError::NotFound {
            path,
            available: available_names(dir),
        });
    }
    read_theme_file(&path)
}

fn read_theme_file(path: &Path) -> Result<Theme, ThemeError> {
    let text = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&text).map_err(|source| ThemeError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ThemeError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

/// Valid theme names in a directory, for diagnostics. An unreadable
/// directory yields an empty list rather than masking the original error.
pub fn available_names(dir: &Path) -> Vec<String> {
    let Ok(read) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = read
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
        .filter_map(|path| path.file_stem().and_then(|s| s.to_str()).map(String::from))
        .collect();
    names.sort();
    names
}

/// Pick the default theme name by the documented precedence:
///
/// 1. a theme literally named `default-theme`;
/// 2. the requested override, when it names a loaded theme;
/// 3. the first theme in collection order;
/// 4. error when the collection is empty.
///
/// Users rely on a `default-theme.json` file overriding everything else, so
/// this ordering is a contract, not an implementation detail.
pub fn select_default<'a>(
    themes: &'a ThemeCollection,
    requested: Option<&str>,
) -> Result<&'a str, ThemeError> {
    if themes.contains(DEFAULT_THEME_NAME) {
        return Ok(DEFAULT_THEME_NAME);
    }
    if let Some(name) = requested {
        if let Some((found, _)) = themes.entries.iter().find(|(n, _)| n == name) {
            return Ok(found);
        }
    }
    match themes.first_name() {
        Some(first) => Ok(first),
        None => Err(ThemeError::Empty {
            dir: themes.dir.clone(),
        }),
    }
}
