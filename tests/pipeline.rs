//! End-to-end pipeline tests: fixture projects on disk, built through the
//! public library API, assertions on the written artifact.

use cvforge::build::{self, BuildError};
use cvforge::config::{BuildConfig, DeployConfig};
use cvforge::deploy::{self, DeployError};
use cvforge::theme::ThemeError;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
<link rel="stylesheet" href="./style.css">
</head>
<body>
<h1>{{ name }}</h1>
<p>{{ currentTheme }}</p>
{% if skills is isArray %}<ul>{% for s in skills %}<li>{{ s }}</li>{% endfor %}</ul>{% endif %}
<script>const themes = {{ allThemes | json | safe }};</script>
</body>
</html>
"#;

struct Fixture {
    tmp: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("themes")).unwrap();
        fs::write(tmp.path().join("template.html"), TEMPLATE).unwrap();
        fs::write(
            tmp.path().join("style.css"),
            "body { color: #222; user-select: none; }",
        )
        .unwrap();
        Self { tmp }
    }

    fn path(&self) -> &Path {
        self.tmp.path()
    }

    fn add_theme(&self, name: &str, body: &str) {
        fs::write(
            self.path().join("themes").join(format!("{name}.json")),
            body,
        )
        .unwrap();
    }

    fn add_resume(&self, file: &str, body: &str) -> PathBuf {
        let path = self.path().join(file);
        fs::write(&path, body).unwrap();
        path
    }

    fn config(&self, resume: PathBuf) -> BuildConfig {
        BuildConfig {
            resume_file: Some(resume),
            themes_dir: self.path().join("themes"),
            template_file: self.path().join("template.html"),
            style_file: self.path().join("style.css"),
            output_dir: self.path().join("dist"),
            theme_override: None,
        }
    }
}

// =========================================================================
// Build artifact tests
// =========================================================================

#[test]
fn yaml_and_json_resumes_produce_identical_artifacts() {
    let fx = Fixture::new();
    fx.add_theme("plain", r##"{"name":"Plain","accent":"#333"}"##);
    let yaml = fx.add_resume("cv.yaml", "name: Ada\nskills:\n  - rust\n  - sql\n");
    let json = fx.add_resume("cv.json", r#"{"name":"Ada","skills":["rust","sql"]}"#);

    let mut config = fx.config(yaml);
    config.output_dir = fx.path().join("dist-yaml");
    build::build(&config).unwrap();
    let from_yaml = fs::read_to_string(config.output_dir.join("index.html")).unwrap();

    let mut config = fx.config(json);
    config.output_dir = fx.path().join("dist-json");
    build::build(&config).unwrap();
    let from_json = fs::read_to_string(config.output_dir.join("index.html")).unwrap();

    assert_eq!(from_yaml, from_json);
    assert!(from_yaml.contains("<h1>Ada</h1>"));
    assert!(from_yaml.contains("<li>rust</li>"));
}

#[test]
fn artifact_is_self_contained() {
    let fx = Fixture::new();
    fx.add_theme("plain", r##"{"name":"Plain","accent":"#333"}"##);
    let resume = fx.add_resume("cv.json", r#"{"name":"Ada"}"#);

    let summary = build::build(&fx.config(resume)).unwrap();
    let html = fs::read_to_string(&summary.output_path).unwrap();

    assert!(!html.contains(r#"<link rel="stylesheet" href="./style.css">"#));
    assert!(html.contains("<style>"));
    assert!(html.contains("-webkit-user-select: none;"));
    // Every theme rides along as JSON for client-side switching, hash-valued
    // color tokens included.
    assert!(html.contains(r#""plain""#));
    assert!(html.contains(r##""accent":"#333""##));
    assert_eq!(summary.size_bytes, html.len());
}

#[test]
fn template_without_stylesheet_link_still_builds() {
    let fx = Fixture::new();
    fx.add_theme("plain", "{}");
    let resume = fx.add_resume("cv.json", r#"{"name":"Ada"}"#);
    fs::write(
        fx.path().join("template.html"),
        "<html><body>{{ name }}</body></html>",
    )
    .unwrap();

    let summary = build::build(&fx.config(resume)).unwrap();
    let html = fs::read_to_string(&summary.output_path).unwrap();
    assert!(html.contains("Ada"));
    assert!(!html.contains("<style>"));
}

// =========================================================================
// Theme selection tests
// =========================================================================

#[test]
fn default_theme_file_wins_over_override() {
    let fx = Fixture::new();
    fx.add_theme("default-theme", r#"{"name":"Pinned"}"#);
    fx.add_theme("dark", r#"{"name":"Dark"}"#);
    let resume = fx.add_resume("cv.json", r#"{"name":"Ada"}"#);

    let mut config = fx.config(resume);
    config.theme_override = Some("dark".to_string());
    let summary = build::build(&config).unwrap();
    assert_eq!(summary.current_theme, "default-theme");
    assert_eq!(summary.theme_display_name.as_deref(), Some("Pinned"));
}

#[test]
fn override_wins_when_no_default_theme_file() {
    let fx = Fixture::new();
    fx.add_theme("dark", r#"{"name":"Dark"}"#);
    fx.add_theme("light", r#"{"name":"Light"}"#);
    let resume = fx.add_resume("cv.json", r#"{"name":"Ada"}"#);

    let mut config = fx.config(resume);
    config.theme_override = Some("light".to_string());
    let summary = build::build(&config).unwrap();
    assert_eq!(summary.current_theme, "light");
}

#[test]
fn unknown_override_falls_back_to_first_theme() {
    let fx = Fixture::new();
    fx.add_theme("dark", r#"{"name":"Dark"}"#);
    fx.add_theme("light", r#"{"name":"Light"}"#);
    let resume = fx.add_resume("cv.json", r#"{"name":"Ada"}"#);

    let mut config = fx.config(resume);
    config.theme_override = Some("nonexistent".to_string());
    let summary = build::build(&config).unwrap();
    assert_eq!(summary.current_theme, "dark");
    assert_eq!(summary.embedded_themes, vec!["dark", "light"]);
}

#[test]
fn empty_themes_dir_aborts_without_output() {
    let fx = Fixture::new();
    let resume = fx.add_resume("cv.json", r#"{"name":"Ada"}"#);

    let config = fx.config(resume);
    let result = build::build(&config);
    assert!(matches!(
        result,
        Err(BuildError::Theme(ThemeError::Empty { .. }))
    ));
    assert!(!config.output_dir.exists());
}

// =========================================================================
// Check tests
// =========================================================================

#[test]
fn check_leaves_the_filesystem_untouched() {
    let fx = Fixture::new();
    fx.add_theme("plain", "{}");
    let resume = fx.add_resume("cv.json", r#"{"name":"Ada"}"#);

    let config = fx.config(resume);
    let summary = build::check(&config).unwrap();
    assert!(summary.size_bytes > 0);
    assert!(!config.output_dir.exists());
}

// =========================================================================
// Deploy tests
// =========================================================================

#[test]
fn deploy_requires_an_existing_build_dir() {
    let tmp = TempDir::new().unwrap();
    let config = DeployConfig {
        build_dir: tmp.path().join("build"),
        remote_host: "user@example.com".to_string(),
        remote_path: "/var/www/html/resume".to_string(),
    };
    let result = deploy::deploy(&config);
    assert!(matches!(result, Err(DeployError::MissingBuildDir { .. })));
}

#[test]
fn deploy_is_a_dry_run_with_the_full_scp_command() {
    let tmp = TempDir::new().unwrap();
    let build_dir = tmp.path().join("build");
    fs::create_dir(&build_dir).unwrap();
    fs::write(build_dir.join("index.html"), "<html></html>").unwrap();

    let config = DeployConfig {
        build_dir: build_dir.clone(),
        remote_host: "me@host".to_string(),
        remote_path: "/srv/resume".to_string(),
    };
    let report = deploy::deploy(&config).unwrap();
    assert!(!report.executed);
    assert_eq!(
        report.command,
        format!("scp -r {}/* me@host:/srv/resume", build_dir.display())
    );
    // Nothing was copied anywhere.
    assert!(build_dir.join("index.html").exists());
}
