//! CLI output formatting.
//!
//! Format functions are pure — no I/O, no side effects — and return display
//! lines; thin `print_*` wrappers write them to stdout. Exact output stays
//! testable without capturing stdout.
//!
//! ## Build
//!
//! ```text
//! Resume: resume.yaml
//! Theme: default-theme (Midnight)
//! Embedded themes: dark, default-theme, light
//! Output: dist/index.html (14.2 KB)
//! ```
//!
//! ## Deploy
//!
//! ```text
//! Source: build
//! Target: user@example.com:/var/www/html/resume
//! Deploy command:
//!     scp -r build/* user@example.com:/var/www/html/resume
//! Dry run only. Set DEPLOY_HOST and DEPLOY_PATH, then run the command above.
//! ```

use crate::build::BuildSummary;
use crate::deploy::DeployReport;

/// Shared head of the build and check reports.
fn summary_head(summary: &BuildSummary) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Resume: {}", summary.resume_source.display()));
    match &summary.theme_display_name {
        Some(display) => lines.push(format!("Theme: {} ({})", summary.current_theme, display)),
        None => lines.push(format!("Theme: {}", summary.current_theme)),
    }
    lines.push(format!(
        "Embedded themes: {}",
        summary.embedded_themes.join(", ")
    ));
    lines
}

/// Format the post-build report.
pub fn format_build_summary(summary: &BuildSummary) -> Vec<String> {
    let mut lines = summary_head(summary);
    lines.push(format!(
        "Output: {} ({} KB)",
        summary.output_path.display(),
        summary.size_kb()
    ));
    lines
}

/// Format the check report: same head, but nothing was written.
pub fn format_check_summary(summary: &BuildSummary) -> Vec<String> {
    let mut lines = summary_head(summary);
    lines.push(format!(
        "Would write: {} ({} KB)",
        summary.output_path.display(),
        summary.size_kb()
    ));
    lines
}

/// Format the deploy report.
pub fn format_deploy_report(report: &DeployReport) -> Vec<String> {
    let mut lines = vec![
        format!("Source: {}", report.build_dir.display()),
        format!("Target: {}:{}", report.remote_host, report.remote_path),
        "Deploy command:".to_string(),
        format!("    {}", report.command),
    ];
    if report.executed {
        lines.push("Deployed.".to_string());
    } else {
        lines.push(
            "Dry run only. Set DEPLOY_HOST and DEPLOY_PATH, then run the command above."
                .to_string(),
        );
    }
    lines
}

/// Print the build report to stdout.
pub fn print_build_summary(summary: &BuildSummary) {
    for line in format_build_summary(summary) {
        println!("{}", line);
    }
}

/// Print the check report to stdout.
pub fn print_check_summary(summary: &BuildSummary) {
    for line in format_check_summary(summary) {
        println!("{}", line);
    }
}

/// Print the deploy report to stdout.
pub fn print_deploy_report(report: &DeployReport) {
    for line in format_deploy_report(report) {
        println!("{}", line);
    }
}
