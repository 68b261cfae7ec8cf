use clap::{Parser, Subcommand};
use cvforge::{build, config, deploy, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "cvforge")]
#[command(about = "Static résumé generator producing one self-contained HTML file")]
#[command(long_about = "\
Static résumé generator producing one self-contained HTML file

Inputs:

  resume.yaml / resume.json    Résumé data; override with --resume or the
                               RESUME_FILE environment variable (only .yaml
                               and .json paths are honored)
  themes/*.json                One JSON object per theme, keyed by file name
  template.html                Tera template; registered helpers: json,
                               isString, isObject, isArray
  style.css                    Stylesheet compiled (SCSS features allowed),
                               vendor-prefixed, and inlined in place of the
                               literal <link rel=\"stylesheet\"
                               href=\"./style.css\"> tag

Theme selection precedence:

  1. themes/default-theme.json, when present
  2. --theme / THEME, when it names an existing theme
  3. the first theme in the collection

'deploy' prints the scp command built from DEPLOY_HOST and DEPLOY_PATH
(defaults: user@example.com, /var/www/html/resume). It never copies anything
unless the execution gate in src/deploy.rs is edited.")]
#[command(version = version_string())]
struct Cli {
    /// Résumé data file (.yaml or .json); default probes resume.yaml then resume.json
    #[arg(long, global = true)]
    resume: Option<PathBuf>,

    /// Directory containing theme JSON files
    #[arg(long, default_value = "themes", global = true)]
    themes_dir: PathBuf,

    /// Tera template file
    #[arg(long, default_value = "template.html", global = true)]
    template: PathBuf,

    /// Stylesheet source file
    #[arg(long, default_value = "style.css", global = true)]
    style: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the résumé into a single self-contained HTML file
    Build {
        /// Theme to preselect (a default-theme file still wins)
        #[arg(long)]
        theme: Option<String>,
    },
    /// Validate all inputs and render without writing output
    Check {
        /// Theme to preselect (a default-theme file still wins)
        #[arg(long)]
        theme: Option<String>,
    },
    /// Print the scp command that would publish a production build
    Deploy {
        /// Directory a production build produced
        #[arg(long, default_value = "build")]
        build_dir: PathBuf,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        resume,
        themes_dir,
        template,
        style,
        output: output_dir,
        command,
    } = Cli::parse();

    match command {
        Command::Build { theme } => {
            let config = config::BuildConfig::resolve(
                resume, themes_dir, template, style, output_dir, theme,
            );
            let summary = build::build(&config)?;
            output::print_build_summary(&summary);
        }
        Command::Check { theme } => {
            let config = config::BuildConfig::resolve(
                resume, themes_dir, template, style, output_dir, theme,
            );
            let summary = build::check(&config)?;
            output::print_check_summary(&summary);
            println!("==> Inputs are valid");
        }
        Command::Deploy { build_dir } => {
            let config = config::DeployConfig::resolve(build_dir);
            let report = deploy::deploy(&config)?;
            output::print_deploy_report(&report);
        }
    }

    Ok(())
}
