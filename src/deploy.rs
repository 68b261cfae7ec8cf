//! Deploy dry-run.
//!
//! Two states, in order: **precheck** (the build directory must exist) and
//! **report** (construct the scp command that would publish it). The command
//! is never executed in the default configuration — flip [`EXECUTE`] and
//! rebuild to make the report state actually run scp. The gate being a
//! source edit is the point: this subcommand documents the copy step, it
//! does not automate it.

use crate::config::DeployConfig;
use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;

/// Set to `true` (and rebuild) to let `deploy` run the scp command instead
/// of only printing it.
const EXECUTE: bool = false;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("build directory not found: {} (run a production build first)", path.display())]
    MissingBuildDir { path: PathBuf },
    #[error("deploy command failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("deploy command exited with {status}: {command}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
    },
}

/// The copy command for a deploy target.
pub fn scp_command(config: &DeployConfig) -> String {
    format!(
        "scp -r {}/* {}:{}",
        config.build_dir.display(),
        config.remote_host,
        config.remote_path
    )
}

/// Outcome of a deploy invocation; the CLI formats this for display.
#[derive(Debug)]
pub struct DeployReport {
    pub build_dir: PathBuf,
    pub remote_host: String,
    pub remote_path: String,
    pub command: String,
    /// False in the default dry-run configuration.
    pub executed: bool,
}

/// Precheck the build directory, then produce the deploy report.
pub fn deploy(config: &DeployConfig) -> Result<DeployReport, DeployError> {
    if !config.build_dir.is_dir() {
        return Err(DeployError::MissingBuildDir {
            path: config.build_dir.clone(),
        });
    }

    let command = scp_command(config);
    if EXECUTE {
        run_command(&command)?;
    }

    Ok(DeployReport {
        build_dir: config.build_dir.clone(),
        remote_host: config.remote_host.clone(),
        remote_path: config.remote_path.clone(),
        command,
        executed: EXECUTE,
    })
}

/// Run the copy command through a shell (the `*` glob needs one).
fn run_command(command: &str) -> Result<(), DeployError> {
    let status = Command::new("sh").arg("-c").arg(command).status()?;
    if !status.success() {
        return Err(DeployError::CommandFailed {
            command: command.to_string(),
            status,
        });
    }
    Ok(())
}
