//! Dependency installation through an external package manager
//!
//! Every failure, including a child that cannot be spawned or never exits,
//! becomes a failed [`InstallOutcome`] rather than an error.

use super::package_manager::PackageManager;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for one install (10 minutes)
pub const INSTALL_TIMEOUT: Duration = Duration::from_secs(600);

/// Trailing stderr lines kept as the failure cause
const STDERR_SNIPPET_LINES: usize = 20;

/// Program and arguments of an install invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl InstallCommand {
    pub fn for_manager(package_manager: PackageManager) -> Self {
        Self {
            program: package_manager.program(),
            args: vec!["install".to_string()],
        }
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of installing dependencies in one sub-project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub package_manager: PackageManager,
    pub destination: PathBuf,
    pub succeeded: bool,
    pub error_message: Option<String>,
}

impl InstallOutcome {
    fn success(package_manager: PackageManager, destination: &Path) -> Self {
        Self {
            package_manager,
            destination: destination.to_path_buf(),
            succeeded: true,
            error_message: None,
        }
    }

    fn failure(package_manager: PackageManager, destination: &Path, message: String) -> Self {
        Self {
            package_manager,
            destination: destination.to_path_buf(),
            succeeded: false,
            error_message: Some(message),
        }
    }

    /// Command the user can run to retry by hand
    pub fn manual_command(&self) -> String {
        format!(
            "cd {} && {}",
            self.destination.display(),
            self.package_manager.install_hint()
        )
    }
}

/// Runs install commands one at a time, each bounded by a timeout
#[derive(Debug, Clone)]
pub struct Installer {
    timeout: Duration,
    command: Option<InstallCommand>,
}

impl Default for Installer {
    fn default() -> Self {
        Self::new()
    }
}

impl Installer {
    pub fn new() -> Self {
        Self {
            timeout: INSTALL_TIMEOUT,
            command: None,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            command: None,
        }
    }

    /// Run `command` instead of the chosen manager's own install command
    pub fn with_command(mut self, command: InstallCommand) -> Self {
        self.command = Some(command);
        self
    }

    /// Install dependencies in `destination`
    pub async fn install(&self, package_manager: PackageManager, destination: &Path) -> InstallOutcome {
        let command = self
            .command
            .clone()
            .unwrap_or_else(|| InstallCommand::for_manager(package_manager));
        self.run(package_manager, &command, destination).await
    }

    /// Run `command` with `destination` as working directory.
    /// Stdout is discarded; stderr is kept for the failure message.
    pub async fn run(
        &self,
        package_manager: PackageManager,
        command: &InstallCommand,
        destination: &Path,
    ) -> InstallOutcome {
        tracing::debug!(%command, destination = %destination.display(), "running install");

        let child = TokioCommand::new(&command.program)
            .args(&command.args)
            .current_dir(destination)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(e) => {
                return InstallOutcome::failure(
                    package_manager,
                    destination,
                    format!("Failed to run `{}`: {}", command, e),
                );
            }
        };

        // Dropping the future on timeout kills the child (kill_on_drop)
        match timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) if output.status.success() => {
                InstallOutcome::success(package_manager, destination)
            }
            Ok(Ok(output)) => {
                let code = output
                    .status
                    .code()
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "signal".to_string());
                let mut message = format!("`{}` exited with code {}", command, code);
                let snippet = stderr_snippet(&output.stderr);
                if !snippet.is_empty() {
                    message.push('\n');
                    message.push_str(&snippet);
                }
                InstallOutcome::failure(package_manager, destination, message)
            }
            Ok(Err(e)) => InstallOutcome::failure(
                package_manager,
                destination,
                format!("Failed to wait for `{}`: {}", command, e),
            ),
            Err(_) => InstallOutcome::failure(
                package_manager,
                destination,
                format!(
                    "`{}` timed out after {} seconds",
                    command,
                    self.timeout.as_secs()
                ),
            ),
        }
    }
}

/// Last lines of stderr, trimmed
fn stderr_snippet(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.trim_end().lines().collect();
    let start = lines.len().saturating_sub(STDERR_SNIPPET_LINES);
    lines[start..].join("\n")
}
