//! Package manager detection for npm, Yarn, pnpm, and Bun

use std::fmt;
use std::process::{Command, Stdio};

/// Supported package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Yarn,
        PackageManager::Pnpm,
        PackageManager::Bun,
    ];

    /// Used when nothing else is detected or available
    pub const BASELINE: PackageManager = PackageManager::Npm;

    pub fn name(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pm| pm.name() == name)
    }

    /// Executable to spawn; the Node-based managers are `.cmd` shims on Windows
    pub fn program(&self) -> String {
        if cfg!(windows) && *self != PackageManager::Bun {
            format!("{}.cmd", self.name())
        } else {
            self.name().to_string()
        }
    }

    /// Infer the preferred manager from a user agent hint like `pnpm/9.1.0 node/v20`
    pub fn detect(user_agent: Option<&str>) -> Self {
        user_agent
            .and_then(|ua| ua.split_whitespace().next())
            .and_then(|first| first.split('/').next())
            .and_then(Self::from_name)
            .unwrap_or(Self::BASELINE)
    }

    /// `<pm> run <script>` as shown to the user
    pub fn run_script(&self, script: &str) -> String {
        format!("{} run {}", self.name(), script)
    }

    /// `<pm> install` as shown to the user
    pub fn install_hint(&self) -> String {
        format!("{} install", self.name())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Package manager probe result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub package_manager: PackageManager,
    pub version: Option<String>,
    pub available: bool,
}

/// Check whether a package manager answers `--version`
pub fn check_package_manager(package_manager: PackageManager) -> RuntimeInfo {
    let output = Command::new(package_manager.program())
        .arg("--version")
        .stdin(Stdio::null())
        .output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            tracing::debug!(%package_manager, %version, "package manager available");
            RuntimeInfo {
                package_manager,
                version: Some(version),
                available: true,
            }
        }
        _ => {
            tracing::debug!(%package_manager, "package manager not available");
            RuntimeInfo {
                package_manager,
                version: None,
                available: false,
            }
        }
    }
}

/// Probe every known manager, keeping the available ones in canonical order
pub fn available_package_managers<F>(is_available: F) -> Vec<PackageManager>
where
    F: Fn(PackageManager) -> bool,
{
    PackageManager::ALL
        .into_iter()
        .filter(|pm| is_available(*pm))
        .collect()
}

/// Choices offered to the user and the index pre-selected.
///
/// With nothing available the list degrades to the baseline manager alone.
pub fn install_choices(
    available: &[PackageManager],
    detected: PackageManager,
) -> (Vec<PackageManager>, usize) {
    let choices = if available.is_empty() {
        vec![PackageManager::BASELINE]
    } else {
        available.to_vec()
    };
    let default = choices.iter().position(|pm| *pm == detected).unwrap_or(0);
    (choices, default)
}
