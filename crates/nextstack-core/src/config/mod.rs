//! Runtime configuration read from the process environment
//!
//! The environment is captured once into an [`Environment`] snapshot and
//! passed down explicitly, so nothing below the binary reads `std::env`.

use crate::product::ProductConfig;
use std::path::{Path, PathBuf};

/// Set by npm-compatible package managers when they launch a binary
pub const USER_AGENT_VAR: &str = "npm_config_user_agent";

/// Marks the run as automated; installation prompts are skipped
pub const TEST_MARKER_VAR: &str = "NODE_ENV";
pub const TEST_MARKER_VALUE: &str = "test";

/// Snapshot of the environment variables the pipeline consumes
#[derive(Debug, Clone, Default)]
pub struct Environment {
    /// Package manager hint, e.g. `pnpm/9.1.0 npm/? node/v20.11.0 linux x64`
    pub user_agent: Option<String>,

    /// Whether the test marker is present
    pub test_mode: bool,

    /// Template store override
    pub template_dir: Option<PathBuf>,
}

impl Environment {
    /// Capture the current process environment
    pub fn from_process<C: ProductConfig>(config: &C) -> Self {
        Self::from_lookup(config, |key| std::env::var(key).ok())
    }

    /// Build from an arbitrary lookup function
    pub fn from_lookup<C, F>(config: &C, lookup: F) -> Self
    where
        C: ProductConfig,
        F: Fn(&str) -> Option<String>,
    {
        Self {
            user_agent: lookup(USER_AGENT_VAR).filter(|v| !v.is_empty()),
            test_mode: lookup(TEST_MARKER_VAR).is_some_and(|v| v == TEST_MARKER_VALUE),
            template_dir: lookup(config.template_dir_env())
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Whether installation must be skipped without prompting
    pub fn is_non_interactive(&self) -> bool {
        self.test_mode
    }
}

/// Locate the template store.
///
/// Precedence: explicit flag, environment override, `templates/` next to the
/// executable, then the product's compile-time default.
pub fn locate_template_store<C: ProductConfig>(
    config: &C,
    flag: Option<&Path>,
    env: &Environment,
) -> PathBuf {
    if let Some(dir) = flag {
        return dir.to_path_buf();
    }
    if let Some(dir) = &env.template_dir {
        return dir.clone();
    }
    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("templates")))
        .filter(|dir| dir.is_dir())
    {
        return dir;
    }
    PathBuf::from(config.default_template_dir())
}
