//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to define its identity, where its
//! templates live, and what to tell the user once a project exists.

use crate::input::TemplateKind;
use crate::runtime::PackageManager;
use std::path::Path;

/// Configuration trait for the scaffolding CLI
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Environment variable name for overriding the template store location
    fn template_dir_env(&self) -> &'static str;

    /// Template store baked in at compile time, used when nothing else is found
    fn default_template_dir(&self) -> &'static str;

    /// Upgrade/install command shown in version warnings
    fn upgrade_command(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(
        &self,
        dir: &Path,
        kind: TemplateKind,
        package_manager: PackageManager,
        installed: bool,
    ) -> Vec<String>;
}
