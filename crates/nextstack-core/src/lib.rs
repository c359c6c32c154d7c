//! Next Stack Core - Shared library for the create-nextjs-stack CLI
//!
//! This library scaffolds Next.js `web` and `admin` projects from a local
//! template store. The binary supplies product configuration and a front end;
//! everything else lives here.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Template copying, manifest and environment
//!   rewriting, package manager detection and installation
//! - **Layer 2: Workflow Orchestration** - [`Pipeline`] sequences a run against
//!   any [`Frontend`], so it can be driven by a terminal or a test script
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based terminal front end
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use nextstack_core::{CreateArgs, Environment, Pipeline, ScriptedFrontend, TemplateRegistry};
//!
//! let registry = TemplateRegistry::load(Path::new("templates"))?;
//! let env = Environment::default();
//! let pipeline = Pipeline::new(&registry, &env, std::env::current_dir()?);
//! let args = CreateArgs {
//!     directory: Some("demo".into()),
//!     template: Some("admin".into()),
//!     skip_install: true,
//!     ..CreateArgs::default()
//! };
//! let report = pipeline.run(&args, &mut ScriptedFrontend::default()).await?;
//! ```

pub mod config;
pub mod error;
pub mod frontend;
pub mod input;
pub mod pipeline;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
mod testing;

// Re-export main types for convenience
pub use config::Environment;
pub use error::{Result, ScaffoldError};
pub use frontend::{Answer, Frontend, PipelineEvent, ScriptedFrontend};
pub use input::{CreateArgs, ScaffoldRequest, TemplateKind, TemplateName};
pub use pipeline::{InstallStep, MaterializationResult, Pipeline, RunReport, SkipReason};
pub use product::ProductConfig;
pub use runtime::{InstallOutcome, PackageManager};
pub use templates::{TemplateDescriptor, TemplateRegistry};

#[cfg(feature = "tui")]
pub use tui::run;

/// CLI version - used for template compatibility checking
/// The binary passes its own version, but this provides a fallback
pub const DEFAULT_CLI_VERSION: &str = "0.1.0";
