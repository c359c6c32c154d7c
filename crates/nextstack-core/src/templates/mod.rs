//! Template store access, materialization, and rewriting
//!
//! This module provides:
//! - Store manifest types (`template.yaml`)
//! - The immutable [`TemplateRegistry`] of template descriptors
//! - Template copying with exclusion filtering
//! - Environment file and project manifest rewriting
//! - Version compatibility checking

pub mod copier;
pub mod manifest;
pub mod registry;
pub mod rewrite;
pub mod version;

pub use copier::copy_template;
pub use manifest::{RootManifest, TemplateEntry};
pub use registry::{ExclusionRules, TemplateDescriptor, TemplateRegistry, EXCLUDED_NAMES};
pub use rewrite::{rewrite_project, RewriteOutcome};
pub use version::check_compatibility;
