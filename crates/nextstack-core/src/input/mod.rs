//! Input resolution: command-line arguments plus interactive answers
//!
//! This module provides:
//! - The template kinds a run can produce
//! - The validated, immutable [`ScaffoldRequest`]
//! - The resolver that turns [`CreateArgs`] into a request

pub mod resolver;

use crate::error::{Result, ScaffoldError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub use resolver::{prepare_target, resolve_request};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project directory to create
    pub directory: Option<PathBuf>,

    /// Raw `--template` value, validated by the resolver
    pub template: Option<String>,

    /// Local directory to use for templates instead of the default store
    pub template_dir: Option<PathBuf>,

    /// Auto-confirm all prompts
    pub yes: bool,

    /// Skip dependency installation
    pub skip_install: bool,
}

/// What a run generates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Web,
    Admin,
    FullStack,
}

impl TemplateKind {
    /// Menu order; the first entry is the default selection
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::FullStack,
        TemplateKind::Web,
        TemplateKind::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Web => "web",
            TemplateKind::Admin => "admin",
            TemplateKind::FullStack => "full-stack",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TemplateKind::Web => "Web Only (Next.js Landing)",
            TemplateKind::Admin => "Admin Only (Supabase Admin)",
            TemplateKind::FullStack => "Full Stack (Web + Admin)",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            TemplateKind::Web => "Just the landing page/web application",
            TemplateKind::Admin => "Just the admin panel",
            TemplateKind::FullStack => "Creates both web and admin projects in subdirectories",
        }
    }

    /// Accepted flag values, phrased for error messages
    pub fn expected_values() -> String {
        let values: Vec<&str> = [TemplateKind::Web, TemplateKind::Admin, TemplateKind::FullStack]
            .iter()
            .map(|k| k.as_str())
            .collect();
        format!("one of: {}", values.join(", "))
    }

    /// Sub-projects to materialize under `root`, in execution order
    pub fn sub_projects(&self, root: &Path) -> Vec<SubProject> {
        match self {
            TemplateKind::Web => vec![SubProject::new(TemplateName::Web, root.to_path_buf())],
            TemplateKind::Admin => vec![SubProject::new(TemplateName::Admin, root.to_path_buf())],
            TemplateKind::FullStack => [TemplateName::Web, TemplateName::Admin]
                .into_iter()
                .map(|name| SubProject::new(name, root.join(name.as_str())))
                .collect(),
        }
    }
}

impl FromStr for TemplateKind {
    type Err = ScaffoldError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "web" => Ok(TemplateKind::Web),
            "admin" => Ok(TemplateKind::Admin),
            "full-stack" => Ok(TemplateKind::FullStack),
            other => Err(ScaffoldError::InvalidArgument {
                name: "template",
                value: other.to_string(),
                expected: TemplateKind::expected_values(),
            }),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single template tree in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateName {
    Web,
    Admin,
}

impl TemplateName {
    pub const ALL: [TemplateName; 2] = [TemplateName::Web, TemplateName::Admin];

    /// Directory name in the store, and subdirectory name in full-stack output
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::Web => "web",
            TemplateName::Admin => "admin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateName::Web => "Web",
            TemplateName::Admin => "Admin",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One template materialized into one destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubProject {
    pub template: TemplateName,
    pub destination: PathBuf,
}

impl SubProject {
    pub fn new(template: TemplateName, destination: PathBuf) -> Self {
        Self {
            template,
            destination,
        }
    }
}

/// A fully resolved scaffold request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    target_path: PathBuf,
    template_kind: TemplateKind,
    overwrite_confirmed: bool,
    app_name: String,
}

impl ScaffoldRequest {
    /// Build a request; `target_path` must be absolute and have a base name
    pub fn new(
        target_path: PathBuf,
        template_kind: TemplateKind,
        overwrite_confirmed: bool,
    ) -> Result<Self> {
        if !target_path.is_absolute() {
            return Err(ScaffoldError::InvalidArgument {
                name: "project directory",
                value: target_path.display().to_string(),
                expected: "an absolute path".to_string(),
            });
        }
        let app_name = target_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ScaffoldError::InvalidArgument {
                name: "project directory",
                value: target_path.display().to_string(),
                expected: "a path ending in a directory name".to_string(),
            })?;

        Ok(Self {
            target_path,
            template_kind,
            overwrite_confirmed,
            app_name,
        })
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    pub fn template_kind(&self) -> TemplateKind {
        self.template_kind
    }

    pub fn overwrite_confirmed(&self) -> bool {
        self.overwrite_confirmed
    }

    /// Base name of the target path
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn sub_projects(&self) -> Vec<SubProject> {
        self.template_kind.sub_projects(&self.target_path)
    }
}
