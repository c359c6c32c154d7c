//! Turns arguments and answers into a [`ScaffoldRequest`]
//!
//! Nothing in this module writes to disk except [`prepare_target`], which the
//! pipeline calls only once a request is fully resolved.

use super::{CreateArgs, ScaffoldRequest, TemplateKind, TemplateName};
use crate::error::{Result, ScaffoldError};
use crate::frontend::{Choice, ConfirmQuestion, Frontend, SelectQuestion, TextQuestion};
use crate::templates::TemplateRegistry;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Suggested name for the project directory prompt
pub const DEFAULT_PROJECT_NAME: &str = "my-awesome-project";

/// What currently sits at the target path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TargetState {
    Missing,
    Empty,
    NonEmpty(usize),
}

/// Resolve a request, asking `frontend` for anything the arguments left out.
///
/// An unrecognized `--template` value fails before any question is asked or
/// the filesystem is touched. `registry` supplies the menu descriptions.
pub fn resolve_request<F: Frontend>(
    args: &CreateArgs,
    frontend: &mut F,
    cwd: &Path,
    registry: &TemplateRegistry,
) -> Result<ScaffoldRequest> {
    let flag_kind = args
        .template
        .as_deref()
        .map(str::parse::<TemplateKind>)
        .transpose()?;

    let directory = match &args.directory {
        Some(dir) if !dir.as_os_str().is_empty() => dir.clone(),
        Some(_) => return Err(no_project_name()),
        None => frontend
            .text(&project_name_question())?
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .ok_or_else(no_project_name)?,
    };

    let target = std::path::absolute(cwd.join(&directory))
        .map(|path| normalize(&path))
        .map_err(|e| ScaffoldError::fs("resolve", &directory, e))?;

    let kind = match flag_kind {
        Some(kind) => kind,
        None => frontend
            .select(&template_question(registry))?
            .ok_or_else(|| ScaffoldError::cancelled("Operation cancelled."))?
            .parse()?,
    };

    let overwrite_confirmed = match inspect_target(&target)? {
        TargetState::Missing | TargetState::Empty => false,
        TargetState::NonEmpty(count) => {
            tracing::debug!(path = %target.display(), count, "target directory is not empty");
            let name = target
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| target.display().to_string());
            let confirmed = args.yes || frontend.confirm(&overwrite_question(&name))? == Some(true);
            if !confirmed {
                return Err(ScaffoldError::cancelled("Aborting installation."));
            }
            true
        }
    };

    ScaffoldRequest::new(target, kind, overwrite_confirmed)
}

/// Fold `.` and `..` out of an absolute path without touching the filesystem.
/// `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Clear a confirmed target, or create a missing one with its parents.
///
/// Returns whether existing contents were removed. The directory entry itself
/// is kept.
pub fn prepare_target(request: &ScaffoldRequest) -> Result<bool> {
    let target = request.target_path();
    let mut cleared = false;

    if request.overwrite_confirmed() && target.is_dir() {
        empty_dir(target)?;
        cleared = true;
    }

    fs::create_dir_all(target).map_err(|e| ScaffoldError::fs("create directory", target, e))?;
    Ok(cleared)
}

fn empty_dir(dir: &Path) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| ScaffoldError::fs("read directory", dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ScaffoldError::fs("read directory", dir, e))?;
        let path = entry.path();
        let file_type = entry
            .file_type()
            .map_err(|e| ScaffoldError::fs("inspect", &path, e))?;
        if file_type.is_dir() {
            fs::remove_dir_all(&path).map_err(|e| ScaffoldError::fs("remove", &path, e))?;
        } else {
            fs::remove_file(&path).map_err(|e| ScaffoldError::fs("remove", &path, e))?;
        }
    }
    Ok(())
}

fn inspect_target(target: &Path) -> Result<TargetState> {
    let metadata = match fs::metadata(target) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(TargetState::Missing),
        Err(e) => return Err(ScaffoldError::fs("inspect", target, e)),
    };

    if !metadata.is_dir() {
        return Err(ScaffoldError::fs(
            "use",
            target,
            io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory"),
        ));
    }

    let count = fs::read_dir(target)
        .map_err(|e| ScaffoldError::fs("read directory", target, e))?
        .count();
    Ok(if count == 0 {
        TargetState::Empty
    } else {
        TargetState::NonEmpty(count)
    })
}

fn no_project_name() -> ScaffoldError {
    ScaffoldError::cancelled("Operation cancelled. No project name provided.")
}

pub fn project_name_question() -> TextQuestion {
    TextQuestion {
        message: "What is your project named?".to_string(),
        default: Some(DEFAULT_PROJECT_NAME.to_string()),
    }
}

pub fn template_question(registry: &TemplateRegistry) -> SelectQuestion {
    SelectQuestion {
        message: "Which template would you like to generate?".to_string(),
        choices: TemplateKind::ALL
            .iter()
            .map(|kind| {
                let hint = match kind {
                    TemplateKind::Web => registry.get(TemplateName::Web).description.clone(),
                    TemplateKind::Admin => registry.get(TemplateName::Admin).description.clone(),
                    TemplateKind::FullStack => kind.hint().to_string(),
                };
                Choice {
                    value: kind.as_str().to_string(),
                    label: kind.title().to_string(),
                    hint,
                }
            })
            .collect(),
        default: 0,
    }
}

pub fn overwrite_question(name: &str) -> ConfirmQuestion {
    ConfirmQuestion {
        message: format!("Directory {} is not empty. Overwrite?", name),
        default: false,
    }
}
