//! Template tree copying with exclusion filtering

use super::registry::TemplateDescriptor;
use crate::error::{Result, ScaffoldError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copy a template tree into `destination`, returning the number of files written.
///
/// Excluded names are pruned during the walk, so an excluded directory is
/// never descended into. The first I/O failure aborts the copy and leaves
/// whatever was already written in place.
pub fn copy_template(descriptor: &TemplateDescriptor, destination: &Path) -> Result<usize> {
    let source = &descriptor.source_root;
    if !source.is_dir() {
        return Err(ScaffoldError::fs(
            "read template",
            source,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("template '{}' not found", descriptor.name),
            ),
        ));
    }

    if resolve_existing(destination).starts_with(resolve_existing(source)) {
        return Err(ScaffoldError::fs(
            "copy template into",
            destination,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("destination is inside template '{}'", descriptor.name),
            ),
        ));
    }

    fs::create_dir_all(destination)
        .map_err(|e| ScaffoldError::fs("create directory", destination, e))?;

    let rules = &descriptor.exclusion_rules;
    let mut copied = 0;

    let walker = WalkDir::new(source)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !rules.is_excluded(entry.file_name()));

    for entry in walker {
        let entry = entry.map_err(|e| walk_error(source, e))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| ScaffoldError::Unknown(e.into()))?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|e| ScaffoldError::fs("create directory", &target, e))?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .map_err(|e| ScaffoldError::fs("create directory", parent, e))?;
            }
            fs::copy(entry.path(), &target).map_err(|e| ScaffoldError::fs("copy", &target, e))?;
            copied += 1;
        }
    }

    tracing::debug!(
        template = %descriptor.name,
        destination = %destination.display(),
        copied,
        "template copied"
    );

    Ok(copied)
}

/// Canonical form of the deepest existing ancestor, with the rest appended
fn resolve_existing(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    for ancestor in absolute.ancestors() {
        if let Ok(canonical) = fs::canonicalize(ancestor) {
            return match absolute.strip_prefix(ancestor) {
                Ok(rest) => canonical.join(rest),
                Err(_) => canonical,
            };
        }
    }
    absolute
}

fn walk_error(source: &Path, err: walkdir::Error) -> ScaffoldError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| source.to_path_buf());
    let message = err.to_string();
    let io = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    ScaffoldError::fs("read template", path, io)
}
