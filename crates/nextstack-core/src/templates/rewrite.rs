//! Post-copy rewriting of the environment file and project manifest

use crate::error::{Result, ScaffoldError};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub const ENV_TEMPLATE: &str = ".env.example";
pub const ENV_FILE: &str = ".env";
pub const MANIFEST_FILE: &str = "package.json";

/// Manifest field holding the project identity
pub const IDENTITY_FIELD: &str = "name";

/// What the rewriter changed in one sub-project
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub env_file_created: bool,
    pub manifest_rewritten: bool,
}

/// Derive `.env` and rename the manifest after the directory's base name
pub fn rewrite_project(destination: &Path) -> Result<RewriteOutcome> {
    let env_file_created = create_env_file(destination)?;

    let name = destination
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| ScaffoldError::Manifest {
            path: destination.join(MANIFEST_FILE),
            message: "destination has no directory name".to_string(),
        })?;
    let manifest_rewritten = rewrite_manifest(destination, &name)?;

    Ok(RewriteOutcome {
        env_file_created,
        manifest_rewritten,
    })
}

/// Copy `.env.example` to `.env` byte for byte. A missing template is a no-op.
pub fn create_env_file(dir: &Path) -> Result<bool> {
    let source = dir.join(ENV_TEMPLATE);
    if !source.is_file() {
        return Ok(false);
    }

    let target = dir.join(ENV_FILE);
    fs::copy(&source, &target).map_err(|e| ScaffoldError::fs("copy", &target, e))?;
    Ok(true)
}

/// Set the manifest's identity field to `name`. A missing manifest is a no-op.
///
/// Key order is preserved and the file is written with two-space indentation
/// and a trailing newline.
pub fn rewrite_manifest(dir: &Path, name: &str) -> Result<bool> {
    let path = dir.join(MANIFEST_FILE);
    if !path.is_file() {
        return Ok(false);
    }

    let bytes = fs::read(&path).map_err(|e| ScaffoldError::fs("read", &path, e))?;
    let mut manifest: Value = serde_json::from_slice(&bytes).map_err(|e| ScaffoldError::Manifest {
        path: path.clone(),
        message: e.to_string(),
    })?;

    let Some(fields) = manifest.as_object_mut() else {
        return Err(ScaffoldError::Manifest {
            path,
            message: "expected a JSON object at the top level".to_string(),
        });
    };
    fields.insert(IDENTITY_FIELD.to_string(), Value::String(name.to_string()));

    let mut output = serde_json::to_string_pretty(&manifest).map_err(|e| ScaffoldError::Manifest {
        path: path.clone(),
        message: e.to_string(),
    })?;
    output.push('\n');
    fs::write(&path, output).map_err(|e| ScaffoldError::fs("write", &path, e))?;

    tracing::debug!(manifest = %path.display(), name, "manifest identity rewritten");
    Ok(true)
}
