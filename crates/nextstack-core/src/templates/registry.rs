//! Immutable mapping from template name to descriptor
//!
//! The registry is built once from the template store and handed to the
//! pipeline; nothing looks templates up from ambient state.

use super::manifest::{RootManifest, TemplateEntry, STORE_MANIFEST};
use crate::error::{Result, ScaffoldError};
use crate::input::TemplateName;
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Base names never copied out of a template, at any depth
pub const EXCLUDED_NAMES: &[&str] = &[
    // build caches and installed dependencies
    "node_modules",
    ".next",
    ".turbo",
    // dependency lock artifacts
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "bun.lockb",
    "bun.lock",
    // version control
    ".git",
    // OS metadata
    ".DS_Store",
    "Thumbs.db",
    // local environment files
    ".env",
    ".env.local",
];

/// Set of base names to skip while copying
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionRules {
    names: BTreeSet<String>,
}

impl ExclusionRules {
    /// The fixed exclusion set
    pub fn standard() -> Self {
        Self {
            names: EXCLUDED_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Extend (never replace) the set with extra names
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(extra.into_iter().map(Into::into));
        self
    }

    pub fn is_excluded(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.names.contains(n))
    }
}

impl Default for ExclusionRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// One template tree in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub name: TemplateName,
    pub source_root: PathBuf,
    pub description: String,
    pub exclusion_rules: ExclusionRules,
}

impl TemplateDescriptor {
    fn builtin(store: &Path, name: TemplateName) -> Self {
        let description = match name {
            TemplateName::Web => "Just the landing page/web application",
            TemplateName::Admin => "Just the admin panel",
        };
        Self {
            name,
            source_root: store.join(name.as_str()),
            description: description.to_string(),
            exclusion_rules: ExclusionRules::standard(),
        }
    }
}

/// Every template the pipeline can materialize
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    root: PathBuf,
    version: Option<String>,
    descriptors: BTreeMap<TemplateName, TemplateDescriptor>,
}

impl TemplateRegistry {
    /// Registry with the default layout: `<store>/web` and `<store>/admin`
    pub fn builtin(store: &Path) -> Self {
        Self {
            root: store.to_path_buf(),
            version: None,
            descriptors: TemplateName::ALL
                .iter()
                .map(|name| (*name, TemplateDescriptor::builtin(store, *name)))
                .collect(),
        }
    }

    /// Load the store at `store`, applying `template.yaml` when present
    pub fn load(store: &Path) -> Result<Self> {
        let manifest_path = store.join(STORE_MANIFEST);
        if !manifest_path.is_file() {
            tracing::debug!(store = %store.display(), "no store manifest, using built-in descriptors");
            return Ok(Self::builtin(store));
        }

        let content = fs::read_to_string(&manifest_path)
            .map_err(|e| ScaffoldError::fs("read", &manifest_path, e))?;
        let manifest = RootManifest::parse(&content).map_err(|e| {
            ScaffoldError::TemplateStore(format!("{}: {}", manifest_path.display(), e))
        })?;

        Self::from_manifest(store, manifest)
    }

    pub fn from_manifest(store: &Path, manifest: RootManifest) -> Result<Self> {
        let mut registry = Self::builtin(store);
        registry.version = manifest.version;

        for name in manifest.templates.keys() {
            if !TemplateName::ALL.iter().any(|t| t.as_str() == name) {
                return Err(ScaffoldError::TemplateStore(format!(
                    "unknown template '{}' in {}",
                    name, STORE_MANIFEST
                )));
            }
        }

        for descriptor in registry.descriptors.values_mut() {
            let entry = manifest
                .templates
                .get(descriptor.name.as_str())
                .cloned()
                .unwrap_or_default();
            apply_entry(store, descriptor, entry, &manifest.exclude);
        }

        Ok(registry)
    }

    pub fn get(&self, name: TemplateName) -> &TemplateDescriptor {
        // builtin() seeds every TemplateName, and nothing removes entries
        &self.descriptors[&name]
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &TemplateDescriptor> {
        self.descriptors.values()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Minimum CLI version declared by the store
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

fn apply_entry(
    store: &Path,
    descriptor: &mut TemplateDescriptor,
    entry: TemplateEntry,
    shared_exclude: &[String],
) {
    if let Some(description) = entry.description {
        descriptor.description = description;
    }
    if let Some(path) = entry.path {
        descriptor.source_root = store.join(path);
    }
    descriptor.exclusion_rules = ExclusionRules::standard()
        .with_extra(shared_exclude.iter().cloned())
        .with_extra(entry.exclude);
}
