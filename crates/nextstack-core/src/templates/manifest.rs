//! Template store manifest types and parsing

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// File name of the optional store description at the store root
pub const STORE_MANIFEST: &str = "template.yaml";

/// Root template manifest (templates/template.yaml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RootManifest {
    /// Minimum CLI version the templates were written for (semver)
    #[serde(default)]
    pub version: Option<String>,

    /// Per-template overrides keyed by template name (`web`, `admin`)
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateEntry>,

    /// Extra base names excluded from every template
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Per-template entry in the root manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateEntry {
    /// Description shown when the template is listed
    #[serde(default)]
    pub description: Option<String>,

    /// Directory relative to the store root (defaults to the template name)
    #[serde(default)]
    pub path: Option<String>,

    /// Extra base names excluded from this template only
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl RootManifest {
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}
