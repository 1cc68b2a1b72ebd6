use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::error::AppError;

/// File name of the npm manifest at the application root.
pub const MANIFEST_FILE: &str = "package.json";

/// In-memory model of an application's `package.json`.
///
/// Only the fields the tool inspects or edits are typed; everything else
/// is carried through `rest` untouched, so a rewrite never drops keys the
/// application owner put there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Runtime dependency table. The tool never writes it, so key presence
    /// is preserved exactly as found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<BTreeMap<String, String>>,

    /// Development dependency table, the merge target.
    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,

    /// All remaining manifest fields, preserved verbatim.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl PackageManifest {
    /// Parse a manifest from its JSON text.
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        serde_json::from_str(content).map_err(|err| AppError::MalformedManifest(err.to_string()))
    }

    /// Whether the runtime dependency table contains `name`.
    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.as_ref().is_some_and(|deps| deps.contains_key(name))
    }

    /// Serialize the manifest back to pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String, AppError> {
        let rendered = serde_json::to_string_pretty(self)
            .map_err(|err| AppError::Internal(format!("Failed to serialize package.json: {}", err)))?;
        Ok(format!("{}\n", rendered))
    }
}
