use serde::Serialize;

use crate::domain::{AppError, AppFlavor, PackageManifest};

/// Variables exposed to config templates.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateVars {
    /// Application name, taken from the manifest when present.
    pub name: String,
}

impl TemplateVars {
    /// Build template variables from a manifest.
    pub fn for_manifest(manifest: &PackageManifest) -> Self {
        Self {
            name: manifest
                .name
                .clone()
                .unwrap_or_else(|| "nativescript-app".to_string()),
        }
    }
}

/// Source of the generated build configuration files.
pub trait TemplateStore {
    /// Render the webpack configuration for a flavor.
    fn webpack_config(&self, flavor: AppFlavor, vars: &TemplateVars) -> Result<String, AppError>;

    /// Render the TypeScript compiler configuration used by webpack builds.
    fn tns_tsconfig(&self, vars: &TemplateVars) -> Result<String, AppError>;
}
