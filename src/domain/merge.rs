//! Dependency merge: the single mutation the tool performs on a manifest.

use crate::domain::flavor::AppFlavor;
use crate::domain::gate::should_write;
use crate::domain::manifest::PackageManifest;
use crate::domain::versions::{
    ANGULAR_COMPILER_CLI, BUILD_ANGULAR_MARKER, DependencyPin, NGTOOLS_WEBPACK, NS_DEV_WEBPACK,
};

/// Outcome of merging the proposed build-tool entries into a manifest.
#[derive(Debug)]
pub struct MergeOutcome {
    /// The manifest with its `devDependencies` table updated.
    pub manifest: PackageManifest,
    /// Entries written under a previously absent key.
    pub added: Vec<DependencyPin>,
    /// Entries that replaced an existing value (force only).
    pub updated: Vec<DependencyPin>,
    /// Entries left untouched because a value was already present.
    pub skipped: Vec<DependencyPin>,
}

/// Build the list of entries a flavor wants in `devDependencies`.
///
/// The `@ngtools/webpack` proposal is withdrawn when the manifest already
/// carries the `@angular-devkit/build-angular` key. Only the key's
/// presence matters; its value is never read.
fn proposed_entries(flavor: AppFlavor, manifest: &PackageManifest) -> Vec<DependencyPin> {
    let mut entries = vec![NS_DEV_WEBPACK];

    match flavor {
        AppFlavor::JavaScript | AppFlavor::TypeScript => {}
        AppFlavor::Angular => {
            entries.push(ANGULAR_COMPILER_CLI);
            if !manifest.dev_dependencies.contains_key(BUILD_ANGULAR_MARKER) {
                entries.push(NGTOOLS_WEBPACK);
            }
        }
    }

    entries
}

/// Merge the flavor's build-tool entries into the manifest.
///
/// Each proposed entry is gated independently: an absent key is written,
/// an existing key is kept unless `force` is set. Keys outside the
/// proposed set are never touched, whatever the flags.
pub fn merge(manifest: PackageManifest, flavor: AppFlavor, force: bool) -> MergeOutcome {
    let mut manifest = manifest;
    let mut added = Vec::new();
    let mut updated = Vec::new();
    let mut skipped = Vec::new();

    for entry in proposed_entries(flavor, &manifest) {
        let exists = manifest.dev_dependencies.contains_key(entry.name);
        if should_write(exists, force) {
            manifest
                .dev_dependencies
                .insert(entry.name.to_string(), entry.version.to_string());
            if exists {
                updated.push(entry);
            } else {
                added.push(entry);
            }
        } else {
            skipped.push(entry);
        }
    }

    MergeOutcome { manifest, added, updated, skipped }
}
