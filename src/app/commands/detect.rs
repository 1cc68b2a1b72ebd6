//! Detect command: read-only flavor inspection.

use crate::domain::{AppError, AppFlavor, MANIFEST_FILE, PackageManifest};
use crate::ports::ProjectStore;

/// Execute the detect command.
///
/// Classifies the application without touching anything on disk.
pub fn execute<P: ProjectStore>(project: &P) -> Result<AppFlavor, AppError> {
    if !project.exists(MANIFEST_FILE) {
        return Err(AppError::MissingManifest);
    }

    let manifest = PackageManifest::from_json(&project.read_file(MANIFEST_FILE)?)?;
    Ok(AppFlavor::detect(&manifest))
}
