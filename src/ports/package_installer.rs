use crate::domain::AppError;

/// Package-manager access for materializing merged dependency entries.
pub trait PackageInstaller {
    /// Run a dependency install at the application root.
    fn install(&self) -> Result<(), AppError>;
}
