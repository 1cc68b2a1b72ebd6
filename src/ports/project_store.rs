use crate::domain::AppError;

/// Storage access for the application directory being provisioned.
///
/// Paths are relative to the application root. Implementations decide what
/// the root is: a filesystem directory in production, an in-memory tree in
/// tests.
pub trait ProjectStore {
    /// Whether a file exists at the given relative path.
    fn exists(&self, path: &str) -> bool;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write a file, replacing any existing content.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;
}
