use std::path::PathBuf;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::PackageInstaller;

/// Installer that shells out to the `npm` binary at the application root.
#[derive(Debug, Clone)]
pub struct NpmCommandInstaller {
    root: PathBuf,
}

impl NpmCommandInstaller {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn run(&self, args: &[&str]) -> Result<(), AppError> {
        let output = Command::new("npm")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| AppError::NpmError {
                command: args.join(" "),
                details: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::NpmError {
                command: args.join(" "),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(())
    }
}

impl PackageInstaller for NpmCommandInstaller {
    fn install(&self) -> Result<(), AppError> {
        self.run(&["install"])
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn a_failed_invocation_reports_the_command() {
        let dir = TempDir::new().unwrap();
        let installer = NpmCommandInstaller::new(dir.path().to_path_buf());

        // The temp directory has no package.json, so any failure mode of the
        // local npm (or its absence) must surface as NpmError, never a panic.
        if let Err(err) = installer.run(&["run", "definitely-not-a-script"]) {
            assert!(matches!(err, AppError::NpmError { .. }));
            assert!(err.to_string().contains("npm run definitely-not-a-script"));
        }
    }
}
