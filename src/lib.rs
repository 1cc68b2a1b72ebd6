//! nswp: Provision webpack build tooling for NativeScript applications.
//!
//! Classifies an application as JavaScript, TypeScript, or Angular from
//! its `package.json`, merges the pinned build-tool entries that flavor
//! needs into `devDependencies`, and generates `webpack.config.js` plus
//! `tsconfig.tns.json` behind a write-iff-absent-or-forced gate.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

use app::{
    AppContext,
    commands::{detect, install},
};
use services::{EmbeddedTemplateStore, FilesystemProjectStore};

pub use app::commands::install::{InstallOptions, InstallResult, PostInstallTask};
pub use domain::{AppError, AppFlavor, DependencyPin};

/// Provision webpack tooling for the application in the current directory.
pub fn install(options: InstallOptions) -> Result<InstallResult, AppError> {
    let project = FilesystemProjectStore::current()?;
    let templates = EmbeddedTemplateStore::new();
    let ctx = AppContext::new(project, templates);

    install::execute(&ctx, options)
}

/// Provision webpack tooling for the application at the given root.
pub fn install_at(root: impl AsRef<Path>, options: InstallOptions) -> Result<InstallResult, AppError> {
    let project = FilesystemProjectStore::new(root.as_ref().to_path_buf());
    let templates = EmbeddedTemplateStore::new();
    let ctx = AppContext::new(project, templates);

    install::execute(&ctx, options)
}

/// Detect the flavor of the application in the current directory.
pub fn detect() -> Result<AppFlavor, AppError> {
    let project = FilesystemProjectStore::current()?;
    detect::execute(&project)
}

/// Detect the flavor of the application at the given root.
pub fn detect_at(root: impl AsRef<Path>) -> Result<AppFlavor, AppError> {
    let project = FilesystemProjectStore::new(root.as_ref().to_path_buf());
    detect::execute(&project)
}
