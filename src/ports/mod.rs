//! Port traits decoupling command logic from storage, templates, and
//! the package manager. Services provide the production implementations;
//! tests swap in mocks.

mod package_installer;
mod project_store;
mod template_store;

pub use package_installer::PackageInstaller;
pub use project_store::ProjectStore;
pub use template_store::{TemplateStore, TemplateVars};
