//! Install command: merge build dependencies and generate config files.

use crate::app::AppContext;
use crate::domain::gate::should_write;
use crate::domain::merge::merge;
use crate::domain::{AppError, AppFlavor, DependencyPin, MANIFEST_FILE, PackageManifest};
use crate::ports::{ProjectStore, TemplateStore, TemplateVars};

/// Relative path of the generated webpack configuration.
pub const WEBPACK_CONFIG_FILE: &str = "webpack.config.js";

/// Relative path of the generated TypeScript build configuration.
pub const TNS_TSCONFIG_FILE: &str = "tsconfig.tns.json";

/// Options for the install command.
#[derive(Debug, Default)]
pub struct InstallOptions {
    /// Overwrite existing dependency entries and config files.
    pub force: bool,
    /// Report planned changes without applying them.
    pub dry_run: bool,
}

/// Follow-up work requested from the shell after a successful install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostInstallTask {
    /// Run a package-manager install to materialize the merged entries.
    NpmInstall,
}

/// Result of an install operation.
#[derive(Debug)]
pub struct InstallResult {
    /// Detected application flavor.
    pub flavor: AppFlavor,
    /// Dependency entries written under a previously absent key.
    pub added: Vec<DependencyPin>,
    /// Dependency entries that replaced an existing value.
    pub updated: Vec<DependencyPin>,
    /// Dependency entries left untouched.
    pub skipped: Vec<DependencyPin>,
    /// Config files written, either created or replaced.
    pub files_written: Vec<String>,
    /// Config files left untouched.
    pub files_skipped: Vec<String>,
    /// Whether changes were only planned, not applied.
    pub dry_run: bool,
    /// Side effects the shell should trigger once the result is reported.
    pub tasks: Vec<PostInstallTask>,
}

/// Execute the install command.
///
/// Reads and classifies the manifest, merges the flavor's build-tool
/// entries into `devDependencies`, writes the flavor's config files
/// behind the overwrite gate, and writes the manifest back. A missing or
/// malformed manifest fails the run before anything is written.
pub fn execute<P, T>(
    ctx: &AppContext<P, T>,
    options: InstallOptions,
) -> Result<InstallResult, AppError>
where
    P: ProjectStore,
    T: TemplateStore,
{
    let project = ctx.project();

    if !project.exists(MANIFEST_FILE) {
        return Err(AppError::MissingManifest);
    }

    let manifest = PackageManifest::from_json(&project.read_file(MANIFEST_FILE)?)?;
    let flavor = AppFlavor::detect(&manifest);

    let outcome = merge(manifest, flavor, options.force);
    let vars = TemplateVars::for_manifest(&outcome.manifest);

    // Render everything up front so a template failure aborts before the
    // first write.
    let mut planned_files = vec![(
        WEBPACK_CONFIG_FILE,
        ctx.templates().webpack_config(flavor, &vars)?,
    )];
    if flavor.uses_typescript() {
        planned_files.push((TNS_TSCONFIG_FILE, ctx.templates().tns_tsconfig(&vars)?));
    }
    let manifest_json = outcome.manifest.to_json()?;

    let mut files_written = Vec::new();
    let mut files_skipped = Vec::new();
    for (path, content) in &planned_files {
        if should_write(project.exists(path), options.force) {
            if !options.dry_run {
                project.write_file(path, content)?;
            }
            files_written.push((*path).to_string());
        } else {
            files_skipped.push((*path).to_string());
        }
    }

    if !options.dry_run {
        project.write_file(MANIFEST_FILE, &manifest_json)?;
    }

    let tasks = if options.dry_run {
        Vec::new()
    } else {
        vec![PostInstallTask::NpmInstall]
    };

    Ok(InstallResult {
        flavor,
        added: outcome.added,
        updated: outcome.updated,
        skipped: outcome.skipped,
        files_written,
        files_skipped,
        dry_run: options.dry_run,
        tasks,
    })
}
