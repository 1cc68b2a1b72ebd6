//! CLI Adapter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::commands::install::{InstallResult, PostInstallTask};
use crate::domain::AppError;
use crate::ports::PackageInstaller;
use crate::services::NpmCommandInstaller;
use crate::{InstallOptions, detect_at, install_at};

#[derive(Parser)]
#[command(name = "nswp")]
#[command(version)]
#[command(
    about = "Provision webpack build tooling for NativeScript applications",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inject build dependencies and generate webpack config files
    #[clap(visible_alias = "i")]
    Install {
        /// Overwrite existing dependency entries and config files
        #[arg(short, long)]
        force: bool,
        /// Show planned changes without applying
        #[arg(long)]
        dry_run: bool,
        /// Do not run npm install after provisioning
        #[arg(long)]
        skip_install: bool,
        /// Application directory (defaults to the current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
    /// Report the detected application flavor
    #[clap(visible_alias = "d")]
    Detect {
        /// Application directory (defaults to the current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Install { force, dry_run, skip_install, path } => {
            run_install(force, dry_run, skip_install, path)
        }
        Commands::Detect { path } => run_detect(path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_install(
    force: bool,
    dry_run: bool,
    skip_install: bool,
    path: Option<PathBuf>,
) -> Result<(), AppError> {
    let root = resolve_root(path)?;
    let result = install_at(&root, InstallOptions { force, dry_run })?;

    report_install(&result);
    run_post_install_tasks(&result, &root, skip_install);
    Ok(())
}

fn run_detect(path: Option<PathBuf>) -> Result<(), AppError> {
    let root = resolve_root(path)?;
    let flavor = detect_at(&root)?;
    println!("NativeScript {} application", flavor);
    Ok(())
}

fn resolve_root(path: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match path {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}

fn report_install(result: &InstallResult) {
    if result.dry_run {
        println!("=== Dry Run: Provisioning Plan ===\n");
    }

    println!("Detected NativeScript {} application", result.flavor);

    for entry in &result.added {
        println!("  • add {}", entry);
    }
    for entry in &result.updated {
        println!("  • overwrite {}", entry);
    }
    for entry in &result.skipped {
        println!("  • keep {} (already present)", entry.name);
    }
    for path in &result.files_written {
        println!("  • write {}", path);
    }
    for path in &result.files_skipped {
        println!("  • keep {} (already present)", path);
    }

    if result.dry_run {
        println!("\nNo changes applied.");
    } else {
        println!("✅ Provisioned webpack build tooling");
    }
}

/// Run the side effects an applied install requests. Failures here are
/// reported as warnings; the provisioning itself already succeeded.
fn run_post_install_tasks(result: &InstallResult, root: &Path, skip_install: bool) {
    if result.tasks.is_empty() {
        return;
    }

    if skip_install {
        println!("  Skipped npm install (run it manually to fetch the new packages)");
        return;
    }

    let installer = NpmCommandInstaller::new(root.to_path_buf());
    for task in &result.tasks {
        match task {
            PostInstallTask::NpmInstall => {
                println!("Running npm install...");
                if let Err(err) = installer.install() {
                    println!("⚠️  npm install failed, run it manually: {}", err);
                }
            }
        }
    }
}
