use std::fmt;

use crate::domain::manifest::PackageManifest;

/// Runtime dependency key that marks an Angular application.
const ANGULAR_MARKER: &str = "@angular/core";

/// Dev-dependency key that marks a TypeScript application.
const TYPESCRIPT_MARKER: &str = "typescript";

/// The three kinds of application the tool knows how to provision.
///
/// Classification is exclusive: Angular wins over TypeScript, which wins
/// over the plain JavaScript fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppFlavor {
    JavaScript,
    TypeScript,
    Angular,
}

impl AppFlavor {
    /// All flavors, from the default upward in detection precedence.
    pub const ALL: [AppFlavor; 3] =
        [AppFlavor::JavaScript, AppFlavor::TypeScript, AppFlavor::Angular];

    /// Classify an application from its manifest.
    ///
    /// `@angular/core` is only meaningful under `dependencies` and
    /// `typescript` only under `devDependencies`; the same key in the
    /// other table carries no signal.
    pub fn detect(manifest: &PackageManifest) -> Self {
        if manifest.has_dependency(ANGULAR_MARKER) {
            AppFlavor::Angular
        } else if manifest.dev_dependencies.contains_key(TYPESCRIPT_MARKER) {
            AppFlavor::TypeScript
        } else {
            AppFlavor::JavaScript
        }
    }

    /// Whether builds for this flavor run the TypeScript compiler.
    pub fn uses_typescript(self) -> bool {
        match self {
            AppFlavor::JavaScript => false,
            AppFlavor::TypeScript | AppFlavor::Angular => true,
        }
    }

    /// Human-readable flavor name as shown in reports and config headers.
    pub fn display_name(self) -> &'static str {
        match self {
            AppFlavor::JavaScript => "JavaScript",
            AppFlavor::TypeScript => "TypeScript",
            AppFlavor::Angular => "Angular",
        }
    }
}

impl fmt::Display for AppFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
