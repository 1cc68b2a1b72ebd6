use std::fmt;

/// A build-tool package at the version this release provisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyPin {
    pub name: &'static str,
    pub version: &'static str,
}

impl fmt::Display for DependencyPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// Baseline webpack integration, required by every flavor.
pub const NS_DEV_WEBPACK: DependencyPin = DependencyPin {
    name: "nativescript-dev-webpack",
    version: "~0.24.1",
};

/// Angular AOT compiler interface, required by Angular apps.
pub const ANGULAR_COMPILER_CLI: DependencyPin = DependencyPin {
    name: "@angular/compiler-cli",
    version: "~7.2.0",
};

/// Angular-aware webpack plugin, superseded where build-angular is installed.
pub const NGTOOLS_WEBPACK: DependencyPin = DependencyPin {
    name: "@ngtools/webpack",
    version: "~7.2.0",
};

/// Dev-dependency key whose presence means the app already builds through
/// the Angular CLI toolchain, which ships its own webpack plumbing.
pub const BUILD_ANGULAR_MARKER: &str = "@angular-devkit/build-angular";
