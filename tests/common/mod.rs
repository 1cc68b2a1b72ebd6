//! Shared testing utilities for nswp CLI tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated application directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    app_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated application directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let app_dir = root.path().join("app");
        fs::create_dir_all(&app_dir).expect("Failed to create test app directory");

        Self { root, app_dir }
    }

    /// Path to the application directory used for CLI invocations.
    pub fn app_dir(&self) -> &Path {
        &self.app_dir
    }

    /// Build a command for invoking the compiled `nswp` binary within the app directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("nswp").expect("Failed to locate nswp binary");
        cmd.current_dir(&self.app_dir);
        cmd
    }

    /// Build a command whose `npm` resolves to a fake script that logs its
    /// working directory and arguments, then exits with the given code.
    pub fn cli_with_fake_npm(&self, exit_code: i32) -> Command {
        let bin_dir = self.root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake npm bin dir");

        let script_path = bin_dir.join("npm");
        let script_content = format!(
            r#"#!/bin/sh
echo "$PWD $@" >> "{}"
exit {}
"#,
            self.npm_log_path().to_string_lossy(),
            exit_code
        );
        fs::write(&script_path, script_content).expect("Failed to write fake npm script");

        let mut perms =
            fs::metadata(&script_path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&script_path, perms).expect("Failed to set permissions");

        let mut paths = vec![bin_dir];
        if let Some(existing) = env::var_os("PATH") {
            paths.extend(env::split_paths(&existing));
        }
        let path = env::join_paths(paths).expect("Failed to assemble PATH for fake npm");

        let mut cmd = self.cli();
        cmd.env("PATH", path);
        cmd
    }

    /// Invocations recorded by the fake npm, one `cwd args` line each.
    pub fn npm_log(&self) -> String {
        fs::read_to_string(self.npm_log_path()).unwrap_or_default()
    }

    fn npm_log_path(&self) -> PathBuf {
        self.root.path().join("npm.log")
    }

    /// Write a package.json for a plain JavaScript application.
    pub fn write_javascript_manifest(&self) {
        self.write_manifest(
            r#"{
    "name": "my-app",
    "version": "0.0.0",
    "nativescript": {
        "id": "org.nativescript.myapp"
    },
    "dependencies": {
        "tns-core-modules": "4.2.0"
    },
    "devDependencies": {}
}
"#,
        );
    }

    /// Write a package.json for a TypeScript application.
    pub fn write_typescript_manifest(&self) {
        self.write_manifest(
            r#"{
    "name": "my-app",
    "version": "0.0.0",
    "nativescript": {
        "id": "org.nativescript.myapp"
    },
    "dependencies": {
        "tns-core-modules": "4.2.0"
    },
    "devDependencies": {
        "typescript": "2.7.2"
    }
}
"#,
        );
    }

    /// Write a package.json for an Angular application.
    pub fn write_angular_manifest(&self) {
        self.write_manifest(
            r#"{
    "name": "my-app",
    "version": "0.0.0",
    "nativescript": {
        "id": "org.nativescript.myapp"
    },
    "dependencies": {
        "@angular/core": "6.1.0",
        "nativescript-angular": "6.1.0",
        "tns-core-modules": "4.2.0"
    },
    "devDependencies": {
        "typescript": "2.7.2"
    }
}
"#,
        );
    }

    /// Write an arbitrary package.json.
    pub fn write_manifest(&self, content: &str) {
        fs::write(self.app_dir.join("package.json"), content)
            .expect("Failed to write test manifest");
    }

    /// Read the manifest back as JSON.
    pub fn manifest_json(&self) -> serde_json::Value {
        let content = fs::read_to_string(self.app_dir.join("package.json"))
            .expect("Failed to read test manifest");
        serde_json::from_str(&content).expect("Test manifest is not valid JSON")
    }

    /// Raw manifest bytes, for byte-for-byte comparisons.
    pub fn manifest_bytes(&self) -> Vec<u8> {
        fs::read(self.app_dir.join("package.json")).expect("Failed to read test manifest")
    }

    /// Look up an entry in the manifest's devDependencies table.
    pub fn dev_dependency(&self, name: &str) -> Option<String> {
        self.manifest_json()
            .get("devDependencies")
            .and_then(|deps| deps.get(name))
            .and_then(|version| version.as_str().map(String::from))
    }

    /// Read a file relative to the application directory.
    pub fn read_file(&self, path: &str) -> String {
        fs::read_to_string(self.app_dir.join(path)).expect("Failed to read generated file")
    }

    /// Assert the devDependencies table pins `name` at `version`.
    pub fn assert_dev_dependency(&self, name: &str, version: &str) {
        assert_eq!(
            self.dev_dependency(name).as_deref(),
            Some(version),
            "devDependencies should pin {} at {}",
            name,
            version
        );
    }

    /// Assert the devDependencies table has no entry for `name`.
    pub fn assert_no_dev_dependency(&self, name: &str) {
        assert_eq!(self.dev_dependency(name), None, "devDependencies should not contain {}", name);
    }

    /// Assert a file exists relative to the application directory.
    pub fn assert_file_exists(&self, path: &str) {
        assert!(self.app_dir.join(path).exists(), "{} should exist", path);
    }

    /// Assert a file does not exist relative to the application directory.
    pub fn assert_file_not_exists(&self, path: &str) {
        assert!(!self.app_dir.join(path).exists(), "{} should not exist", path);
    }

    /// Assert a generated file contains a marker string.
    pub fn assert_file_contains(&self, path: &str, needle: &str) {
        let content = self.read_file(path);
        assert!(content.contains(needle), "{} should contain {:?}", path, needle);
    }
}
