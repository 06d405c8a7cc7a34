//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Test workspace context
///
/// Creates a temporary workspace directory and provides utilities for
/// laying out build-order scripts, variant files, and stub build tools.
pub struct TestWorkspace {
    /// Temporary directory for the workspace
    pub dir: TempDir,
}

impl TestWorkspace {
    /// Create a new empty test workspace
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the workspace directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the workspace
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory in the workspace
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Check if a file exists in the workspace
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the workspace
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Write the build-order script
    pub fn write_build_order(&self, content: &str) {
        self.create_file(".build_order.txt", content);
    }

    /// Write the master variant list
    pub fn write_variant_list(&self, names: &[&str]) {
        let content = format!("VARIANTS := {}\n", names.join(" "));
        self.create_file("__VariantConfig__/variant.mk", &content);
    }

    /// Write one variant file, returning its workspace-relative path
    pub fn write_variant_file(&self, name: &str, content: &str) -> String {
        let rel = format!("__VariantConfig__/{name}.mk");
        self.create_file(&rel, content);
        rel
    }

    /// Install an executable stub build tool and return its absolute path
    #[cfg(unix)]
    pub fn install_stub_tool(&self, name: &str, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join(name);
        std::fs::write(&path, script).expect("Failed to write stub tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make stub tool executable");
        path
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Stub tool that records "<project-dir-basename> <target>" lines into the
/// file named by the RECORD environment variable and always succeeds.
pub const RECORDING_TOOL: &str = r#"#!/bin/sh
echo "$(basename "$PWD") $1" >> "$RECORD"
exit 0
"#;

/// Stub tool that fails (exit 2, message on stderr) for any project
/// directory named "bad" and succeeds elsewhere.
pub const SELECTIVE_FAIL_TOOL: &str = r#"#!/bin/sh
echo "$(basename "$PWD") $1" >> "$RECORD"
if [ "$(basename "$PWD")" = "bad" ]; then
    echo "boom in $(basename "$PWD")" >&2
    exit 2
fi
exit 0
"#;

/// Sample build-order script covering directives, grouping, and a conflict
pub const SAMPLE_BUILD_ORDER: &str = "\
config release
1 apps/frontend
1 apps/backend
operation clean
2 libs/common
";
