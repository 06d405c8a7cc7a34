//! External build tool invocation
//!
//! Wraps the external build command behind the [`BuildTool`] trait so the
//! sequencer can be exercised with a fake runner in tests. Invocations are
//! synchronous: each one blocks until the tool exits.

use std::io;
use std::path::Path;
use std::process::Command;

use crate::config::defaults;

/// Captured result of one build tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Exit code, or `None` if the tool was killed by a signal
    pub exit_code: Option<i32>,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl Invocation {
    /// True when the tool exited with status zero
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// One synchronous invocation of the external build tool.
pub trait BuildTool {
    /// Command name, for diagnostics and log headers
    fn name(&self) -> &str;

    /// Run the tool in `project_dir` against `target` (empty string means
    /// the tool's default target) and capture its output.
    fn run(&self, project_dir: &Path, target: &str) -> io::Result<Invocation>;
}

/// Build tool backed by a real external command.
#[derive(Debug)]
pub struct SystemBuildTool {
    command: String,
}

impl SystemBuildTool {
    /// Create a tool wrapper around the given command
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Default for SystemBuildTool {
    fn default() -> Self {
        Self::new(defaults::BUILD_TOOL)
    }
}

impl BuildTool for SystemBuildTool {
    fn name(&self) -> &str {
        &self.command
    }

    fn run(&self, project_dir: &Path, target: &str) -> io::Result<Invocation> {
        let mut cmd = Command::new(&self.command);
        cmd.current_dir(project_dir);
        if !target.is_empty() {
            cmd.arg(target);
        }

        let output = cmd.output()?;

        Ok(Invocation {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_successful_invocation() {
        let dir = TempDir::new().unwrap();
        let tool = SystemBuildTool::new("true");

        let invocation = tool.run(dir.path(), "").unwrap();

        assert_eq!(invocation.exit_code, Some(0));
        assert!(invocation.success());
    }

    #[test]
    fn test_failing_invocation() {
        let dir = TempDir::new().unwrap();
        let tool = SystemBuildTool::new("false");

        let invocation = tool.run(dir.path(), "").unwrap();

        assert_eq!(invocation.exit_code, Some(1));
        assert!(!invocation.success());
    }

    #[test]
    fn test_missing_command_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let tool = SystemBuildTool::new("makewalk-no-such-tool");

        assert!(tool.run(dir.path(), "").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_target_and_streams_are_passed_through() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let script = dir.path().join("fake-make");
        std::fs::write(&script, "#!/bin/sh\necho \"building $1\"\necho oops >&2\nexit 3\n")
            .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let tool = SystemBuildTool::new(script.to_string_lossy().into_owned());
        let invocation = tool.run(dir.path(), "clean").unwrap();

        assert_eq!(invocation.exit_code, Some(3));
        assert_eq!(invocation.stdout, "building clean\n");
        assert_eq!(invocation.stderr, "oops\n");
    }
}
