//! Per-invocation log files
//!
//! Each build invocation leaves a log file named after the project directory
//! and a unix-seconds timestamp; a failed invocation additionally leaves an
//! `_error.log` with the captured standard error.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::FilesystemError;

use super::make::Invocation;

/// Write the log record for one invocation and return the log path.
///
/// Creates the log directory on demand. The main log holds a header line
/// (`<project-path> <tool> <operation>`) followed by the captured stdout.
pub fn write_invocation_log(
    log_dir: &Path,
    project_path: &Path,
    tool: &str,
    operation: &str,
    invocation: &Invocation,
) -> Result<PathBuf, FilesystemError> {
    fs::create_dir_all(log_dir).map_err(|e| FilesystemError::CreateDir {
        path: log_dir.to_path_buf(),
        error: e.to_string(),
    })?;

    let stem = project_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "project".to_string());
    let timestamp = unix_timestamp();

    let log_path = log_dir.join(format!("log_{stem}_{timestamp}.log"));
    let mut contents = format!("{} {tool} {operation}\n\n", project_path.display());
    contents.push_str(&invocation.stdout);

    fs::write(&log_path, contents).map_err(|e| FilesystemError::WriteFile {
        path: log_path.clone(),
        error: e.to_string(),
    })?;

    if !invocation.success() {
        let error_path = log_dir.join(format!("log_{stem}_{timestamp}_error.log"));
        fs::write(&error_path, &invocation.stderr).map_err(|e| FilesystemError::WriteFile {
            path: error_path.clone(),
            error: e.to_string(),
        })?;
        tracing::info!("{stem}: Error log created: {}", error_path.display());
    }

    Ok(log_path)
}

/// Simple timestamp generation
fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
