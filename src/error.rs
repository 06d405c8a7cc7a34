//! Error types for makewalk
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors
///
/// All fatal I/O conditions carry the offending path so the final
/// diagnostic names it.
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to atomically replace file
    #[error("Failed to replace file '{path}': {error}")]
    ReplaceFile { path: PathBuf, error: String },
}

/// Build execution errors
///
/// A nonzero exit code from the build tool is *not* an error here; it is
/// recorded as a failed outcome and the walk continues. Only infrastructure
/// conditions (the tool cannot be spawned at all) surface through this type.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Build tool could not be started
    #[error("Failed to run '{tool}' in '{directory}': {error}")]
    ToolSpawn {
        tool: String,
        directory: PathBuf,
        error: String,
    },

    /// Build tool not found on PATH
    #[error("Build tool '{tool}' not found on PATH")]
    ToolNotFound { tool: String },
}

/// Top-level makewalk error type
#[derive(Error, Debug)]
pub enum MakewalkError {
    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Build error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),
}
