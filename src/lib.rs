//! Makewalk - Sequential make orchestrator for multi-project workspaces
//!
//! This library provides the core functionality for walking a workspace's
//! declarative build order and driving an external build tool once per
//! project directory, per build variant.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (parsing, sequencing, variant handling)
//! - [`infra`] - Infrastructure layer (process spawning, log files)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
