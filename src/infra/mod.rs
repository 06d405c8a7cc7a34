//! Infrastructure layer
//!
//! Handles external processes and log-file output. This module is the only
//! place where the build tool is actually spawned.

pub mod logs;
pub mod make;
