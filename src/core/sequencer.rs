//! Per-variant execution walk
//!
//! Walks the operation groups in ascending id order for one variant: syncs
//! the variant file's build type whenever the configuration changes, then
//! invokes the build tool once per directory in the group. A failed build is
//! recorded and the walk continues; only infrastructure errors abort the run.

use std::path::Path;

use serde::Serialize;

use crate::error::{BuildError, MakewalkError};
use crate::infra::logs;
use crate::infra::make::BuildTool;

use super::build_order::BuildOrder;
use super::build_type::ensure_build_type;

/// Outcome of one directory-level build invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOutcome {
    /// Workspace-relative project directory
    pub directory: String,
    /// Target passed to the tool (empty means the default target)
    pub operation: String,
    /// Tool exit code, `None` if killed by a signal
    pub exit_code: Option<i32>,
    /// Whether the tool exited with status zero
    pub succeeded: bool,
    /// Captured standard error (empty on success)
    pub error_output: String,
}

/// All outcomes for one variant, in execution order.
#[derive(Debug, Serialize)]
pub struct VariantReport {
    /// Variant file name this report belongs to
    pub variant: String,
    /// Per-directory outcomes in execution order
    pub outcomes: Vec<BuildOutcome>,
}

impl VariantReport {
    /// Number of failed invocations
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.succeeded).count()
    }

    /// True when every invocation succeeded
    pub fn all_succeeded(&self) -> bool {
        self.failed_count() == 0
    }
}

/// Paths needed to run one variant.
pub struct RunOptions<'a> {
    /// Workspace root that project directories are resolved under
    pub workspace_root: &'a Path,
    /// Variant file whose build type is kept in sync
    pub variant_path: &'a Path,
    /// Log directory for per-invocation logs; `None` disables logging
    pub log_dir: Option<&'a Path>,
}

/// Execute every operation group for one variant.
///
/// Groups run in ascending id order. The variant file's build type is synced
/// before the first group and again whenever a group's configuration differs
/// by value from the previous group's, always before any build in that group
/// starts. Nonzero exit codes are recorded in the report and never abort the
/// walk.
pub fn run_variant(
    options: &RunOptions<'_>,
    order: &BuildOrder,
    tool: &dyn BuildTool,
) -> Result<VariantReport, MakewalkError> {
    let variant = options
        .variant_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    tracing::info!("Running variant {variant}");

    let mut outcomes = Vec::new();
    let mut previous_configuration: Option<&str> = None;

    for (id, group) in &order.groups {
        if previous_configuration != Some(group.configuration.as_str()) {
            ensure_build_type(options.variant_path, &group.configuration)?;
            previous_configuration = Some(group.configuration.as_str());
        }

        for directory in &group.directories {
            let project_path = options.workspace_root.join(directory);
            tracing::debug!(
                "group {id}: {} {} in {}",
                tool.name(),
                group.operation,
                project_path.display()
            );

            let invocation = tool.run(&project_path, &group.operation).map_err(|e| {
                BuildError::ToolSpawn {
                    tool: tool.name().to_string(),
                    directory: project_path.clone(),
                    error: e.to_string(),
                }
            })?;

            if let Some(log_dir) = options.log_dir {
                logs::write_invocation_log(
                    log_dir,
                    &project_path,
                    tool.name(),
                    &group.operation,
                    &invocation,
                )?;
            }

            if !invocation.success() {
                tracing::error!(
                    "{directory}: {} {}: exit {:?}: {}",
                    tool.name(),
                    group.operation,
                    invocation.exit_code,
                    invocation.stderr.trim_end()
                );
            }

            outcomes.push(BuildOutcome {
                directory: directory.clone(),
                operation: group.operation.clone(),
                exit_code: invocation.exit_code,
                succeeded: invocation.success(),
                error_output: invocation.stderr,
            });

            tracing::info!("*** {directory} DONE ***");
        }
    }

    Ok(VariantReport { variant, outcomes })
}
