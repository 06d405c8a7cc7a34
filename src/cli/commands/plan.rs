//! Plan command implementation
//!
//! Implements `makewalk plan`: parse the build-order script and display the
//! resulting operation groups without running anything.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::output::status;
use crate::config::Settings;
use crate::core::build_order::parse_build_order;

/// Execute the plan command
pub async fn execute(workspace: &Path, build_order: Option<PathBuf>, json: bool) -> Result<()> {
    let settings = Settings::default();

    let script_path =
        build_order.unwrap_or_else(|| workspace.join(&settings.build_order_file));
    let script = fs::read_to_string(&script_path).with_context(|| {
        format!(
            "Failed to read build-order script at {}",
            script_path.display()
        )
    })?;

    let order = parse_build_order(script.lines(), &settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&order)?);
        return Ok(());
    }

    if order.is_empty() {
        println!("{} No operation groups in {}", status::INFO, script_path.display());
        return Ok(());
    }

    for (id, group) in &order.groups {
        let operation = if group.operation.is_empty() {
            "(default)"
        } else {
            &group.operation
        };
        println!(
            "Group {id}: config={} operation={operation}",
            group.configuration
        );
        for directory in &group.directories {
            println!("  {directory}");
        }
    }

    for warning in &order.warnings {
        println!(
            "{} group {} split into group {} ({})",
            status::WARNING,
            warning.requested_id,
            warning.effective_id,
            warning.kind.describe()
        );
    }

    Ok(())
}
