//! Build command implementation
//!
//! Implements `makewalk build`: parse the build-order script once, resolve
//! the variant list, then run every variant through the sequencer.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::output::{self, status};
use crate::config::{defaults, Settings};
use crate::core::build_order::parse_build_order;
use crate::core::sequencer::{run_variant, RunOptions, VariantReport};
use crate::core::variants::resolve_variants;
use crate::error::BuildError;
use crate::infra::make::SystemBuildTool;

/// Build options
pub struct BuildOptions {
    /// Build only the named variant
    pub variant: Option<String>,
    /// External build tool to invoke
    pub tool: Option<String>,
    /// Alternate build-order script path
    pub build_order: Option<PathBuf>,
    /// Skip per-invocation log files
    pub no_logs: bool,
}

/// Execute the build command
pub async fn execute(workspace: &Path, options: BuildOptions, json: bool) -> Result<()> {
    let settings = Settings::default();

    let script_path = options
        .build_order
        .unwrap_or_else(|| workspace.join(&settings.build_order_file));
    let script = fs::read_to_string(&script_path).with_context(|| {
        format!(
            "Failed to read build-order script at {}",
            script_path.display()
        )
    })?;
    let order = parse_build_order(script.lines(), &settings);
    tracing::info!(
        "Parsed {} operation group(s) from {}",
        order.len(),
        script_path.display()
    );

    let variant_dir = workspace.join(&settings.variant_directory);
    let master_path = variant_dir.join(&settings.master_variant_file);
    let master = fs::read_to_string(&master_path).with_context(|| {
        format!(
            "Failed to read master variant list at {}",
            master_path.display()
        )
    })?;
    let mut variant_files = resolve_variants(master.lines(), &settings);

    if let Some(ref name) = options.variant {
        let wanted = format!("{name}.{}", settings.variant_extension);
        variant_files.retain(|v| v == &wanted || v == name);
        if variant_files.is_empty() {
            bail!(
                "Variant '{name}' is not listed in {}",
                master_path.display()
            );
        }
    }
    if variant_files.is_empty() {
        bail!("No variants listed in {}", master_path.display());
    }

    let tool_command = options
        .tool
        .unwrap_or_else(|| defaults::BUILD_TOOL.to_string());
    which::which(&tool_command).map_err(|_| BuildError::ToolNotFound {
        tool: tool_command.clone(),
    })?;
    let tool = SystemBuildTool::new(tool_command);

    let log_dir = workspace.join(&settings.log_directory);
    let log_dir = (!options.no_logs).then_some(log_dir.as_path());

    let bar = output::create_variant_bar(variant_files.len() as u64);
    let mut reports: Vec<VariantReport> = Vec::new();
    for variant_file in &variant_files {
        bar.set_message(variant_file.clone());
        let variant_path = variant_dir.join(variant_file);
        let run_options = RunOptions {
            workspace_root: workspace,
            variant_path: &variant_path,
            log_dir,
        };
        reports.push(run_variant(&run_options, &order, &tool)?);
        bar.inc(1);
    }
    bar.finish_and_clear();

    let total: usize = reports.iter().map(|r| r.outcomes.len()).sum();
    let failed: usize = reports.iter().map(VariantReport::failed_count).sum();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        display_summary(&reports, total, failed);
    }

    if failed > 0 {
        bail!("{failed} of {total} builds failed");
    }
    Ok(())
}

/// Print the per-variant summary
fn display_summary(reports: &[VariantReport], total: usize, failed: usize) {
    for report in reports {
        println!("{}:", report.variant);
        for outcome in &report.outcomes {
            let glyph = if outcome.succeeded {
                status::SUCCESS
            } else {
                status::ERROR
            };
            let operation = if outcome.operation.is_empty() {
                "(default)"
            } else {
                &outcome.operation
            };
            if outcome.succeeded {
                println!("  {glyph} {} {operation}", outcome.directory);
                println!("{}", output::completion_banner(&outcome.directory));
            } else {
                println!(
                    "  {glyph} {} {operation} (exit {})",
                    outcome.directory,
                    outcome
                        .exit_code
                        .map_or_else(|| "signal".to_string(), |c| c.to_string())
                );
            }
        }
    }
    if failed == 0 {
        println!("{} {total} build(s) completed", status::SUCCESS);
    } else {
        println!("{} {failed} of {total} build(s) failed", status::ERROR);
    }
}
