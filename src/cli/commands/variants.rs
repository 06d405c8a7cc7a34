//! Variants command implementation
//!
//! Implements `makewalk variants`: expand the master variant list and print
//! the variant file references that a build would walk.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::cli::output::status;
use crate::config::Settings;
use crate::core::variants::resolve_variants;

/// Execute the variants command
pub async fn execute(workspace: &Path, json: bool) -> Result<()> {
    let settings = Settings::default();

    let master_path = workspace
        .join(&settings.variant_directory)
        .join(&settings.master_variant_file);
    let master = fs::read_to_string(&master_path).with_context(|| {
        format!(
            "Failed to read master variant list at {}",
            master_path.display()
        )
    })?;

    let variant_files = resolve_variants(master.lines(), &settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&variant_files)?);
        return Ok(());
    }

    if variant_files.is_empty() {
        println!("{} No variants listed in {}", status::INFO, master_path.display());
        return Ok(());
    }

    for variant_file in &variant_files {
        println!("{variant_file}");
    }

    Ok(())
}
