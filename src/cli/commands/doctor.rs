//! Doctor command implementation
//!
//! Implements `makewalk doctor`: check that the build tool is on PATH and
//! that the workspace files a build would need are present.

use anyhow::{bail, Result};
use std::fs;
use std::path::Path;

use crate::cli::output::status;
use crate::config::{defaults, Settings};
use crate::core::variants::resolve_variants;

/// Execute the doctor command
pub async fn execute(workspace: &Path, tool: Option<String>) -> Result<()> {
    let settings = Settings::default();
    let tool = tool.unwrap_or_else(|| defaults::BUILD_TOOL.to_string());
    let mut problems = 0usize;

    match which::which(&tool) {
        Ok(path) => println!("{} {tool}: {}", status::SUCCESS, path.display()),
        Err(_) => {
            println!("{} {tool}: not found on PATH", status::ERROR);
            problems += 1;
        }
    }

    let script_path = workspace.join(&settings.build_order_file);
    problems += check_exists("build-order script", &script_path);

    let variant_dir = workspace.join(&settings.variant_directory);
    problems += check_exists("variant directory", &variant_dir);

    let master_path = variant_dir.join(&settings.master_variant_file);
    problems += check_exists("master variant list", &master_path);

    if let Ok(master) = fs::read_to_string(&master_path) {
        let count = resolve_variants(master.lines(), &settings).len();
        if count == 0 {
            println!("{} master variant list names no variants", status::WARNING);
        } else {
            println!("{} {count} variant(s) listed", status::INFO);
        }
    }

    if problems > 0 {
        bail!("{problems} problem(s) found");
    }
    println!("{} workspace looks good", status::SUCCESS);
    Ok(())
}

fn check_exists(label: &str, path: &Path) -> usize {
    if path.exists() {
        println!("{} {label}: {}", status::SUCCESS, path.display());
        0
    } else {
        println!("{} {label}: missing ({})", status::ERROR, path.display());
        1
    }
}
