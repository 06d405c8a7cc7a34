//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod doctor;
pub mod plan;
pub mod variants;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build every variant according to the build-order script
    Build {
        /// Build only the named variant
        #[arg(long)]
        variant: Option<String>,

        /// External build tool to invoke
        #[arg(long, env = "MAKEWALK_TOOL")]
        tool: Option<String>,

        /// Alternate build-order script path
        #[arg(long, value_name = "FILE")]
        build_order: Option<PathBuf>,

        /// Skip per-invocation log files
        #[arg(long)]
        no_logs: bool,
    },

    /// Parse the build-order script and display the operation groups
    Plan {
        /// Alternate build-order script path
        #[arg(long, value_name = "FILE")]
        build_order: Option<PathBuf>,
    },

    /// List the variant files resolved from the master variant list
    Variants,

    /// Check that the workspace layout and build tool are usable
    Doctor {
        /// External build tool to look for
        #[arg(long, env = "MAKEWALK_TOOL")]
        tool: Option<String>,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self, workspace: &Path, json: bool) -> Result<()> {
        match self {
            Self::Build {
                variant,
                tool,
                build_order,
                no_logs,
            } => {
                let options = build::BuildOptions {
                    variant,
                    tool,
                    build_order,
                    no_logs,
                };
                build::execute(workspace, options, json).await
            }
            Self::Plan { build_order } => plan::execute(workspace, build_order, json).await,
            Self::Variants => variants::execute(workspace, json).await,
            Self::Doctor { tool } => doctor::execute(workspace, tool).await,
        }
    }
}
