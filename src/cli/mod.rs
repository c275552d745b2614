//! CLI module for trashsweep.
//!
//! This module provides the command-line interface using Clap.

pub mod commands;
pub mod util;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// trashsweep - Purge files matching patterns from a Nextcloud trash bin.
#[derive(Debug, Parser)]
#[command(
    name = "trashsweep",
    version,
    about = "Purge files matching patterns from a Nextcloud trash bin"
)]
pub struct Cli {
    /// One or more INI rule files to process in order
    /// (defaults to ~/.config/trashsweep/trashsweep.ini)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Perform a dry run without deleting files (disables progress bar)
    #[arg(short = 'N', long)]
    pub dry_run: bool,

    /// Force deletion even when the number of files is over the threshold
    #[arg(short = 'F', long)]
    pub force: bool,

    /// Enable verbose output (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Show a progress bar (disables verbose output)
    #[arg(short = 'C', long)]
    pub progress: bool,

    /// Subdirectory levels to search through; 1 lists only files directly in the trash bin
    #[arg(short = 'D', long, default_value_t = 1, value_name = "N")]
    pub depth: u32,
}

pub use commands::cmd_purge;
pub use util::{build_logger, effective_level};
