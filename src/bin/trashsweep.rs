//! `trashsweep` binary: purge stale files from Nextcloud trash bins.
//!
//! Usage:
//!   trashsweep [OPTIONS] [FILES]...
//!
//!   -N, --dry-run    List what would be deleted
//!   -F, --force      Ignore the per-run threshold
//!   -v, --verbose    More output (repeatable)
//!   -C, --progress   Progress bar instead of verbose output
//!   -D, --depth N    Subdirectory levels to list (default 1)

use clap::Parser;
use trashsweep::cli::{Cli, build_logger, cmd_purge, effective_level};
use trashsweep::internal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = effective_level(&cli);

    // Config and WebDAV diagnostics go through the internal logger, so it must exist first
    internal::init(level);

    let logger = build_logger(level);
    cmd_purge(&cli, &logger)
}
