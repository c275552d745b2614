//! Utility functions for the CLI.

use super::Cli;
use crate::level::Level;
use crate::logger::Logger;

/// The progress bar redraws a single line, so it silences everything below
/// warnings; otherwise `-v` decides.
#[must_use]
pub fn effective_level(cli: &Cli) -> Level {
    if cli.progress && !cli.dry_run {
        Level::Warn
    } else {
        Level::from_verbosity(cli.verbose)
    }
}

/// Terminal logger at the given level.
#[must_use]
pub fn build_logger(level: Level) -> Logger {
    Logger::builder().level(level).terminal().done().build()
}
