//! `trashsweep` - Purge stale files from Nextcloud trash bins.
//!
//! Rule files (INI) name a Nextcloud account and a list of filename
//! patterns, each with a minimum age in days. A run lists the account's
//! trash bin over WebDAV, assigns every entry to the first rule whose
//! pattern matches, and permanently deletes the entries old enough for
//! their rule. A per-run threshold guards against mass deletion caused by
//! an overly broad pattern.
//!
//! # Example
//!
//! ```no_run
//! use trashsweep::{Level, Logger, PurgeOptions, RuleFile, WebDavClient, purge};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), trashsweep::Error> {
//! let logger = Logger::builder().level(Level::Info).terminal().done().build();
//! let rules = RuleFile::load(Path::new("trashsweep.ini"))?;
//! let client = WebDavClient::new(&rules.connection)?;
//!
//! let options = PurgeOptions::new()
//!     .threshold(rules.connection.threshold)
//!     .dry_run(true);
//! let report = purge(&client, &rules.rules, &options, &logger)?;
//! report.log(&logger, true);
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the command-line interface

// Core modules (always available)
pub mod config;
pub mod dav;
pub mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod output;
pub mod progress;
pub mod purge;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::{ConfigError, ConnectionConfig, Rule, RuleFile};
pub use dav::{DeleteOutcome, TrashBin, TrashEntry, WebDavClient};
pub use error::Error;
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use output::{LogRecord, Output, TerminalOutput};
pub use purge::{PurgeOptions, PurgeReport, purge, select_candidates};
