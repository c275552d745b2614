//! The logger filters by level and fans each record out to its outputs.
//! Built through `Logger::builder()` so callers never touch output internals.

mod builder;

pub use builder::{LoggerBuilder, TerminalBuilder};

use crate::level::Level;
use crate::output::{LogRecord, Output};

/// Immutable after build.
#[derive(Default)]
pub struct Logger {
    min_level: Level,
    outputs: Vec<Box<dyn Output>>,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn dispatch(&self, record: &LogRecord) {
        for output in &self.outputs {
            let _ = output.write(record);
        }
    }

    /// Filters by severity, then fans out to all configured outputs.
    pub fn log(&self, level: Level, scope: &str, msg: &str) {
        if level < self.min_level {
            return;
        }

        self.dispatch(&LogRecord {
            level,
            scope: scope.to_string(),
            message: msg.to_string(),
            raw: false,
        });
    }

    pub fn trace(&self, scope: &str, msg: &str) {
        self.log(Level::Trace, scope, msg);
    }

    pub fn debug(&self, scope: &str, msg: &str) {
        self.log(Level::Debug, scope, msg);
    }

    pub fn info(&self, scope: &str, msg: &str) {
        self.log(Level::Info, scope, msg);
    }

    pub fn warn(&self, scope: &str, msg: &str) {
        self.log(Level::Warn, scope, msg);
    }

    pub fn error(&self, scope: &str, msg: &str) {
        self.log(Level::Error, scope, msg);
    }

    /// Command output (dry-run listings, threshold reports) must stay visible
    /// at verbosity 0, so this bypasses level filtering.
    pub fn print(&self, scope: &str, msg: &str) {
        self.dispatch(&LogRecord {
            level: Level::Info,
            scope: scope.to_string(),
            message: msg.to_string(),
            raw: false,
        });
    }

    /// Continuation lines under a `print()` heading; never filtered.
    pub fn raw(&self, msg: &str) {
        self.dispatch(&LogRecord {
            level: Level::Info,
            scope: String::new(),
            message: msg.to_string(),
            raw: true,
        });
    }

    /// Cheap check so callers can skip building expensive messages.
    #[must_use]
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    /// # Errors
    /// Returns the first I/O error encountered across all outputs.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    #[must_use]
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }
}
