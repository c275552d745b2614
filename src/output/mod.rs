//! Output backends for the logger. The terminal is the only built-in one;
//! the `Output` trait lets tests and embedders capture records instead.

mod terminal;

pub use terminal::TerminalOutput;

use crate::level::Level;

/// One log line as handed to every output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub scope: String,
    pub message: String,
    /// Continuation lines (file lists) are printed without tag and scope.
    pub raw: bool,
}

pub trait Output: Send + Sync {
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
