//! Stepwise logger construction; the terminal sub-builder returns to the
//! parent with `done()` so more outputs can be chained.

use super::Logger;
use crate::level::Level;
use crate::output::{Output, TerminalOutput};

#[derive(Default)]
pub struct LoggerBuilder {
    pub(super) min_level: Level,
    pub(super) outputs: Vec<Box<dyn Output>>,
}

impl LoggerBuilder {
    /// Info by default; the CLI lowers or raises it from `-v`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Info,
            outputs: Vec::new(),
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn terminal(self) -> TerminalBuilder {
        TerminalBuilder {
            parent: self,
            output: TerminalOutput::new(),
        }
    }

    /// Adds a custom backend (tests use this to capture records).
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.outputs.push(Box::new(output));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            min_level: self.min_level,
            outputs: self.outputs,
        }
    }
}

pub struct TerminalBuilder {
    parent: LoggerBuilder,
    output: TerminalOutput,
}

impl TerminalBuilder {
    #[must_use]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.output = self.output.colors(enabled);
        self
    }

    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Box::new(self.output));
        self.parent
    }
}
