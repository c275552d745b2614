//! Terminal output: `[TAG] SCOPE    message`, info and below on stdout,
//! warnings and errors on stderr.

use crate::fmt::{Color, ScopeConfig, TagConfig};
use crate::level::Level;

use super::{LogRecord, Output};
use std::collections::HashMap;
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone)]
pub struct TerminalOutput {
    /// Piped output and cron mails can't render ANSI escape codes.
    colors_enabled: bool,
    tag_config: TagConfig,
    scope_config: ScopeConfig,
    level_colors: HashMap<Level, Color>,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOutput {
    /// Colors default to on only when stdout is a terminal.
    #[must_use]
    pub fn new() -> Self {
        let mut level_colors = HashMap::new();
        level_colors.insert(Level::Trace, Color::purple());
        level_colors.insert(Level::Debug, Color::purple());
        level_colors.insert(Level::Info, Color::cyan());
        level_colors.insert(Level::Warn, Color::yellow());
        level_colors.insert(Level::Error, Color::red());

        Self {
            colors_enabled: io::stdout().is_terminal(),
            tag_config: TagConfig::default(),
            scope_config: ScopeConfig::default(),
            level_colors,
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    #[must_use]
    pub fn level_color(mut self, level: Level, color: Color) -> Self {
        self.level_colors.insert(level, color);
        self
    }

    /// Renders one line without the trailing newline.
    #[must_use]
    pub fn format_record(&self, record: &LogRecord) -> String {
        if record.raw {
            return record.message.clone();
        }

        let tag = self.tag_config.format(record.level);
        let scope = self.scope_config.format(&record.scope);

        if self.colors_enabled {
            let color = self
                .level_colors
                .get(&record.level)
                .copied()
                .unwrap_or(Color::white());
            format!(
                "{}{tag}{} {}{scope}{} {}",
                color.fg_ansi(),
                Color::RESET,
                Color::DIM,
                Color::RESET,
                record.message
            )
        } else {
            format!("{tag} {scope} {}", record.message)
        }
    }
}

impl Output for TerminalOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let formatted = self.format_record(record);

        if !record.raw && record.level >= Level::Warn {
            writeln!(io::stderr(), "{formatted}")?;
        } else {
            writeln!(io::stdout(), "{formatted}")?;
        }

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
