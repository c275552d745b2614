//! Progress bar for the deletion loop, drawn on stderr so it never mixes
//! with listed file names on stdout.

use std::io::{IsTerminal, Write};
use std::time::{Duration, Instant};

const DESCRIPTION_WIDTH: usize = 40;
const BAR_WIDTH: usize = 25;

pub struct ProgressBar {
    total: u64,
    current: u64,
    start: Instant,
    message: String,
    /// Redrawing with `\r` only makes sense on a terminal.
    interactive: bool,
}

impl ProgressBar {
    #[must_use]
    pub fn new(total: u64, message: impl Into<String>) -> Self {
        Self {
            total,
            current: 0,
            start: Instant::now(),
            message: message.into(),
            interactive: std::io::stderr().is_terminal(),
        }
    }

    /// Replaces the description, typically with the file being deleted.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn inc(&mut self) {
        self.current = (self.current + 1).min(self.total);
    }

    #[must_use]
    pub const fn position(&self) -> u64 {
        self.current
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// One status line without any cursor control.
    #[must_use]
    pub fn render(&self) -> String {
        let description: String = self.message.chars().take(DESCRIPTION_WIDTH).collect();

        #[allow(clippy::cast_precision_loss)]
        let fraction = if self.total == 0 {
            1.0
        } else {
            self.current as f64 / self.total as f64
        };
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let filled = ((fraction * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);

        format!(
            "{description:<width$} {pct:>3.0}%|{bar}{space}| {current}/{total} [{secs:.1}s]",
            width = DESCRIPTION_WIDTH,
            pct = fraction * 100.0,
            bar = "█".repeat(filled),
            space = " ".repeat(BAR_WIDTH - filled),
            current = self.current,
            total = self.total,
            secs = self.elapsed().as_secs_f64(),
        )
    }

    /// Redraws the status line in place.
    pub fn draw(&self) {
        if !self.interactive {
            return;
        }
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "\r\x1b[K{}", self.render());
        let _ = stderr.flush();
    }

    /// Erases the status line so a log message can be printed; the next
    /// `draw()` brings it back.
    pub fn clear(&self) {
        if !self.interactive {
            return;
        }
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "\r\x1b[K");
        let _ = stderr.flush();
    }

    /// Leaves the final state on screen and moves to a new line.
    pub fn finish(&self) {
        if !self.interactive {
            return;
        }
        self.draw();
        let _ = writeln!(std::io::stderr());
    }
}
