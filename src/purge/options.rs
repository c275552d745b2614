//! Per-run knobs for the purge engine, separate from the rule file so the
//! same rules can be run as a dry run, forced, or with a progress bar.

use crate::config::DEFAULT_THRESHOLD;
use chrono::{DateTime, Utc};

/// Everything defaults to the safe side: threshold enforced, progress off.
#[derive(Debug, Clone)]
pub struct PurgeOptions {
    /// Abort without deleting anything when more entries than this match.
    pub threshold: usize,
    /// List candidates but never issue `DELETE`.
    pub dry_run: bool,
    /// Ignore the threshold.
    pub force: bool,
    /// Draw a progress bar during deletion (ignored for dry runs).
    pub progress: bool,
    /// `PROPFIND` depth; 1 lists only the trash root.
    pub depth: u32,
    /// Reference time for ages; `None` means the current time.
    pub now: Option<DateTime<Utc>>,
}

impl Default for PurgeOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            dry_run: false,
            force: false,
            progress: false,
            depth: 1,
            now: None,
        }
    }
}

impl PurgeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub const fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub const fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    #[must_use]
    pub const fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    #[must_use]
    pub const fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Pins the clock so ages are reproducible.
    #[must_use]
    pub const fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// The bar and dry-run listing would overwrite each other.
    #[must_use]
    pub const fn shows_progress(&self) -> bool {
        self.progress && !self.dry_run
    }
}
