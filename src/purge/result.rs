//! Outcome of one purge run. Actual and dry-run results live in separate
//! lists so the summary can say "deleted" or "would delete" accurately.

use crate::logger::Logger;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PurgeReport {
    /// Entries returned by the listing.
    pub listed: usize,
    /// `(section, candidates)` per rule, in rule order.
    pub rule_counts: Vec<(String, usize)>,
    /// Names selected for deletion, grouped by rule.
    pub candidates: Vec<String>,
    pub deleted: Vec<String>,
    pub would_delete: Vec<String>,
    /// `(name, reason)` for deletions the server refused.
    pub failed: Vec<(String, String)>,
    /// The run stopped before deleting because too many entries matched.
    pub threshold_exceeded: bool,
}

impl PurgeReport {
    /// Deleted or would-be-deleted count, whichever mode ran.
    #[must_use]
    pub const fn count(&self) -> usize {
        if self.deleted.is_empty() {
            self.would_delete.len()
        } else {
            self.deleted.len()
        }
    }

    /// No refusals and no threshold abort.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed.is_empty() && !self.threshold_exceeded
    }

    /// One summary line at info level. Threshold aborts already reported
    /// themselves, so they get no summary.
    pub fn log(&self, logger: &Logger, dry_run: bool) {
        if self.threshold_exceeded {
            return;
        }

        let verb = if dry_run { "would delete" } else { "deleted" };
        logger.info(
            "PURGE",
            &format!(
                "Summary: {} listed, {} matched, {} {verb}, {} failed",
                self.listed,
                self.candidates.len(),
                self.count(),
                self.failed.len()
            ),
        );
    }
}
