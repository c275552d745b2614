//! The purge run: list the trash bin, select candidates, enforce the
//! threshold, then delete (or just report, for dry runs).

mod matcher;
mod options;
mod result;

pub use matcher::{RuleMatches, Selection, select_candidates};
pub use options::PurgeOptions;
pub use result::PurgeReport;

use crate::config::Rule;
use crate::dav::{DeleteOutcome, TrashBin};
use crate::level::Level;
use crate::logger::Logger;
use crate::progress::ProgressBar;
use chrono::Utc;

/// Runs one purge against `bin`.
///
/// A threshold abort is not an error: the report comes back with
/// `threshold_exceeded` set and nothing deleted.
///
/// # Errors
/// Listing failures and transport errors during deletion abort the run.
pub fn purge(
    bin: &dyn TrashBin,
    rules: &[Rule],
    options: &PurgeOptions,
    logger: &Logger,
) -> Result<PurgeReport, crate::Error> {
    let now = options.now.unwrap_or_else(Utc::now);
    let mut report = PurgeReport::default();

    logger.info("PURGE", "Listing trash bin contents...");
    let entries = bin.list(options.depth)?;
    report.listed = entries.len();

    if entries.is_empty() {
        logger.print("PURGE", "Trash bin is empty");
        return Ok(report);
    }
    logger.info(
        "PURGE",
        &format!("Found {} item(s) in the trash bin", entries.len()),
    );

    let selection = select_candidates(&entries, rules, now);
    for group in &selection.groups {
        logger.debug(
            "PURGE",
            &format!(
                "{} item(s) match pattern {} with minimum age of {} days ({} too recent)",
                group.candidates.len(),
                group.rule.pattern(),
                group.rule.min_age_days,
                group.retained
            ),
        );
        report
            .rule_counts
            .push((group.rule.name.clone(), group.candidates.len()));
    }
    if logger.enabled(Level::Trace) {
        for group in &selection.groups {
            for entry in &group.candidates {
                let age = entry.age_days(now).unwrap_or_default();
                logger.trace(
                    "PURGE",
                    &format!(
                        "{} is {age} days old, [{}] requires {}",
                        entry.name, group.rule.name, group.rule.min_age_days
                    ),
                );
            }
        }
    }

    let candidates: Vec<_> = selection.candidates().collect();
    report.candidates = candidates.iter().map(|e| e.name.clone()).collect();

    if !options.force && candidates.len() > options.threshold {
        logger.error(
            "PURGE",
            &format!(
                "Threshold of {} files exceeded ({} files to be deleted). Aborting operation.",
                options.threshold,
                candidates.len()
            ),
        );
        logger.print("PURGE", "Files that would be deleted:");
        for name in &report.candidates {
            logger.raw(&format!("- {name}"));
        }
        report.threshold_exceeded = true;
        return Ok(report);
    }

    logger.info(
        "PURGE",
        &format!("{} item(s) match the configured patterns", candidates.len()),
    );
    if candidates.is_empty() {
        return Ok(report);
    }

    if options.dry_run {
        for entry in &candidates {
            logger.print("PURGE", &format!("Dry run - not deleting {}", entry.name));
            report.would_delete.push(entry.name.clone());
        }
        return Ok(report);
    }

    logger.info(
        "PURGE",
        &format!("Deleting {} matching item(s)", candidates.len()),
    );
    let mut bar = options
        .shows_progress()
        .then(|| ProgressBar::new(candidates.len() as u64, "Processing items"));

    for entry in candidates {
        logger.debug("PURGE", &format!("Deleting {}...", entry.name));
        if let Some(bar) = bar.as_mut() {
            bar.set_message(&entry.name);
            bar.draw();
        }

        let outcome = match bin.delete(entry) {
            Ok(outcome) => outcome,
            Err(e) => {
                if let Some(bar) = bar.as_ref() {
                    bar.clear();
                }
                return Err(e);
            }
        };

        match outcome {
            DeleteOutcome::Deleted => {
                logger.info("PURGE", &format!("Deleted: {}", entry.name));
                report.deleted.push(entry.name.clone());
            }
            DeleteOutcome::Rejected { status, body } => {
                if let Some(bar) = bar.as_ref() {
                    bar.clear();
                }
                let reason = if body.trim().is_empty() {
                    status.to_string()
                } else {
                    format!("{status}, {}", body.trim())
                };
                logger.warn(
                    "PURGE",
                    &format!("Failed to delete {}: {reason}", entry.name),
                );
                report.failed.push((entry.name.clone(), reason));
            }
        }

        if let Some(bar) = bar.as_mut() {
            bar.inc();
            bar.draw();
        }
    }

    if let Some(bar) = bar.as_ref() {
        bar.finish();
    }

    Ok(report)
}
