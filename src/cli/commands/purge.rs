//! Processes each rule file in order: load, connect, purge, report.

use crate::cli::Cli;
use crate::config::{Rule, RuleFile};
use crate::dav::WebDavClient;
use crate::logger::Logger;
use crate::purge::{PurgeOptions, PurgeReport, purge};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Fails the exit code if any file errored, any deletion was refused, or a
/// threshold stopped a run, so cron notices.
#[must_use]
pub fn cmd_purge(cli: &Cli, logger: &Logger) -> ExitCode {
    let files: Vec<PathBuf> = if cli.files.is_empty() {
        match RuleFile::default_path() {
            Ok(path) => vec![path],
            Err(e) => {
                logger.error("CLI", &format!("{e}"));
                return ExitCode::FAILURE;
            }
        }
    } else {
        cli.files.clone()
    };

    let mut clean = true;
    for file in &files {
        logger.info(
            "CONFIG",
            &format!("Processing configuration file: {}", file.display()),
        );
        match process_file(file, cli, logger) {
            Ok(report) => {
                report.log(logger, cli.dry_run);
                clean &= report.is_clean();
            }
            Err(e) => {
                logger.error(
                    "CLI",
                    &format!("Error processing {}: {e}", file.display()),
                );
                clean = false;
            }
        }
    }

    let _ = logger.flush();
    if clean {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn process_file(path: &Path, cli: &Cli, logger: &Logger) -> Result<PurgeReport, crate::Error> {
    let rule_file = RuleFile::load(path)?;
    let connection = &rule_file.connection;

    let patterns: Vec<&str> = rule_file.rules.iter().map(Rule::pattern).collect();
    logger.info("CONFIG", "Purging files matching:");
    logger.info(
        "CONFIG",
        &format!(" - File name patterns: \"{}\"", patterns.join("\", \"")),
    );
    if !cli.force {
        logger.info(
            "CONFIG",
            &format!(" - Maximum threshold of {} files", connection.threshold),
        );
    }
    logger.info(
        "CONFIG",
        &format!(" - Minimum age of {} days", connection.minimum_age),
    );

    let client = WebDavClient::new(connection)?;
    logger.debug("DAV", &format!("Trash bin URL: {}", client.trash_url()));

    let options = PurgeOptions::new()
        .threshold(connection.threshold)
        .dry_run(cli.dry_run)
        .force(cli.force)
        .progress(cli.progress)
        .depth(cli.depth);

    purge(&client, &rule_file.rules, &options, logger)
}
