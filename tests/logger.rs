//! Tests for logger functionality.

mod common;

use common::capturing_logger;
use trashsweep::{Level, Logger};

#[test]
fn builder_default() {
    let logger = Logger::builder().build();
    assert_eq!(logger.min_level(), Level::Info);
    assert_eq!(logger.output_count(), 0);
}

#[test]
fn builder_with_terminal() {
    let logger = Logger::builder().terminal().colors(false).done().build();
    assert_eq!(logger.output_count(), 1);
}

#[test]
fn log_respects_level() {
    let (logger, capture) = capturing_logger(Level::Warn);
    logger.info("TEST", "filtered");
    logger.warn("TEST", "kept");
    logger.error("TEST", "also kept");

    assert_eq!(capture.messages(), vec!["kept", "also kept"]);
}

#[test]
fn print_and_raw_bypass_level() {
    let (logger, capture) = capturing_logger(Level::Error);
    logger.print("PURGE", "Files that would be deleted:");
    logger.raw("- a.txt.d1");

    let records = capture.records();
    assert_eq!(records.len(), 2);
    assert!(!records[0].raw);
    assert_eq!(records[0].scope, "PURGE");
    assert!(records[1].raw);
    assert!(records[1].scope.is_empty());
}

#[test]
fn enabled_matches_min_level() {
    let (logger, _) = capturing_logger(Level::Debug);
    assert!(!logger.enabled(Level::Trace));
    assert!(logger.enabled(Level::Debug));
    assert!(logger.enabled(Level::Error));
}

#[test]
fn flush_succeeds_with_outputs() {
    let (logger, _) = capturing_logger(Level::Info);
    assert!(logger.flush().is_ok());
}
