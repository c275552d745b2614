//! Shared fixtures: an in-memory trash bin and a capturing log output.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use trashsweep::{DeleteOutcome, Error, Level, LogRecord, Logger, Output, TrashBin, TrashEntry};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Trash root entry for `name`, deleted `days` days before `now()`.
pub fn entry(name: &str, days: i64) -> TrashEntry {
    TrashEntry::new(
        format!("/remote.php/dav/trashbin/alice/trash/{name}"),
        Some(now() - Duration::days(days)),
        false,
    )
}

#[derive(Default)]
pub struct FakeBin {
    pub entries: Vec<TrashEntry>,
    /// Names the server refuses, with the status it answers.
    pub refuse: HashMap<String, u16>,
    pub fail_listing: bool,
    pub deleted: RefCell<Vec<String>>,
    pub listed_depth: RefCell<Option<u32>>,
}

impl FakeBin {
    pub fn with(entries: Vec<TrashEntry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.borrow().clone()
    }
}

impl TrashBin for FakeBin {
    fn list(&self, depth: u32) -> Result<Vec<TrashEntry>, Error> {
        *self.listed_depth.borrow_mut() = Some(depth);
        if self.fail_listing {
            return Err(Error::Status {
                status: 401,
                body: String::new(),
            });
        }
        Ok(self.entries.clone())
    }

    fn delete(&self, entry: &TrashEntry) -> Result<DeleteOutcome, Error> {
        if let Some(&status) = self.refuse.get(&entry.name) {
            return Ok(DeleteOutcome::Rejected {
                status,
                body: "locked".to_string(),
            });
        }
        self.deleted.borrow_mut().push(entry.name.clone());
        Ok(DeleteOutcome::Deleted)
    }
}

#[derive(Clone, Default)]
pub struct Capture(Arc<Mutex<Vec<LogRecord>>>);

impl Capture {
    pub fn records(&self) -> Vec<LogRecord> {
        self.0.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.message).collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.messages().iter().any(|m| m.contains(needle))
    }
}

impl Output for Capture {
    fn write(&self, record: &LogRecord) -> Result<(), Error> {
        self.0.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }
}

pub fn capturing_logger(level: Level) -> (Logger, Capture) {
    let capture = Capture::default();
    let logger = Logger::builder().level(level).output(capture.clone()).build();
    (logger, capture)
}
