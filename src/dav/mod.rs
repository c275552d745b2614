//! WebDAV access to the Nextcloud trash bin.
//!
//! The purge engine only sees the `TrashBin` trait, so tests can swap the
//! HTTP client for an in-memory bin that records delete calls.

mod client;
mod multistatus;

pub use client::{WebDavClient, trashbin_url};
pub use multistatus::parse_multistatus;

use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// One item in the trash bin as reported by `PROPFIND`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrashEntry {
    /// Server path, percent-encoded, used verbatim for `DELETE`.
    pub href: String,
    /// Decoded last path segment, e.g. `report.pdf.d1700000000`.
    pub name: String,
    /// Deletion time for items in the trash root; absent for some nested items.
    pub last_modified: Option<DateTime<Utc>>,
    pub is_collection: bool,
}

impl TrashEntry {
    /// Derives the display name from the href's last segment.
    #[must_use]
    pub fn new(
        href: impl Into<String>,
        last_modified: Option<DateTime<Utc>>,
        is_collection: bool,
    ) -> Self {
        let href = href.into();
        let name = name_from_href(&href);
        Self {
            href,
            name,
            last_modified,
            is_collection,
        }
    }

    /// Whole days since `last_modified`, rounded down. `None` without a timestamp.
    #[must_use]
    pub fn age_days(&self, now: DateTime<Utc>) -> Option<i64> {
        self.last_modified
            .map(|modified| (now - modified).num_seconds().div_euclid(SECONDS_PER_DAY))
    }
}

/// Last non-empty path segment, percent-decoded.
#[must_use]
pub fn name_from_href(href: &str) -> String {
    let segment = href
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    String::from_utf8_lossy(&urlencoding::decode_binary(segment.as_bytes())).into_owned()
}

/// Result of a single `DELETE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The server refused; the run continues with the next entry.
    Rejected { status: u16, body: String },
}

/// Remote trash bin operations the purge engine needs.
pub trait TrashBin {
    /// Lists entries up to `depth` levels below the trash root.
    ///
    /// # Errors
    /// Transport failures, non-207 responses, and malformed bodies.
    fn list(&self, depth: u32) -> Result<Vec<TrashEntry>, crate::Error>;

    /// Permanently deletes one entry.
    ///
    /// # Errors
    /// Transport failures only; refusals come back as `DeleteOutcome::Rejected`.
    fn delete(&self, entry: &TrashEntry) -> Result<DeleteOutcome, crate::Error>;
}
