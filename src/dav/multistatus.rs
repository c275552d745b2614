//! `207 Multi-Status` body parsing. Elements are matched by local name, so
//! servers may use any prefix for the `DAV:` namespace (`d:`, `D:`, none).

use super::TrashEntry;
use crate::internal;
use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::reader::Reader;

#[derive(Clone, Copy)]
enum Field {
    Href,
    LastModified,
}

#[derive(Default)]
struct PartialEntry {
    href: String,
    last_modified: String,
    is_collection: bool,
}

impl PartialEntry {
    fn finish(self) -> Option<TrashEntry> {
        let href = self.href.trim();
        if href.is_empty() {
            return None;
        }
        let last_modified = parse_http_date(self.last_modified.trim());
        Some(TrashEntry::new(href, last_modified, self.is_collection))
    }
}

/// Parses `getlastmodified` (`Tue, 14 Nov 2023 22:13:20 GMT`). Unparsable
/// values are logged and treated as absent, so the entry is never purged.
fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }
    match DateTime::parse_from_rfc2822(value) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            internal::warn(
                "DAV",
                &format!("Could not parse getlastmodified '{value}': {e}"),
            );
            None
        }
    }
}

/// Extracts one `TrashEntry` per `<response>`.
///
/// # Errors
/// Returns `Error::Xml` for malformed documents.
pub fn parse_multistatus(xml: &str) -> Result<Vec<TrashEntry>, crate::Error> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut current: Option<PartialEntry> = None;
    let mut field: Option<Field> = None;
    let mut in_resourcetype = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"response" => current = Some(PartialEntry::default()),
                b"href" => field = Some(Field::Href),
                b"getlastmodified" => field = Some(Field::LastModified),
                b"resourcetype" => in_resourcetype = true,
                b"collection" if in_resourcetype => {
                    if let Some(entry) = current.as_mut() {
                        entry.is_collection = true;
                    }
                }
                _ => {}
            },
            Event::Empty(e) => {
                if in_resourcetype
                    && e.local_name().as_ref() == b"collection"
                    && let Some(entry) = current.as_mut()
                {
                    entry.is_collection = true;
                }
            }
            Event::Text(t) => {
                if let (Some(f), Some(entry)) = (field, current.as_mut()) {
                    let text = t.unescape()?;
                    match f {
                        Field::Href => entry.href.push_str(&text),
                        Field::LastModified => entry.last_modified.push_str(&text),
                    }
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"response" => {
                    if let Some(entry) = current.take().and_then(PartialEntry::finish) {
                        internal::trace("DAV", &format!("Listed: {}", entry.href));
                        entries.push(entry);
                    }
                }
                b"href" | b"getlastmodified" => field = None,
                b"resourcetype" => in_resourcetype = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}
