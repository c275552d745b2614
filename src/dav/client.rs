//! Blocking WebDAV client for one account's trash bin. Requests run one at a
//! time; there is no retry, so the first transport failure aborts the run.

use super::{DeleteOutcome, TrashBin, TrashEntry, parse_multistatus};
use crate::config::ConnectionConfig;
use crate::internal;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use url::Url;

/// `<base>/remote.php/dav/trashbin/<username>/trash`, with the username
/// encoded as a single path segment.
///
/// # Errors
/// Fails for base URLs that can't carry a path (`mailto:`, `data:`).
pub fn trashbin_url(base: &Url, username: &str) -> Result<Url, crate::Error> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|()| crate::Error::Request(format!("'{base}' cannot be used as a base URL")))?
        .pop_if_empty()
        .extend(["remote.php", "dav", "trashbin", username, "trash"]);
    Ok(url)
}

pub struct WebDavClient {
    http: Client,
    base: Url,
    trash_url: Url,
    username: String,
    password: String,
}

impl WebDavClient {
    /// # Errors
    /// Fails on an unparsable base URL or when the TLS backend can't initialize.
    pub fn new(connection: &ConnectionConfig) -> Result<Self, crate::Error> {
        let base = Url::parse(&connection.url)?;
        let trash_url = trashbin_url(&base, &connection.username)?;
        let http = Client::builder()
            .user_agent(concat!("trashsweep/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base,
            trash_url,
            username: connection.username.clone(),
            password: connection.password.clone(),
        })
    }

    #[must_use]
    pub const fn trash_url(&self) -> &Url {
        &self.trash_url
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request.basic_auth(&self.username, Some(&self.password))
    }

    /// The listing includes the trash collection itself; it is not an item.
    fn is_trash_root(&self, entry: &TrashEntry) -> bool {
        let decode = |path: &str| {
            String::from_utf8_lossy(&urlencoding::decode_binary(
                path.trim_end_matches('/').as_bytes(),
            ))
            .into_owned()
        };
        let href_path = Url::parse(&entry.href)
            .map_or_else(|_| entry.href.clone(), |u| u.path().to_string());
        decode(&href_path) == decode(self.trash_url.path())
    }
}

impl TrashBin for WebDavClient {
    fn list(&self, depth: u32) -> Result<Vec<TrashEntry>, crate::Error> {
        let propfind = reqwest::Method::from_bytes(b"PROPFIND")
            .map_err(|e| crate::Error::Request(e.to_string()))?;
        internal::debug(
            "DAV",
            &format!("PROPFIND {} (depth {depth})", self.trash_url),
        );

        let response = self
            .authed(self.http.request(propfind, self.trash_url.clone()))
            .header("Depth", depth.to_string())
            .send()?;

        let status = response.status();
        if status != StatusCode::MULTI_STATUS {
            let body = response.text().unwrap_or_default();
            return Err(crate::Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text()?;
        let entries: Vec<_> = parse_multistatus(&body)?
            .into_iter()
            .filter(|entry| !self.is_trash_root(entry))
            .collect();
        internal::debug("DAV", &format!("Listing returned {} item(s)", entries.len()));
        Ok(entries)
    }

    fn delete(&self, entry: &TrashEntry) -> Result<DeleteOutcome, crate::Error> {
        // hrefs are absolute paths, so joining keeps only the base's origin
        let url = self.base.join(&entry.href)?;
        internal::trace("DAV", &format!("DELETE {url}"));

        let response = self.authed(self.http.delete(url)).send()?;
        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(DeleteOutcome::Deleted);
        }

        Ok(DeleteOutcome::Rejected {
            status: status.as_u16(),
            body: response.text().unwrap_or_default(),
        })
    }
}
