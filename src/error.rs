//! Unified error type for all trashsweep operations.

use crate::config::ConfigError;

/// Error type for trashsweep operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// Rule file could not be parsed or validated.
    Config(ConfigError),
    /// Transport-level HTTP failure (DNS, TLS, connection reset, ...).
    Http(reqwest::Error),
    /// Base URL or href could not be turned into a request URL.
    Url(url::ParseError),
    /// A request could not be built (method, URL shape).
    Request(String),
    /// The multistatus body was not well-formed XML.
    Xml(quick_xml::Error),
    /// The server answered with an unexpected status code.
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, kept for the error message.
        body: String,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Url(e) => write!(f, "invalid URL: {e}"),
            Self::Xml(e) => write!(f, "malformed WebDAV response: {e}"),
            Self::Request(s) => write!(f, "invalid request: {s}"),
            Self::Status { status: 401, .. } => {
                write!(f, "authentication failed (status 401), check username and password")
            }
            Self::Status { status, body } => {
                if body.trim().is_empty() {
                    write!(f, "unexpected status {status}")
                } else {
                    write!(f, "unexpected status {status}: {}", body.trim())
                }
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Http(e) => Some(e),
            Self::Url(e) => Some(e),
            Self::Xml(e) => Some(e),
            Self::Request(_) | Self::Status { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::Url(e)
    }
}

impl From<quick_xml::Error> for Error {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e)
    }
}
