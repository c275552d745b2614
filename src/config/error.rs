//! Configuration error types.

/// Error type for rule file parsing and validation.
#[derive(Debug)]
pub enum ConfigError {
    /// A key/value line appeared before any `[section]` header.
    MissingSectionHeader { line: usize },
    /// A line that is neither a header, a comment, nor `key = value`.
    Syntax { line: usize, text: String },
    /// The same `[section]` header appears twice in one file.
    DuplicateSection { line: usize, name: String },
    /// The same key appears twice within one section.
    DuplicateKey {
        line: usize,
        section: String,
        key: String,
    },
    /// A required section is absent.
    MissingSection(String),
    /// Required connection fields are absent or empty.
    MissingFields(Vec<&'static str>),
    /// A numeric option could not be parsed.
    InvalidNumber {
        section: String,
        key: &'static str,
        value: String,
    },
    /// A pattern section holds an invalid regular expression.
    InvalidPattern {
        section: String,
        source: regex::Error,
    },
    /// No section defines a `pattern`.
    NoPatterns,
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSectionHeader { line } => {
                write!(f, "line {line}: key/value pair before any section header")
            }
            Self::Syntax { line, text } => write!(f, "line {line}: cannot parse '{text}'"),
            Self::DuplicateSection { line, name } => {
                write!(f, "line {line}: section '{name}' already exists")
            }
            Self::DuplicateKey { line, section, key } => {
                write!(f, "line {line}: option '{key}' in section '{section}' already exists")
            }
            Self::MissingSection(name) => write!(f, "missing '{name}' section"),
            Self::MissingFields(fields) => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
            Self::InvalidNumber {
                section,
                key,
                value,
            } => write!(f, "[{section}] {key}: '{value}' is not a valid number"),
            Self::InvalidPattern { section, source } => {
                write!(f, "[{section}] invalid pattern: {source}")
            }
            Self::NoPatterns => write!(f, "no patterns specified"),
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}
