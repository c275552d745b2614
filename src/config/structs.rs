//! Configuration struct definitions.

use regex::Regex;

/// Fallback for `minimum_age` when neither the rule nor the connection section sets one.
pub const DEFAULT_MINIMUM_AGE: u32 = 30;

/// Fallback for `threshold` when the connection section doesn't set one.
pub const DEFAULT_THRESHOLD: usize = 10;

/// Connection details from the `[Nextcloud]` section.
#[derive(Clone)]
pub struct ConnectionConfig {
    /// Server root, e.g. `https://cloud.example.org`.
    pub url: String,
    /// Account whose trash bin is purged.
    pub username: String,
    /// Password or app token used for basic auth.
    pub password: String,
    /// Default minimum age in days for rules without their own.
    pub minimum_age: u32,
    /// Maximum number of deletions per run before `--force` is required.
    pub threshold: usize,
}

impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("minimum_age", &self.minimum_age)
            .field("threshold", &self.threshold)
            .finish()
    }
}

/// One pattern section: entries whose name matches are purged once they reach `min_age_days`.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Section name the rule came from.
    pub name: String,
    pattern: String,
    regex: Regex,
    /// Minimum age in days before a matching entry is deleted.
    pub min_age_days: u32,
}

impl Rule {
    /// Patterns match from the start of the name, like Python's `re.match`.
    ///
    /// # Errors
    /// Returns the regex compile error for invalid patterns.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        min_age_days: u32,
    ) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{pattern})"))?;
        Ok(Self {
            name: name.into(),
            pattern: pattern.to_string(),
            regex,
            min_age_days,
        })
    }

    /// The pattern as written in the rule file.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn matches(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }
}
