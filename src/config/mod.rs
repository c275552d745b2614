//! Rule file loading: INI parsing, connection validation, and rule compilation.
//!
//! Separated from struct definitions so that the loading logic (file I/O,
//! default inheritance, validation) stays independent of the data model.

mod error;
mod ini;
mod structs;

pub use error::ConfigError;
pub use ini::{DEFAULT_SECTION, Ini};
pub use structs::{ConnectionConfig, DEFAULT_MINIMUM_AGE, DEFAULT_THRESHOLD, Rule};

use crate::internal;
use std::fs;
use std::path::{Path, PathBuf};

/// Section holding the server URL and credentials.
pub const CONNECTION_SECTION: &str = "Nextcloud";

/// One rule file: where to connect and which trash entries to purge.
#[derive(Debug, Clone)]
pub struct RuleFile {
    pub connection: ConnectionConfig,
    /// Pattern sections in file order; the first matching rule owns an entry.
    pub rules: Vec<Rule>,
}

impl RuleFile {
    /// Reads and validates a rule file from disk.
    ///
    /// # Errors
    /// Fails if the file can't be read, isn't valid INI, or misses required settings.
    pub fn load(path: &Path) -> Result<Self, crate::Error> {
        internal::debug("CONFIG", &format!("Loading rules from {}", path.display()));
        let content = fs::read_to_string(path)?;
        let ini = Ini::parse(&content)?;
        let rule_file = Self::from_ini(&ini)?;
        internal::debug(
            "CONFIG",
            &format!(
                "Loaded {} rule(s) for {}",
                rule_file.rules.len(),
                rule_file.connection.username
            ),
        );
        Ok(rule_file)
    }

    /// Builds connection settings and rules from a parsed document.
    ///
    /// # Errors
    /// Fails on a missing connection section, missing credentials, malformed
    /// numbers, invalid regexes, or when no section defines a pattern.
    pub fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        if !ini.has_section(CONNECTION_SECTION) {
            return Err(ConfigError::MissingSection(CONNECTION_SECTION.to_string()));
        }

        let field = |key: &str| {
            ini.get(CONNECTION_SECTION, key)
                .filter(|v| !v.is_empty())
                .map(ToString::to_string)
        };
        let (Some(url), Some(username), Some(password)) =
            (field("url"), field("username"), field("password"))
        else {
            let missing = ["url", "username", "password"]
                .into_iter()
                .filter(|key| field(key).is_none())
                .collect();
            return Err(ConfigError::MissingFields(missing));
        };

        let minimum_age = parse_number(ini, CONNECTION_SECTION, "minimum_age")?
            .unwrap_or(DEFAULT_MINIMUM_AGE);
        let threshold =
            parse_number(ini, CONNECTION_SECTION, "threshold")?.unwrap_or(DEFAULT_THRESHOLD);

        let mut rules = Vec::new();
        for section in ini.sections().filter(|s| *s != CONNECTION_SECTION) {
            let Some(pattern) = ini.get(section, "pattern").filter(|p| !p.is_empty()) else {
                internal::debug(
                    "CONFIG",
                    &format!("Section [{section}] has no pattern, ignoring"),
                );
                continue;
            };

            // Own value and [DEFAULT] both come through get(); the connection default is last
            let min_age = parse_number(ini, section, "minimum_age")?.unwrap_or(minimum_age);
            let rule = Rule::new(section, pattern, min_age).map_err(|source| {
                ConfigError::InvalidPattern {
                    section: section.to_string(),
                    source,
                }
            })?;
            internal::trace(
                "CONFIG",
                &format!("Rule [{section}]: pattern={pattern}, minimum_age={min_age}"),
            );
            rules.push(rule);
        }

        if rules.is_empty() {
            return Err(ConfigError::NoPatterns);
        }

        Ok(Self {
            connection: ConnectionConfig {
                url,
                username,
                password,
                minimum_age,
                threshold,
            },
            rules,
        })
    }

    /// XDG-compliant fallback used when no rule file is given on the command line.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("trashsweep").join("trashsweep.ini"))
            .ok_or(ConfigError::ConfigDirNotFound)
    }
}

fn parse_number<T: std::str::FromStr>(
    ini: &Ini,
    section: &str,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    ini.get(section, key)
        .map(|value| {
            value.parse().map_err(|_| ConfigError::InvalidNumber {
                section: section.to_string(),
                key,
                value: value.to_string(),
            })
        })
        .transpose()
}
