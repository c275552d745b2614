//! Rule files are plain INI as written for Python's `configparser`, so this
//! parser follows the same conventions: `=` or `:` separators, lowercase keys,
//! full-line `#`/`;` comments, indented continuation lines, and a `[DEFAULT]`
//! section whose values every other section falls back to.

use super::ConfigError;
use std::collections::HashMap;

/// Name of the section that supplies fallback values to all others.
pub const DEFAULT_SECTION: &str = "DEFAULT";

type Entries = HashMap<String, String>;

#[derive(Clone, Copy)]
enum Target {
    Defaults,
    Section(usize),
}

/// Parsed INI document. Section order is preserved because rule order matters.
#[derive(Debug, Clone, Default)]
pub struct Ini {
    defaults: Entries,
    sections: Vec<(String, Entries)>,
}

impl Ini {
    /// # Errors
    /// Returns the first syntax problem found, with its 1-based line number.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let mut ini = Self::default();
        let mut target: Option<Target> = None;
        let mut last_key: Option<String> = None;
        // Blank lines inside a value are kept, but only once a continuation follows
        let mut pending_blank = 0;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim_end_matches('\r');
            let trimmed = line.trim();

            if trimmed.is_empty() {
                pending_blank += 1;
                continue;
            }
            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            let indented = line.starts_with(|c: char| c.is_whitespace());
            if indented
                && let (Some(t), Some(key)) = (target, last_key.as_ref())
            {
                if let Some(value) = ini.entries_mut(t).get_mut(key) {
                    if !value.is_empty() || pending_blank > 0 {
                        value.push_str(&"\n".repeat(pending_blank + 1));
                    }
                    value.push_str(trimmed);
                }
                pending_blank = 0;
                continue;
            }
            pending_blank = 0;

            if let Some(name) = trimmed
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
            {
                let name = name.trim();
                target = Some(ini.open_section(name, line_no)?);
                last_key = None;
                continue;
            }

            let Some(split) = trimmed.find(['=', ':']) else {
                return Err(ConfigError::Syntax {
                    line: line_no,
                    text: trimmed.to_string(),
                });
            };
            let key = trimmed[..split].trim().to_lowercase();
            let value = trimmed[split + 1..].trim().to_string();
            if key.is_empty() {
                return Err(ConfigError::Syntax {
                    line: line_no,
                    text: trimmed.to_string(),
                });
            }

            let Some(t) = target else {
                return Err(ConfigError::MissingSectionHeader { line: line_no });
            };

            let section_name = ini.section_name(t).to_string();
            let entries = ini.entries_mut(t);
            if entries.contains_key(&key) {
                return Err(ConfigError::DuplicateKey {
                    line: line_no,
                    section: section_name,
                    key,
                });
            }
            entries.insert(key.clone(), value);
            last_key = Some(key);
        }

        Ok(ini)
    }

    fn open_section(&mut self, name: &str, line: usize) -> Result<Target, ConfigError> {
        if name == DEFAULT_SECTION {
            return Ok(Target::Defaults);
        }
        if self.has_section(name) {
            return Err(ConfigError::DuplicateSection {
                line,
                name: name.to_string(),
            });
        }
        self.sections.push((name.to_string(), Entries::new()));
        Ok(Target::Section(self.sections.len() - 1))
    }

    fn entries_mut(&mut self, target: Target) -> &mut Entries {
        match target {
            Target::Defaults => &mut self.defaults,
            Target::Section(i) => &mut self.sections[i].1,
        }
    }

    fn section_name(&self, target: Target) -> &str {
        match target {
            Target::Defaults => DEFAULT_SECTION,
            Target::Section(i) => &self.sections[i].0,
        }
    }

    /// Section names in file order, excluding `[DEFAULT]`.
    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.iter().any(|(n, _)| n == name)
    }

    /// Looks up `key` in `section`, falling back to `[DEFAULT]`. Keys are case-insensitive.
    /// Returns `None` for unknown sections, even when `[DEFAULT]` has the key.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        if section == DEFAULT_SECTION {
            return self.defaults.get(&key).map(String::as_str);
        }
        let (_, entries) = self.sections.iter().find(|(n, _)| n == section)?;
        entries
            .get(&key)
            .or_else(|| self.defaults.get(&key))
            .map(String::as_str)
    }

}
