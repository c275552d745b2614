//! Level tags (`[WARN ]`, `[ERROR]`) padded to a fixed width so the scope
//! column starts at the same offset on every line.

use crate::level::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    #[default]
    Center,
}

impl Alignment {
    /// Pads `s` to `width` characters; longer strings are returned unchanged.
    #[must_use]
    pub fn pad(self, s: &str, width: usize) -> String {
        let len = s.chars().count();
        if len >= width {
            return s.to_string();
        }

        let padding = width - len;
        match self {
            Self::Left => format!("{s}{}", " ".repeat(padding)),
            Self::Center => {
                let left = padding / 2;
                let right = padding - left;
                format!("{}{s}{}", " ".repeat(left), " ".repeat(right))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct TagConfig {
    pub prefix: String,
    pub suffix: String,
    pub min_width: usize,
    pub alignment: Alignment,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            prefix: "[".to_string(),
            suffix: "]".to_string(),
            min_width: 5,
            alignment: Alignment::Center,
        }
    }
}

impl TagConfig {
    /// Uppercased level name, padded and wrapped in the delimiters.
    #[must_use]
    pub fn format(&self, level: Level) -> String {
        let label = level.as_str().to_uppercase();
        let padded = self.alignment.pad(&label, self.min_width);
        format!("{}{padded}{}", self.prefix, self.suffix)
    }
}
