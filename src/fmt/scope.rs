//! Scope names differ in length; padding keeps the message column from
//! jumping around.

use super::tag::Alignment;

#[derive(Debug, Clone)]
pub struct ScopeConfig {
    pub min_width: usize,
    pub alignment: Alignment,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            min_width: 8,
            alignment: Alignment::Left,
        }
    }
}

impl ScopeConfig {
    #[must_use]
    pub fn format(&self, scope: &str) -> String {
        self.alignment.pad(scope, self.min_width)
    }
}
