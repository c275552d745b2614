//! Assigns each listed entry to the first rule whose pattern matches its name,
//! then keeps it as a candidate only if it is old enough for that rule.

use crate::config::Rule;
use crate::dav::TrashEntry;
use chrono::{DateTime, Utc};

/// Entries owned by one rule.
#[derive(Debug)]
pub struct RuleMatches<'a> {
    pub rule: &'a Rule,
    /// Old enough to delete, in listing order.
    pub candidates: Vec<&'a TrashEntry>,
    /// Matched by name but younger than `rule.min_age_days`, or without a timestamp.
    pub retained: usize,
}

/// Outcome of matching a listing against all rules, grouped in rule order.
#[derive(Debug)]
pub struct Selection<'a> {
    pub groups: Vec<RuleMatches<'a>>,
    /// Entries no rule matched.
    pub unmatched: usize,
}

impl<'a> Selection<'a> {
    /// All candidates, grouped by rule in declaration order.
    pub fn candidates(&self) -> impl Iterator<Item = &'a TrashEntry> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.candidates.iter().copied())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.candidates.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First match wins: a rule later in the file never sees an entry an earlier
/// rule's pattern matched, even if the earlier rule keeps it for being too young.
#[must_use]
pub fn select_candidates<'a>(
    entries: &'a [TrashEntry],
    rules: &'a [Rule],
    now: DateTime<Utc>,
) -> Selection<'a> {
    let mut groups: Vec<RuleMatches<'a>> = rules
        .iter()
        .map(|rule| RuleMatches {
            rule,
            candidates: Vec::new(),
            retained: 0,
        })
        .collect();
    let mut unmatched = 0;

    for entry in entries {
        let Some(group) = groups.iter_mut().find(|g| g.rule.matches(&entry.name)) else {
            unmatched += 1;
            continue;
        };

        let old_enough = entry
            .age_days(now)
            .is_some_and(|age| age >= i64::from(group.rule.min_age_days));
        if old_enough {
            group.candidates.push(entry);
        } else {
            group.retained += 1;
        }
    }

    Selection { groups, unmatched }
}
