//! Command handlers. Purging is the only command; it owns per-file error
//! reporting so one broken rule file doesn't stop the others.

mod purge;

pub use purge::cmd_purge;
