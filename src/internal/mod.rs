//! Process-wide diagnostic logger for library code (config loading, WebDAV
//! requests) that has no `Logger` handed to it.
//!
//! Uses `OnceLock` so the first `init` wins; calls made before any `init`
//! are dropped silently, which keeps library use and tests quiet.

use crate::level::Level;
use crate::logger::Logger;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Installs a terminal logger at `level`. Later calls are no-ops.
pub fn init(level: Level) {
    init_with(|| Logger::builder().level(level).terminal().done().build());
}

/// Installs a caller-built logger. Later calls are no-ops.
pub fn init_with(build: impl FnOnce() -> Logger) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    let logger = INTERNAL_LOGGER.get_or_init(build);
    if !was_init {
        logger.trace(
            "INTERNAL",
            &format!("Diagnostic logger ready at level {}", logger.min_level()),
        );
    }
}

fn log(level: Level, scope: &str, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level, scope, msg);
    }
}

pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}
