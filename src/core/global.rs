//! Process-wide default logger handle
//!
//! The handle is explicitly initialized; nothing is constructed behind the
//! host's back until the first `global()` call. Hosts that build their own
//! [`Logger`] never need to touch it.

use super::logger::Logger;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, initialized with the default factory
/// (threshold `Warn`, stdout sink) on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::default)
}

/// Install a caller-built logger as the process-wide instance.
///
/// Fails if the global was already initialized, returning the logger back
/// to the caller.
pub fn init_global(logger: Logger) -> Result<(), Logger> {
    GLOBAL.set(logger)
}
