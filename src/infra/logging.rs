//! Logger handle injected into the store and the application facade.
//!
//! Library code never reaches for a global logger. Whoever builds a
//! [`FileStore`](crate::infra::FileStore) or [`NotesApp`](crate::app::NotesApp)
//! decides where diagnostics go; the default drops them.

use std::sync::Arc;

/// Sink for diagnostic messages.
pub trait Logger: Send + Sync {
    /// Called for step-by-step tracing of storage operations.
    fn debug(&self, message: &str);
    /// Called when something was skipped but the operation carried on.
    fn warn(&self, message: &str);
}

/// A logger that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn debug(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
}

/// Forwards messages to the `log` crate macros.
///
/// The binary pairs this with `env_logger`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn debug(&self, message: &str) {
        log::debug!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}

/// Returns a shared no-op logger.
pub fn noop_logger() -> Arc<dyn Logger> {
    Arc::new(NoopLogger)
}
