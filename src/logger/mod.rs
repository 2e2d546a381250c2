//! The public logging surface: a named façade over a shared handler, plus the
//! registry that resolves dotted logger names to configured handlers.

mod registry;

pub use registry::LoggerRegistry;

use crate::caller::CallerFrame;
use crate::error::Error;
use crate::handler::Handler;
use crate::level::Level;
use std::sync::Arc;

/// A named logger. Cheap to create and clone — the handler behind it is shared,
/// so loggers are usually obtained on demand from a [`LoggerRegistry`].
#[derive(Clone)]
pub struct Logger {
    name: String,
    handler: Arc<dyn Handler>,
}

impl Logger {
    /// Binds a dotted name to a handler. Registries call this; embedders with a
    /// custom [`Handler`] can too.
    #[must_use]
    pub fn new(name: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
        Self {
            name: name.into(),
            handler,
        }
    }

    /// The dotted name `%logger` conversions render.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether a message of this severity would be printed at all — lets callers
    /// skip building expensive messages.
    #[must_use]
    pub fn is_enabled(&self, level: Level) -> bool {
        self.handler.is_enabled(level)
    }

    /// Fire-and-forget logging — I/O problems in the sink never disturb the
    /// calling code. Use [`try_log`](Self::try_log) to observe failures.
    ///
    /// # Panics
    /// When the configured pattern contains a `%caller` conversion: no frame is
    /// captured here, so the event cannot be rendered — log through the
    /// crate-root macros or [`log_with_caller`](Self::log_with_caller) instead.
    pub fn log(&self, level: Level, message: &str) {
        self.log_with_caller(level, message, None);
    }

    /// Same as [`log`](Self::log) but with a call-site frame for `%caller`
    /// conversions; the crate-root macros route through this.
    ///
    /// # Panics
    /// When the configured pattern contains a `%caller` conversion and `caller`
    /// is `None` — dropping the event would hide the misuse.
    pub fn log_with_caller(&self, level: Level, message: &str, caller: Option<CallerFrame>) {
        match self
            .handler
            .print(&self.name, level, message, &move || caller.clone())
        {
            // sink I/O problems never disturb the calling code
            Ok(()) | Err(Error::Io(_)) => {}
            // anything else means the event was lost for a fixable reason at
            // the call site — surface it instead of dropping it silently
            Err(e) => panic!("{e}"),
        }
    }

    /// Propagating variant for callers that must observe sink failures.
    ///
    /// # Errors
    /// I/O errors from the handler's sink; [`Error::MissingCallerFrame`] when a
    /// caller-bearing pattern is configured but no frame is supplied.
    pub fn try_log(
        &self,
        level: Level,
        message: &str,
        caller: Option<CallerFrame>,
    ) -> Result<(), Error> {
        self.handler
            .print(&self.name, level, message, &move || caller.clone())
    }

    /// High-volume instrumentation that should vanish in production builds.
    pub fn trace(&self, message: &str) {
        self.log(Level::Trace, message);
    }

    /// Development-time diagnostics that are too noisy for normal operation.
    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    /// Normal operational milestones — connection established, config loaded, etc.
    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    /// Non-fatal anomalies — missing optional config, deprecated features, retries.
    pub fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    /// Unrecoverable failures — I/O errors, invalid state, broken invariants.
    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }
}
