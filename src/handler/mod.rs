//! Pattern-driven handler: one compiled pattern shapes the tag, another shapes
//! the head prepended to every message body.

use crate::caller::CallerFrame;
use crate::diag::DiagnosticSink;
use crate::error::Error;
use crate::level::Level;
use crate::pattern::{FormatContext, Pattern};
use chrono::Local;
use std::io::Write as _;

/// `Send + Sync` bounds enable concurrent logging from multiple threads without
/// locks on the trait object.
pub trait Handler: Send + Sync {
    /// Whether this handler prints messages of the given severity at all.
    fn is_enabled(&self, level: Level) -> bool;

    /// Renders and emits one log event. `resolve_caller` is invoked at most
    /// once, and only when a configured pattern contains a `%caller` conversion.
    ///
    /// # Errors
    /// [`Error::MissingCallerFrame`] when a caller-bearing pattern gets no frame
    /// from the resolver; I/O errors from the underlying sink.
    fn print(
        &self,
        logger_name: &str,
        level: Level,
        message: &str,
        resolve_caller: &dyn Fn() -> Option<CallerFrame>,
    ) -> Result<(), Error>;
}

/// The two strings a pattern handler produces per event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// Result of the tag pattern — empty when no tag pattern is configured.
    pub tag: String,
    /// Message head rendered from the message pattern, followed by the body.
    pub message: String,
}

/// Formats log lines according to a tag pattern and a message pattern, both
/// compiled once at construction and reused for the handler's entire lifetime.
pub struct PatternHandler {
    level: Level,
    tag: Option<Pattern>,
    message: Option<Pattern>,
}

impl PatternHandler {
    /// Compiles both patterns through the lossy path: a malformed pattern is
    /// reported to `diag` and used as literal text, never propagated to log
    /// call sites. An absent pattern renders nothing for that slot.
    #[must_use]
    pub fn new(
        level: Level,
        tag_pattern: Option<&str>,
        message_pattern: Option<&str>,
        diag: &dyn DiagnosticSink,
    ) -> Self {
        Self {
            level,
            tag: tag_pattern.map(|p| Pattern::compile(p, diag)),
            message: message_pattern.map(|p| Pattern::compile(p, diag)),
        }
    }

    /// Minimal severity this handler prints.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// True when either configured pattern contains a `%caller` conversion.
    #[must_use]
    pub fn needs_caller(&self) -> bool {
        self.tag.as_ref().is_some_and(Pattern::needs_caller)
            || self.message.as_ref().is_some_and(Pattern::needs_caller)
    }

    /// Renders the tag and the full message for one event. Builds a fresh
    /// context snapshot, asking `resolve_caller` for a frame only when
    /// [`needs_caller`](Self::needs_caller) says a pattern will use it.
    ///
    /// # Errors
    /// [`Error::MissingCallerFrame`] when a caller-bearing pattern gets no
    /// frame from the resolver.
    pub fn render(
        &self,
        logger_name: &str,
        level: Level,
        message: &str,
        resolve_caller: &dyn Fn() -> Option<CallerFrame>,
    ) -> Result<Rendered, Error> {
        let caller = if self.needs_caller() {
            resolve_caller()
        } else {
            None
        };

        let ctx = FormatContext {
            timestamp: Local::now(),
            level,
            logger_name,
            caller: caller.as_ref(),
        };

        let tag = match &self.tag {
            Some(pattern) => pattern.apply(&ctx)?,
            None => String::new(),
        };
        let mut head = match &self.message {
            Some(pattern) => pattern.apply(&ctx)?,
            None => String::new(),
        };

        // keep the head visually separated from the body
        if !head.is_empty() && !head.ends_with(char::is_whitespace) {
            head.push(' ');
        }

        Ok(Rendered {
            tag,
            message: format!("{head}{message}"),
        })
    }
}

impl Handler for PatternHandler {
    fn is_enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    fn print(
        &self,
        logger_name: &str,
        level: Level,
        message: &str,
        resolve_caller: &dyn Fn() -> Option<CallerFrame>,
    ) -> Result<(), Error> {
        if !self.is_enabled(level) {
            return Ok(());
        }

        let rendered = self.render(logger_name, level, message, resolve_caller)?;
        let stderr = std::io::stderr();
        let mut out = stderr.lock();
        if rendered.tag.is_empty() {
            writeln!(out, "{}", rendered.message)?;
        } else {
            writeln!(out, "{} {}", rendered.tag, rendered.message)?;
        }
        Ok(())
    }
}
