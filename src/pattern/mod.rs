//! The log-line pattern engine: compiles a format string such as
//! `%d{%H:%M:%S} %5level %60(%logger{30.30} %caller{-2.20}):%n` into an
//! executable node tree, then renders it against a per-event context.
//!
//! Compilation happens once per configured pattern; rendering is a pure,
//! synchronous string computation invoked once per log event. A compiled
//! [`Pattern`] is immutable and safe to evaluate concurrently.

mod compiler;
mod node;

pub use node::{DEFAULT_DATE_FORMAT, NodeKind, PatternNode};

use crate::caller::CallerFrame;
use crate::diag::DiagnosticSink;
use crate::error::Error;
use crate::level::Level;
use chrono::{DateTime, Local};
use compiler::Compiler;

/// Immutable per-event snapshot the engine renders against. Owned by the caller
/// for the duration of one render; the engine never mutates or retains it.
#[derive(Debug, Clone, Copy)]
pub struct FormatContext<'a> {
    /// When the event happened.
    pub timestamp: DateTime<Local>,
    /// Severity of the event.
    pub level: Level,
    /// Dotted name of the logger the event was issued through.
    pub logger_name: &'a str,
    /// Call-site record, resolved by the handler only when the pattern needs it.
    pub caller: Option<&'a CallerFrame>,
}

/// A compiled format pattern: the root group node plus the cached answer to
/// "does any node in here need a caller frame".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    root: PatternNode,
    needs_caller: bool,
}

impl Pattern {
    /// Strict compilation — fails on the first token no rule matches.
    ///
    /// # Errors
    /// [`Error::MalformedPattern`] with the offending offset.
    pub fn try_compile(pattern: &str) -> Result<Self, Error> {
        Compiler::new(pattern).compile().map(Self::from_node)
    }

    /// Public compile entry point: a malformed configuration pattern must never
    /// disrupt logging, so failures are reported through the injected sink and
    /// the entire original string becomes one literal.
    #[must_use]
    pub fn compile(pattern: &str, diag: &dyn DiagnosticSink) -> Self {
        match Self::try_compile(pattern) {
            Ok(compiled) => compiled,
            Err(e) => {
                diag.warn(
                    "PATTERN",
                    &format!("cannot compile '{pattern}': {e}; using it as literal text"),
                );
                Self::literal(pattern)
            }
        }
    }

    /// A pattern that renders the given text verbatim — the fallback shape.
    #[must_use]
    pub fn literal(text: &str) -> Self {
        Self::from_node(PatternNode::new(
            0,
            0,
            NodeKind::Literal(text.to_string()),
        ))
    }

    /// Wraps an already-built node tree; tests and embedders can assemble trees
    /// directly instead of going through the compiler.
    #[must_use]
    pub fn from_node(root: PatternNode) -> Self {
        let needs_caller = root.needs_caller();
        Self { root, needs_caller }
    }

    /// Cached at construction so handlers can decide to skip caller-frame
    /// resolution without walking the tree per event.
    #[must_use]
    pub const fn needs_caller(&self) -> bool {
        self.needs_caller
    }

    /// Renders one log event.
    ///
    /// # Errors
    /// [`Error::MissingCallerFrame`] when the tree contains a `%caller`
    /// conversion but `ctx.caller` is `None` — a violation of the
    /// [`needs_caller`](Self::needs_caller) contract by the integration layer.
    pub fn apply(&self, ctx: &FormatContext<'_>) -> Result<String, Error> {
        self.root.apply(ctx)
    }
}
