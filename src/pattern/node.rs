//! The executable form of a format pattern: a closed tree of nodes, each
//! producing its own text and then piping it through the width primitive.

use super::FormatContext;
use crate::error::Error;
use crate::fmt::{shorten, shorten_class_name};
use chrono::{DateTime, Local};
use std::fmt::Write as _;

/// Timestamps render as `2013-07-12 19:45:26.315` unless the pattern says otherwise.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Closed set of conversions — the compiler only ever produces these, so rendering
/// is a single exhaustive match instead of an open class hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Verbatim text between conversions (also `%%` and `%n` results).
    Literal(String),
    /// `%date{fmt}` / `%d{fmt}` — strftime format, `None` means the default.
    Timestamp { format: Option<String> },
    /// `%level` / `%p` — canonical severity name.
    Severity,
    /// `%logger{segments.budget}` / `%c{...}` — abbreviated logger name.
    LoggerName { segments: i32, budget: i32 },
    /// `%caller{segments.budget}` / `%C{...}` — abbreviated call-site rendering.
    Caller { segments: i32, budget: i32 },
    /// `%N.M(...)` — children concatenated before the width spec applies.
    Group(Vec<PatternNode>),
}

/// One node of a compiled pattern. The width pair shapes the node's output as a
/// unit, which is what lets `%60(...)` pad a whole sub-expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternNode {
    min_width: i32,
    max_width: i32,
    kind: NodeKind,
}

impl PatternNode {
    /// Widths default to `(0, 0)` — a no-op for `shorten` — unless the pattern
    /// carried an explicit `count.length` modifier.
    #[must_use]
    pub const fn new(min_width: i32, max_width: i32, kind: NodeKind) -> Self {
        Self {
            min_width,
            max_width,
            kind,
        }
    }

    /// Renders this node against one log event, then applies the node's own
    /// width spec to the result.
    ///
    /// # Errors
    /// [`Error::MissingCallerFrame`] when a `Caller` node is evaluated against a
    /// context without a resolved frame — an integration bug, never swallowed here.
    pub fn apply(&self, ctx: &FormatContext<'_>) -> Result<String, Error> {
        let text = match &self.kind {
            NodeKind::Literal(text) => text.clone(),
            NodeKind::Timestamp { format } => {
                format_timestamp(ctx.timestamp, format.as_deref())
            }
            NodeKind::Severity => ctx.level.name().to_string(),
            NodeKind::LoggerName { segments, budget } => {
                shorten_class_name(ctx.logger_name, *segments, *budget)
            }
            NodeKind::Caller { segments, budget } => {
                let frame = ctx.caller.ok_or(Error::MissingCallerFrame)?;
                shorten_class_name(&frame.to_string(), *segments, *budget)
            }
            NodeKind::Group(children) => {
                let mut joined = String::new();
                for child in children {
                    joined.push_str(&child.apply(ctx)?);
                }
                joined
            }
        };
        Ok(shorten(&text, self.min_width, self.max_width))
    }

    /// True iff the subtree contains at least one `Caller` node — the signal that
    /// lets handlers skip caller-frame resolution entirely for most patterns.
    #[must_use]
    pub fn needs_caller(&self) -> bool {
        match &self.kind {
            NodeKind::Caller { .. } => true,
            NodeKind::Group(children) => children.iter().any(Self::needs_caller),
            _ => false,
        }
    }
}

/// A bad user-supplied format must not take down logging — chrono reports unknown
/// specifiers through `fmt::Error`, which falls back to the default layout.
fn format_timestamp(timestamp: DateTime<Local>, format: Option<&str>) -> String {
    let format = format.unwrap_or(DEFAULT_DATE_FORMAT);
    let mut rendered = String::new();
    match write!(rendered, "{}", timestamp.format(format)) {
        Ok(()) => rendered,
        Err(_) => timestamp.format(DEFAULT_DATE_FORMAT).to_string(),
    }
}
