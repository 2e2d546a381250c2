//! Caller-site record consumed by `%caller` conversions.
//!
//! Resolving a caller frame is the only potentially expensive step of rendering a
//! log line, so the engine treats it as an opaque optional record supplied from
//! outside: the handler asks for one only when the compiled pattern actually
//! contains a `%caller` conversion. The crate-root logging macros capture a frame
//! from `module_path!`/`file!`/`line!` at the call site.

use std::fmt;

/// Identifies the immediate call site outside the logging library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerFrame {
    type_name: String,
    method_name: String,
    file_name: Option<String>,
    line: u32,
}

impl CallerFrame {
    /// Rust module paths use `::`, but the abbreviation algorithms work on dotted
    /// names — the separator is normalized once at construction.
    #[must_use]
    pub fn new(type_name: &str, method_name: &str, file_name: &str, line: u32) -> Self {
        Self {
            type_name: type_name.replace("::", "."),
            method_name: method_name.to_string(),
            file_name: (!file_name.is_empty()).then(|| file_name.to_string()),
            line,
        }
    }

    /// Dotted name of the module or type the log call was made from.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Name of the enclosing function.
    #[must_use]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Source file of the call site, when known.
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Source line of the call site.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// The rendering `%caller` abbreviates — `#` separates type from method so the
/// dot-based segment collapsing never splits inside the method name.
impl fmt::Display for CallerFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}:{}", self.type_name, self.method_name, self.line)
    }
}
