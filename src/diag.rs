//! Diagnostic channel for patternlog's own warnings — bad patterns, unknown config
//! keys, unparsable levels.
//!
//! Injected as a collaborator rather than held in process-wide state: the compiler,
//! config parser, and registry each receive a sink, so embedders and tests decide
//! where diagnostics go.

/// Receives patternlog's internal warnings (never the user's log messages).
pub trait DiagnosticSink: Send + Sync {
    /// Reports one diagnostic with a short scope label ("PATTERN", "CONFIG", ...).
    fn warn(&self, scope: &str, message: &str);
}

/// Default sink — writes diagnostics to stderr so misconfiguration is visible
/// without any setup.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl DiagnosticSink for StderrDiagnostics {
    fn warn(&self, scope: &str, message: &str) {
        eprintln!("[patternlog] {scope}: {message}");
    }
}

/// Discards all diagnostics — for embedders that handle misconfiguration elsewhere
/// and for tests that only care about the fallback behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl DiagnosticSink for SilentDiagnostics {
    fn warn(&self, _scope: &str, _message: &str) {}
}
