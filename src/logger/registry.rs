//! Maps dotted logger names to configured handlers.
//!
//! Resolution is longest-prefix: `logger.com.example.net=...` wins over
//! `logger.com.example=...` for `com.example.net.Socket`, and anything with no
//! matching prefix falls back to the root handler.

use super::Logger;
use crate::config::Config;
use crate::diag::DiagnosticSink;
use crate::handler::PatternHandler;
use std::sync::Arc;

/// Immutable after construction — handlers are compiled once from config and
/// shared by every logger the registry hands out.
pub struct LoggerRegistry {
    root: Arc<PatternHandler>,
    handlers: Vec<(String, Arc<PatternHandler>)>,
}

impl LoggerRegistry {
    /// Compiles every configured handler up front; pattern problems are reported
    /// through `diag` and degrade to literal patterns, never to a panic.
    #[must_use]
    pub fn from_config(config: &Config, diag: &dyn DiagnosticSink) -> Self {
        let root = Arc::new(config.root.to_handler(diag));
        let handlers = config
            .loggers
            .iter()
            .map(|(name, spec)| (name.clone(), Arc::new(spec.to_handler(diag))))
            .collect();
        Self { root, handlers }
    }

    /// Returns the logger for a dotted name, bound to the handler whose
    /// configured prefix is the longest match.
    #[must_use]
    pub fn logger(&self, name: &str) -> Logger {
        let mut best: Option<&(String, Arc<PatternHandler>)> = None;
        for entry in &self.handlers {
            if name.starts_with(entry.0.as_str())
                && best.is_none_or(|(prefix, _)| prefix.len() < entry.0.len())
            {
                best = Some(entry);
            }
        }

        let handler = best.map_or_else(
            || Arc::clone(&self.root) as Arc<dyn crate::handler::Handler>,
            |(_, handler)| Arc::clone(handler) as Arc<dyn crate::handler::Handler>,
        );
        Logger::new(name, handler)
    }

    /// The root logger — the fallback configuration with an empty name.
    #[must_use]
    pub fn root_logger(&self) -> Logger {
        Logger::new("", Arc::clone(&self.root) as Arc<dyn crate::handler::Handler>)
    }

    /// How many non-root handlers were configured — diagnostics and tests.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::from_config(&Config::default(), &crate::diag::StderrDiagnostics)
    }
}
