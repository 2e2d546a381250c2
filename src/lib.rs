//! `patternlog` - Pattern-driven logging facade.
//!
//! Log lines are shaped by logback-style conversion patterns compiled once per
//! configured handler:
//! - `%%`, `%n` — literal percent / newline
//! - `%level` / `%p` — severity name
//! - `%logger{a.b}` / `%c{a.b}` — abbreviated logger name
//! - `%caller{a.b}` / `%C{a.b}` — abbreviated call-site info
//! - `%date{fmt}` / `%d{fmt}` — strftime timestamp
//! - `%N.M(...)` — width applied to a whole group
//!
//! Handlers are looked up by longest dotted-name prefix from a properties-style
//! configuration.
//!
//! # Example
//!
//! ```
//! use patternlog::{Config, LoggerRegistry, SilentDiagnostics};
//!
//! let diag = SilentDiagnostics;
//! let config = Config::parse(
//!     "root=info:%logger{-1}:%d{%H:%M:%S} %level \n\
//!      logger.com.example.net=debug:NET:",
//!     &diag,
//! );
//! let registry = LoggerRegistry::from_config(&config, &diag);
//!
//! let logger = registry.logger("com.example.net.Socket");
//! logger.debug("connecting...");
//! logger.warn("connection timeout");
//! ```

pub mod caller;
pub mod config;
pub mod diag;
pub mod error;
pub mod fmt;
pub mod handler;
pub mod level;
pub mod logger;
pub mod pattern;

// Re-exports for convenience
pub use caller::CallerFrame;
pub use config::{Config, HandlerSpec};
pub use diag::{DiagnosticSink, SilentDiagnostics, StderrDiagnostics};
pub use error::Error;
pub use handler::{Handler, PatternHandler, Rendered};
pub use level::Level;
pub use logger::{Logger, LoggerRegistry};
pub use pattern::{FormatContext, Pattern};

/// Builds a [`CallerFrame`] for the enclosing function — the capture half of the
/// logging macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __caller_frame {
    () => {{
        fn __here() {}
        fn __name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let full = __name_of(__here);
        let full = full.strip_suffix("::__here").unwrap_or(full);
        let method = full.rsplit("::").next().unwrap_or(full);
        $crate::CallerFrame::new(module_path!(), method, file!(), line!())
    }};
}

/// Logs a formatted message with call-site capture, so `%caller` conversions
/// work without any runtime stack walking.
///
/// ```
/// use patternlog::{Config, Level, LoggerRegistry, SilentDiagnostics, log};
///
/// let registry = LoggerRegistry::from_config(&Config::default(), &SilentDiagnostics);
/// let logger = registry.logger("com.example.app");
/// log!(logger, Level::Info, "started in {} ms", 42);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_with_caller(
            $level,
            &::std::format!($($arg)+),
            ::std::option::Option::Some($crate::__caller_frame!()),
        )
    };
}

/// [`log!`] at [`Level::Trace`].
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// [`log!`] at [`Level::Debug`].
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// [`log!`] at [`Level::Info`].
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// [`log!`] at [`Level::Warn`].
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// [`log!`] at [`Level::Error`].
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}
