//! Properties-file configuration: one line per logger prefix.
//!
//! ```text
//! # root logger configuration
//! root=<level>:<tag pattern>:<message pattern>
//! # package / module logger configuration
//! logger.<dotted prefix>=<level>:<tag pattern>:<message pattern>
//! ```
//!
//! The tag and message pattern parts are optional. Configuration problems are
//! reported through the injected [`DiagnosticSink`] and degrade to defaults —
//! a broken config file must never disable logging.

use crate::diag::DiagnosticSink;
use crate::error::Error;
use crate::handler::PatternHandler;
use crate::level::Level;
use std::fs;
use std::path::{Path, PathBuf};

const CONF_ROOT: &str = "root";
const CONF_LOGGER: &str = "logger.";
const PROPERTIES_NAME: &str = "patternlog.properties";

/// Permissive default: everything is printed, tagged with the abbreviated
/// logger name, with no message head.
const DEFAULT_LEVEL: Level = Level::Trace;
const DEFAULT_TAG_PATTERN: &str = "%logger{-1}";

/// Level plus the two pattern strings a handler is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerSpec {
    /// Minimal severity the handler prints.
    pub level: Level,
    /// Tag pattern — `None` renders an empty tag.
    pub tag_pattern: Option<String>,
    /// Message-head pattern — `None` prepends nothing to the body.
    pub message_pattern: Option<String>,
}

impl Default for HandlerSpec {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            tag_pattern: Some(DEFAULT_TAG_PATTERN.to_string()),
            message_pattern: None,
        }
    }
}

impl HandlerSpec {
    /// Decodes a `<level>:<tag pattern>:<message pattern>` value. The value
    /// splits at the first two colons, so a tag pattern cannot contain a
    /// literal `:` — the message pattern (the rest of the line) can.
    fn parse(value: &str, diag: &dyn DiagnosticSink) -> Self {
        let mut parts = value.splitn(3, ':');
        let level_part = parts.next().unwrap_or_default().trim();
        let tag_part = parts.next();
        let message_part = parts.next();

        let level = match level_part.parse() {
            Ok(level) => level,
            Err(_) => {
                diag.warn(
                    "CONFIG",
                    &format!("cannot parse '{level_part}' as a level, using '{DEFAULT_LEVEL}'"),
                );
                DEFAULT_LEVEL
            }
        };

        Self {
            level,
            tag_pattern: tag_part.filter(|s| !s.is_empty()).map(ToString::to_string),
            message_pattern: message_part
                .filter(|s| !s.is_empty())
                .map(ToString::to_string),
        }
    }

    /// Builds the handler this spec describes, compiling both patterns through
    /// the lossy path.
    #[must_use]
    pub fn to_handler(&self, diag: &dyn DiagnosticSink) -> PatternHandler {
        PatternHandler::new(
            self.level,
            self.tag_pattern.as_deref(),
            self.message_pattern.as_deref(),
            diag,
        )
    }
}

/// Parsed configuration: the root spec plus per-prefix overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    /// Fallback used when no `logger.<prefix>` entry matches.
    pub root: HandlerSpec,
    /// `(dotted prefix, spec)` pairs in file order.
    pub loggers: Vec<(String, HandlerSpec)>,
}

impl Config {
    /// Parses properties text. Infallible: malformed lines and unknown keys are
    /// reported through `diag` and skipped, mirroring how a logging framework
    /// must behave when its own configuration is broken.
    #[must_use]
    pub fn parse(text: &str, diag: &dyn DiagnosticSink) -> Self {
        let mut config = Self::default();

        for line in text.lines() {
            let line = line.trim_start();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                diag.warn("CONFIG", &format!("ignoring line without '=': '{line}'"));
                continue;
            };
            let key = key.trim();
            // only the leading whitespace of a value is insignificant — pattern
            // strings may end with a meaningful space
            let value = value.trim_start();

            if key == CONF_ROOT {
                config.root = HandlerSpec::parse(value, diag);
            } else if let Some(name) = key.strip_prefix(CONF_LOGGER) {
                config
                    .loggers
                    .push((name.to_string(), HandlerSpec::parse(value, diag)));
            } else {
                diag.warn("CONFIG", &format!("unknown key '{key}'"));
            }
        }

        config
    }

    /// Loads configuration from an explicit path. A missing file yields the
    /// default configuration, matching zero-config behavior.
    ///
    /// # Errors
    /// I/O errors other than the file being absent.
    pub fn load_from(path: &Path, diag: &dyn DiagnosticSink) -> Result<Self, Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text, diag))
    }

    /// Loads configuration from the default location.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory, or on I/O
    /// errors reading an existing file.
    pub fn load(diag: &dyn DiagnosticSink) -> Result<Self, Error> {
        Self::load_from(&Self::default_path()?, diag)
    }

    /// XDG-compliant path of the properties file.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn default_path() -> Result<PathBuf, Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(PROPERTIES_NAME))
            .ok_or(Error::ConfigDirNotFound)
    }
}
