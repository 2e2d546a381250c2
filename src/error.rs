//! Unified error type for all patternlog operations.

/// Error type for patternlog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// No token rule matched during pattern compilation.
    MalformedPattern {
        /// The pattern string that failed to compile.
        pattern: String,
        /// Byte offset of the token that no rule matched.
        position: usize,
    },
    /// A caller-bearing pattern was evaluated without a resolved caller frame.
    MissingCallerFrame,
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::MalformedPattern { pattern, position } => {
                write!(f, "malformed pattern '{pattern}' at offset {position}")
            }
            Self::MissingCallerFrame => {
                write!(f, "pattern requires a caller frame but none was resolved")
            }
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
