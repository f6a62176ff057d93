//! Error types for Tally
//!
//! The only fallible subsystem is configuration persistence, so the error
//! enum stays small: directory resolution, file I/O in both directions,
//! and JSON parsing. UI-facing failures (clipboard) carry their own error
//! type next to the code that produces them.

use log::warn;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// A specialized `Result` type for the application.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the configuration layer.
#[derive(Debug)]
pub enum Error {
    /// The platform config directory could not be determined.
    ConfigDirNotFound,
    /// Reading the config file failed.
    ConfigLoad { path: PathBuf, source: io::Error },
    /// Writing or renaming the config file failed.
    ConfigSave { path: PathBuf, source: io::Error },
    /// The config file exists but is not valid settings JSON.
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigDirNotFound => {
                write!(f, "Could not determine the configuration directory")
            }
            Error::ConfigLoad { path, source } => {
                write!(f, "Could not read '{}': {}", path.display(), source)
            }
            Error::ConfigSave { path, source } => {
                write!(f, "Could not write '{}': {}", path.display(), source)
            }
            Error::ConfigParse { path, source } => {
                write!(f, "Invalid settings in '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ConfigDirNotFound => None,
            Error::ConfigLoad { source, .. } | Error::ConfigSave { source, .. } => Some(source),
            Error::ConfigParse { source, .. } => Some(source),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Graceful Degradation
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for results that should degrade instead of propagate.
pub trait ResultExt<T> {
    /// If the result is an error, log it at warning level and return the
    /// provided default.
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T;
}

impl<T> ResultExt<T> for Result<T> {
    fn unwrap_or_warn_default(self, default: T, context: &str) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                warn!("{}: {}. Using default.", context, err);
                default
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    fn load_error() -> Error {
        Error::ConfigLoad {
            path: PathBuf::from("/tmp/tally/config.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        }
    }

    fn parse_error() -> Error {
        let bad: std::result::Result<crate::config::Settings, _> =
            serde_json::from_str("{ not json");
        Error::ConfigParse {
            path: PathBuf::from("config.json"),
            source: bad.unwrap_err(),
        }
    }

    #[test]
    fn test_display_includes_path_and_cause() {
        let msg = load_error().to_string();
        assert!(msg.contains("/tmp/tally/config.json"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn test_display_dir_not_found() {
        let msg = Error::ConfigDirNotFound.to_string();
        assert!(msg.contains("configuration directory"));
    }

    #[test]
    fn test_source_chain() {
        assert!(load_error().source().is_some());
        assert!(parse_error().source().is_some());
        assert!(Error::ConfigDirNotFound.source().is_none());
    }

    #[test]
    fn test_unwrap_or_warn_default_passes_ok_through() {
        let result: Result<i32> = Ok(42);
        assert_eq!(result.unwrap_or_warn_default(0, "loading"), 42);
    }

    #[test]
    fn test_unwrap_or_warn_default_substitutes_on_error() {
        let result: Result<i32> = Err(Error::ConfigDirNotFound);
        assert_eq!(result.unwrap_or_warn_default(7, "loading"), 7);
    }
}
