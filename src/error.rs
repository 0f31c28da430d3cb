use thiserror::Error;
use tracing::{error, warn};

use crate::engine::ScriptKey;

/// Error severity for host-side display decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,     // informational
    Warning,  // recoverable
    Error,    // operation failed
}

/// Domain-specific errors for the launcher shell
#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("script key {key} is already registered")]
    DuplicateKey { key: ScriptKey },

    #[error("script key {key} is not registered")]
    UnknownKey { key: ScriptKey },

    #[error("engine call '{op}' failed: {source}")]
    EngineCall {
        op: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("no registered action with id {id}")]
    UnknownAction { id: u64 },

    #[error("invalid lifecycle transition: expected {expected}, was {actual}")]
    Lifecycle {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("host window operation failed: {0}")]
    Host(String),
}

impl LauncherError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::DuplicateKey { .. } => ErrorSeverity::Warning,
            Self::UnknownKey { .. } => ErrorSeverity::Warning,
            Self::UnknownAction { .. } => ErrorSeverity::Warning,
            Self::EngineCall { .. } => ErrorSeverity::Error,
            Self::Lifecycle { .. } => ErrorSeverity::Error,
            Self::Host(_) => ErrorSeverity::Error,
        }
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the caller has nothing better
/// to do than log and continue.
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_mapping() {
        let dup = LauncherError::DuplicateKey { key: ScriptKey(1) };
        assert_eq!(dup.severity(), ErrorSeverity::Warning);

        let call = LauncherError::EngineCall {
            op: "execute",
            source: anyhow::anyhow!("engine unavailable"),
        };
        assert_eq!(call.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_display_includes_key() {
        let err = LauncherError::UnknownKey { key: ScriptKey(42) };
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_log_err_returns_none_on_error() {
        let result: std::result::Result<(), &str> = Err("boom");
        assert!(result.log_err().is_none());

        let result: std::result::Result<u32, &str> = Ok(7);
        assert_eq!(result.log_err(), Some(7));
    }
}
