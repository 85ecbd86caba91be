//! Error types for localidad operations.
//!
//! The kernel binaries themselves have no recoverable failures (they
//! allocate, run, print, and exit); everything here serves the `lab_stats`
//! tooling that parses gem5 output and drives experiment sweeps.

use std::fmt;

/// Main error type for the stats/sweep tooling.
///
/// # Examples
///
/// ```
/// use localidad::error::LocalidadError;
///
/// let err = LocalidadError::NoResults {
///     dir: "results/".to_string(),
/// };
/// assert!(err.to_string().contains("no simulation results"));
/// ```
#[derive(Debug)]
pub enum LocalidadError {
    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// A results directory contained no usable `stats.txt` files.
    NoResults {
        /// Directory that was searched
        dir: String,
    },

    /// A gem5 sweep point could not be launched.
    Sweep {
        /// What went wrong
        reason: String,
    },

    /// Serialization error while exporting records.
    Serialization(String),
}

impl fmt::Display for LocalidadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalidadError::Io(e) => write!(f, "I/O error: {e}"),
            LocalidadError::NoResults { dir } => {
                write!(f, "no simulation results found under '{dir}'")
            }
            LocalidadError::Sweep { reason } => write!(f, "sweep failed: {reason}"),
            LocalidadError::Serialization(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for LocalidadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LocalidadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LocalidadError {
    fn from(err: std::io::Error) -> Self {
        LocalidadError::Io(err)
    }
}

impl From<serde_json::Error> for LocalidadError {
    fn from(err: serde_json::Error) -> Self {
        LocalidadError::Serialization(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LocalidadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_no_results() {
        let err = LocalidadError::NoResults {
            dir: "m5out".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no simulation results found under 'm5out'"
        );
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;
        let err: LocalidadError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_sweep_display() {
        let err = LocalidadError::Sweep {
            reason: "gem5 binary not found".to_string(),
        };
        assert!(err.to_string().contains("gem5 binary not found"));
    }
}
