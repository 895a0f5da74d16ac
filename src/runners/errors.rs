//! Error types for the instrumented runners
//!
//! A runner either returns a complete step sequence or a [`RunnerError`];
//! the playback engine is never loaded with a partial log. All runner errors
//! are recoverable at the controller, which reports them to the console.

use std::fmt;

/// Failures surfaced by catalog lookups and runner invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerError {
    /// No algorithm registered under (category, name).
    UnknownAlgorithm { category: String, name: String },

    /// The algorithm needs an extra argument the caller did not supply.
    MissingArgument {
        algorithm: &'static str,
        argument: &'static str,
    },

    /// An extra argument was supplied but is out of the usable range.
    InvalidArgument {
        algorithm: &'static str,
        message: String,
    },

    /// An internal invariant of the runner was violated; indicates a bug in
    /// the instrumentation, not in the caller.
    Internal {
        algorithm: &'static str,
        message: String,
    },
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::UnknownAlgorithm { category, name } => {
                write!(f, "No algorithm named '{}' in category '{}'", name, category)
            }
            RunnerError::MissingArgument {
                algorithm,
                argument,
            } => {
                write!(f, "{} requires a '{}' argument", algorithm, argument)
            }
            RunnerError::InvalidArgument { algorithm, message } => {
                write!(f, "Invalid argument for {}: {}", algorithm, message)
            }
            RunnerError::Internal { algorithm, message } => {
                write!(f, "Internal error in {}: {}", algorithm, message)
            }
        }
    }
}

impl std::error::Error for RunnerError {}
