//! Instrumented algorithm runners
//!
//! Each runner re-executes a textbook algorithm but, instead of only
//! producing a final result, records a [`Step`](crate::step::Step) for every
//! semantically meaningful internal event: comparisons, swaps, shifts, range
//! narrowing, completion. The step log is fully materialized before playback
//! begins, so stepping backward never re-executes the algorithm.
//!
//! Runners are deterministic: identical input and arguments yield identical
//! sequences. Any randomness (choosing a search target, a rotation count)
//! belongs to the controller and arrives through [`RunnerArgs`].
//!
//! The uninstrumented reference implementations live in [`canonical`]; the
//! predict feature and the test suite both check against those, so each
//! algorithm's logic exists exactly once outside its instrumentation.

pub mod backtracking;
pub mod canonical;
pub mod dynamic;
pub mod errors;
pub mod hashing;
pub mod rewrite;
pub mod searching;
pub mod sliding_window;
pub mod sorting;
pub mod traversal;
pub mod two_pointer;

use crate::step::Step;

pub use errors::RunnerError;

/// Signature every instrumented runner conforms to.
pub type Runner = fn(&[i64], &RunnerArgs) -> Result<Vec<Step>, RunnerError>;

/// Algorithm-specific extras supplied by the controller.
///
/// Only the fields an algorithm declares (via its catalog entry's parameter
/// kind) are read; a missing required field is a
/// [`RunnerError::MissingArgument`], never a panic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerArgs {
    /// Search target or target sum.
    pub target: Option<i64>,
    /// Rotation count, window size, or distinct-value threshold.
    pub k: Option<usize>,
    /// Problem size for algorithms that do not consume the array (N-Queens
    /// board size, Fibonacci index).
    pub n: Option<usize>,
    /// Second sequence for algorithms over two inputs (LCS).
    pub second: Option<Vec<i64>>,
}

impl RunnerArgs {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_target(target: i64) -> Self {
        RunnerArgs {
            target: Some(target),
            ..Self::default()
        }
    }

    pub fn with_k(k: usize) -> Self {
        RunnerArgs {
            k: Some(k),
            ..Self::default()
        }
    }

    pub fn with_n(n: usize) -> Self {
        RunnerArgs {
            n: Some(n),
            ..Self::default()
        }
    }

    pub fn with_second(second: Vec<i64>) -> Self {
        RunnerArgs {
            second: Some(second),
            ..Self::default()
        }
    }

    pub(crate) fn require_target(&self, algorithm: &'static str) -> Result<i64, RunnerError> {
        self.target.ok_or(RunnerError::MissingArgument {
            algorithm,
            argument: "target",
        })
    }

    pub(crate) fn require_k(&self, algorithm: &'static str) -> Result<usize, RunnerError> {
        self.k.ok_or(RunnerError::MissingArgument {
            algorithm,
            argument: "k",
        })
    }

    pub(crate) fn require_n(&self, algorithm: &'static str) -> Result<usize, RunnerError> {
        self.n.ok_or(RunnerError::MissingArgument {
            algorithm,
            argument: "n",
        })
    }

    pub(crate) fn require_second(
        &self,
        algorithm: &'static str,
    ) -> Result<&[i64], RunnerError> {
        self.second
            .as_deref()
            .ok_or(RunnerError::MissingArgument {
                algorithm,
                argument: "second",
            })
    }
}

/// Render a slice the way narration lines quote arrays: `[1, 2, 3]`.
pub(crate) fn fmt_values(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
