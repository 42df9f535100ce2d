//! Outcome of a finished run.
//!
//! ```rust
//! use twirl::renderer::{Failure, Summary};
//!
//! let summary = Summary::new(2, vec![Failure::new("c.bin", "timeout")]);
//! assert_eq!(summary.total(), 3);
//! assert!(!summary.is_success());
//! ```

/// A failed item, by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Display title of the item.
    pub title: String,
    /// Reason reported by the item.
    pub reason: String,
}

impl Failure {
    pub fn new(title: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            reason: reason.into(),
        }
    }
}

/// Succeeded and failed counts of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    succeeded: usize,
    failures: Vec<Failure>,
}

impl Summary {
    pub fn new(succeeded: usize, failures: Vec<Failure>) -> Self {
        Self {
            succeeded,
            failures,
        }
    }

    /// Number of items that completed successfully.
    pub fn succeeded(&self) -> usize {
        self.succeeded
    }

    /// Number of items that failed.
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failures.len()
    }

    /// `true` if no item failed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
