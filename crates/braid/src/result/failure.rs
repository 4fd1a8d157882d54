//! Failure records for unsuccessful parse attempts.
//!
//! A [`Failure`] carries no value, so it can be moved between result types
//! of any output without conversion. Its [`FailureKind`] tells callers why
//! the attempt failed.

use std::fmt;

use thiserror::Error;

/// Classification of a failed parse attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The input did not match.
    ///
    /// Produced by the primitive parsers and by structural combinators whose
    /// children did not match.
    Parsing,

    /// A conversion function rejected a successfully matched value.
    Conversion,

    /// An end-anchored parser matched but did not consume the whole input.
    ///
    /// Ordered choice prefers these over [`FailureKind::Parsing`] failures.
    Termination,

    /// A negated parser matched when it was required not to.
    Inversion,
}

impl FailureKind {
    /// Returns `true` for [`FailureKind::Termination`].
    pub fn is_termination(&self) -> bool {
        matches!(self, FailureKind::Termination)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Parsing => write!(f, "parsing"),
            FailureKind::Conversion => write!(f, "conversion"),
            FailureKind::Termination => write!(f, "termination"),
            FailureKind::Inversion => write!(f, "inversion"),
        }
    }
}

/// A failed parse attempt.
///
/// The index is the offset the failure is reported at. For most parsers
/// this is where the attempt began; [`End`](crate::combinator::End) reports
/// the first unconsumed position instead, and sequences forward the index
/// of the failing step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} failure at index {index}: {message}")]
pub struct Failure {
    kind: FailureKind,
    index: usize,
    message: String,
}

impl Failure {
    /// Create a failure of the given kind.
    pub fn new(kind: FailureKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }

    /// Create a [`FailureKind::Parsing`] failure.
    pub fn parsing(index: usize, message: impl Into<String>) -> Self {
        Self::new(FailureKind::Parsing, index, message)
    }

    /// Get the failure kind.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Get the index the failure is reported at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
