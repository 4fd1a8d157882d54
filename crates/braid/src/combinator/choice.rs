//! Ordered choice between alternatives.

use std::fmt;

use log::trace;

use crate::{
    parser::{BoxedParser, IntoParser, Parser},
    result::{Failure, ParseResult},
};

/// Tries each alternative at the same index and returns the first success.
///
/// Earlier alternatives always win, even when a later one would match more
/// input. When every alternative fails, the first
/// [`Termination`](crate::FailureKind::Termination) failure is returned so
/// that "matched but did not reach the end" is not hidden behind "did not
/// match"; otherwise the failure lists every alternative.
pub struct Choice<T> {
    alternatives: Vec<BoxedParser<T>>,
}

impl<T> Choice<T> {
    /// Create a choice over `alternatives`, tried in order.
    pub fn new(alternatives: Vec<BoxedParser<T>>) -> Self {
        Self { alternatives }
    }

    /// Get the number of alternatives.
    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns `true` if there are no alternatives.
    pub fn is_empty(&self) -> bool {
        self.alternatives.is_empty()
    }
}

impl<T> Parser for Choice<T> {
    type Output = T;

    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, T> {
        let mut termination: Option<Failure> = None;

        for alternative in &self.alternatives {
            match alternative.parse_at(input, index) {
                ParseResult::Success(success) => return success.into(),
                ParseResult::Failure(failure) => {
                    if termination.is_none() && failure.kind().is_termination() {
                        termination = Some(failure);
                    }
                }
            }
        }

        if let Some(failure) = termination {
            trace!(index; "All alternatives failed, reporting termination failure");
            return failure.into();
        }

        Failure::parsing(
            index,
            format!(
                "Expected at least one of the following at index {index}: {}",
                self.alternatives
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        )
        .into()
    }

    fn or<P>(mut self, other: P) -> Choice<T>
    where
        Self: Sized + Send + Sync + 'static,
        P: IntoParser,
        P::Parser: Parser<Output = T> + Send + Sync + 'static,
    {
        self.alternatives.push(other.into_parser().boxed());
        self
    }
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, alternative) in self.alternatives.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{alternative}")?;
        }
        Ok(())
    }
}

impl<T> fmt::Debug for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Choice")
            .field("alternatives", &self.to_string())
            .finish()
    }
}
