//! Sequencing of two parsers.

use std::fmt;

use crate::{
    parser::Parser,
    result::{Failure, ParseResult},
    sequence::SequenceResult,
};

/// Matches `first`, then `next` immediately after it.
///
/// A failure of either step is returned unchanged, keeping its kind,
/// message and index.
#[derive(Debug, Clone)]
pub struct Sequence<P1, P2> {
    first: P1,
    next: P2,
}

impl<P1, P2> Sequence<P1, P2> {
    /// Create a sequence of two parsers.
    pub fn new(first: P1, next: P2) -> Self {
        Self { first, next }
    }
}

impl<P1: Parser, P2: Parser> Parser for Sequence<P1, P2> {
    type Output = SequenceResult<P1::Output, P2::Output>;

    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, Self::Output> {
        let first = match self.first.parse_at(input, index) {
            ParseResult::Success(success) => success,
            ParseResult::Failure(failure) => return failure.into(),
        };

        let next = match self.next.parse_at(input, first.end()) {
            ParseResult::Success(success) => success,
            ParseResult::Failure(failure) => return failure.into(),
        };

        // Both steps are adjacent slices of the input.
        let Some(text) = input.get(index..next.end()) else {
            return Failure::parsing(index, format!("Invalid input index {index}")).into();
        };
        ParseResult::success(
            text,
            index,
            SequenceResult::new(first.into_value(), next.into_value()),
        )
    }
}

impl<P1: fmt::Display, P2: fmt::Display> fmt::Display for Sequence<P1, P2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ~ {}", self.first, self.next)
    }
}
