//! Negative lookahead.

use std::fmt;

use crate::{
    parser::Parser,
    result::{Failure, FailureKind, ParseResult, Success},
};

/// Zero-width negation: succeeds without consuming input where the inner
/// parser fails, and fails with [`FailureKind::Inversion`] where it matches.
///
/// The inner match is discarded either way, so `p.not().not()` is a
/// zero-width check rather than `p` itself.
#[derive(Debug, Clone)]
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    /// Negate `parser`.
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: Parser> Parser for Not<P> {
    type Output = ();

    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, ()> {
        match self.parser.parse_at(input, index) {
            ParseResult::Success(_) => ParseResult::failure(
                FailureKind::Inversion,
                index,
                format!("Expected not to match {} at index {index}", self.parser),
            ),
            ParseResult::Failure(_) if input.get(index..).is_none() => {
                Failure::parsing(index, format!("Invalid input index {index}")).into()
            }
            ParseResult::Failure(_) => Success::empty(index, ()).into(),
        }
    }
}

impl<P: fmt::Display> fmt::Display for Not<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "!({})", self.parser)
    }
}
