//! Optional matching.

use std::fmt;

use crate::{
    parser::Parser,
    result::{Failure, ParseResult, Success},
};

/// Succeeds with `Some(value)` on the inner match, or with a zero-width
/// `None` where the inner parser fails.
///
/// An index past the end of the input or inside a character is still a
/// `Parsing` failure.
#[derive(Debug, Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    /// Wrap `parser` so that a failure becomes `None`.
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: Parser> Parser for Optional<P> {
    type Output = Option<P::Output>;

    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, Self::Output> {
        match self.parser.parse_at(input, index) {
            ParseResult::Success(success) => success.map(Some).into(),
            ParseResult::Failure(_) if input.get(index..).is_none() => {
                Failure::parsing(index, format!("Invalid input index {index}")).into()
            }
            ParseResult::Failure(_) => Success::empty(index, None).into(),
        }
    }
}

impl<P: fmt::Display> fmt::Display for Optional<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})?", self.parser)
    }
}
