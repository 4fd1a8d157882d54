//! End-of-input anchoring.

use std::fmt;

use crate::{
    parser::Parser,
    result::{Failure, FailureKind, ParseResult},
};

/// Requires the inner match to end exactly at the end of the input.
///
/// A match that stops early fails with [`FailureKind::Termination`] at the
/// first unconsumed position. Anchoring twice behaves like anchoring once,
/// and anchoring a [`Lazy`](super::Lazy) parser does not resolve it.
#[derive(Debug, Clone)]
pub struct End<P> {
    parser: P,
}

impl<P> End<P> {
    /// Anchor `parser` at the end of the input.
    pub fn new(parser: P) -> Self {
        Self { parser }
    }
}

impl<P: Parser> Parser for End<P> {
    type Output = P::Output;

    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, Self::Output> {
        let result = self.parser.parse_at(input, index);
        if result.is_failure() {
            return result;
        }

        let end = result.end();
        let Some(rest) = input.get(end..) else {
            return Failure::parsing(end, format!("Invalid input index {end}")).into();
        };

        match rest.chars().next() {
            None => result,
            Some(found) => ParseResult::failure(
                FailureKind::Termination,
                end,
                format!("Expected end of input at index {end}, found '{found}'"),
            ),
        }
    }
}

impl<P: fmt::Display> fmt::Display for End<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.parser, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::literal;

    #[test]
    fn test_full_match_succeeds() {
        let result = literal("ab").end().parse("ab");

        assert!(result.is_success());
        assert_eq!(result.into_value().as_deref(), Some("ab"));
    }

    #[test]
    fn test_trailing_input_is_termination_failure() {
        let result = literal("ab").end().parse("abc");

        assert_eq!(result.failure_kind(), Some(FailureKind::Termination));
        assert_eq!(result.index(), 2);
        assert_eq!(result.message(), "Expected end of input at index 2, found 'c'");
    }

    #[test]
    fn test_reports_whole_character() {
        let result = literal("a").end().parse("aé");

        assert_eq!(result.message(), "Expected end of input at index 1, found 'é'");
    }

    #[test]
    fn test_inner_failure_is_forwarded() {
        let result = literal("ab").end().parse("xy");

        assert_eq!(result.failure_kind(), Some(FailureKind::Parsing));
        assert_eq!(result.index(), 0);
    }

    #[test]
    fn test_zero_width_match_past_end_fails() {
        let result = literal("a").optional().end().parse_at("ab", 5);

        assert_eq!(result.failure_kind(), Some(FailureKind::Parsing));
        assert_eq!(result.index(), 5);
        assert!(literal("a").not().end().parse_at("é", 1).is_failure());
    }

    #[test]
    fn test_anchoring_twice_is_the_same() {
        let once = literal("ab").end();
        let twice = literal("ab").end().end();

        for input in ["ab", "abc", "x", ""] {
            assert_eq!(once.parse(input), twice.parse(input));
        }
        assert_eq!(twice.to_string(), once.to_string());
    }
}
