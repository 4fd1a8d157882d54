//! Conversion of matched values.

use std::{fmt, marker::PhantomData};

use crate::{
    parser::Parser,
    result::{FailureKind, ParseResult},
};

/// Converts the value of a successful match with an infallible function.
pub struct Map<P, F, U> {
    parser: P,
    convert: F,
    _output: PhantomData<fn() -> U>,
}

impl<P, F, U> Map<P, F, U> {
    /// Apply `convert` to every value `parser` produces.
    pub fn new(parser: P, convert: F) -> Self {
        Self {
            parser,
            convert,
            _output: PhantomData,
        }
    }
}

impl<P, F, U> Parser for Map<P, F, U>
where
    P: Parser,
    F: Fn(P::Output) -> U,
{
    type Output = U;

    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, U> {
        match self.parser.parse_at(input, index) {
            ParseResult::Success(success) => success.map(&self.convert).into(),
            ParseResult::Failure(failure) => failure.into(),
        }
    }
}

impl<P: fmt::Display, F, U> fmt::Display for Map<P, F, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.parser, f)
    }
}

impl<P: fmt::Debug, F, U> fmt::Debug for Map<P, F, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map").field("parser", &self.parser).finish()
    }
}

/// Converts the value of a successful match with a fallible function.
///
/// An `Err` from the function becomes a [`FailureKind::Conversion`] failure
/// at the index of the match, carrying the error's message.
pub struct TryMap<P, F, U, E> {
    parser: P,
    convert: F,
    _output: PhantomData<fn() -> (U, E)>,
}

impl<P, F, U, E> TryMap<P, F, U, E> {
    /// Apply the fallible `convert` to every value `parser` produces.
    pub fn new(parser: P, convert: F) -> Self {
        Self {
            parser,
            convert,
            _output: PhantomData,
        }
    }
}

impl<P, F, U, E> Parser for TryMap<P, F, U, E>
where
    P: Parser,
    F: Fn(P::Output) -> Result<U, E>,
    E: fmt::Display,
{
    type Output = U;

    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, U> {
        let success = match self.parser.parse_at(input, index) {
            ParseResult::Success(success) => success,
            ParseResult::Failure(failure) => return failure.into(),
        };

        let text = success.text();
        match (self.convert)(success.into_value()) {
            Ok(value) => ParseResult::success(text, index, value),
            Err(err) => ParseResult::failure(
                FailureKind::Conversion,
                index,
                format!("Failed to convert {}: {err}", self.parser),
            ),
        }
    }
}

impl<P: fmt::Display, F, U, E> fmt::Display for TryMap<P, F, U, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.parser, f)
    }
}

impl<P: fmt::Debug, F, U, E> fmt::Debug for TryMap<P, F, U, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TryMap").field("parser", &self.parser).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{literal, pattern};

    #[test]
    fn test_map_converts_value() {
        let parser = pattern(r"\d+").unwrap().map(|digits| digits.len());

        let result = parser.parse("1234x");
        assert_eq!(result.text(), "1234");
        assert_eq!(result.into_value(), Some(4));
    }

    #[test]
    fn test_try_map_success() {
        let parser = pattern(r"\d+").unwrap().try_map(|digits| digits.parse::<u8>());

        assert_eq!(parser.parse("200").into_value(), Some(200));
    }

    #[test]
    fn test_try_map_error_is_conversion_failure() {
        let parser = pattern(r"\d+").unwrap().try_map(|digits| digits.parse::<u8>());

        let result = parser.parse_at("x300", 1);
        assert_eq!(result.failure_kind(), Some(FailureKind::Conversion));
        assert_eq!(result.index(), 1);
        assert_eq!(
            result.message(),
            r"Failed to convert /\d+/: number too large to fit in target type"
        );
    }

    #[test]
    fn test_inner_failure_is_forwarded() {
        let parser = literal("a").try_map(|_| Err::<(), _>("unreachable"));

        let result = parser.parse("b");
        assert_eq!(result.failure_kind(), Some(FailureKind::Parsing));
        assert_eq!(result.message(), "Expected \"a\" at index 0");
    }

    #[test]
    fn test_display_is_inner() {
        assert_eq!(literal("a").map(|_| 1).to_string(), "\"a\"");
    }
}
