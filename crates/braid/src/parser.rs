//! The [`Parser`] trait and its builder methods.
//!
//! A parser is an immutable node of a grammar graph. Building a grammar is
//! plain data-structure assembly; nothing is matched until
//! [`Parser::parse_at`] is called on the root, which recursively calls its
//! children with the current index.
//!
//! Every builder method consumes the receiver and returns a new combinator
//! that owns it. Use [`Parser::shared`] when one sub-grammar has to appear
//! in several places.

use std::{fmt, sync::Arc};

use regex::Regex;

use crate::{
    combinator::{
        Choice, End, Lazy, Literal, Map, Not, Optional, Pattern, Repeat, Sequence, TryMap,
    },
    result::ParseResult,
};

/// A type-erased parser.
pub type BoxedParser<T> = Box<dyn Parser<Output = T> + Send + Sync>;

/// Attempts to match input starting at an index.
///
/// The [`Display`](fmt::Display) rendering describes the grammar shape and
/// is used in failure messages, e.g. `"(" ~ /\d+/ ~ ")"`.
pub trait Parser: fmt::Display {
    /// The value produced on a successful match.
    type Output;

    /// Attempt to match `input` starting at byte offset `index`.
    ///
    /// `index` is expected to lie on a character boundary within
    /// `0..=input.len()`; anything else simply fails to match.
    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, Self::Output>;

    /// Attempt to match `input` from its start.
    fn parse<'a>(&self, input: &'a str) -> ParseResult<'a, Self::Output> {
        self.parse_at(input, 0)
    }

    /// Succeed with an empty match only where this parser fails.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }

    /// Always succeed, yielding `None` where this parser fails.
    fn optional(self) -> Optional<Self>
    where
        Self: Sized,
    {
        Optional::new(self)
    }

    /// Match this parser and then `next` right after it.
    ///
    /// `next` may be another parser, a literal string, or a compiled
    /// [`Regex`].
    fn then<P>(self, next: P) -> Sequence<Self, P::Parser>
    where
        Self: Sized,
        P: IntoParser,
    {
        Sequence::new(self, next.into_parser())
    }

    /// Try this parser, and `other` at the same index if it fails.
    ///
    /// Calling `or` on a [`Choice`] appends to its alternatives instead of
    /// nesting a new choice.
    fn or<P>(self, other: P) -> Choice<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
        P: IntoParser,
        P::Parser: Parser<Output = Self::Output> + Send + Sync + 'static,
    {
        Choice::new(vec![self.boxed(), other.into_parser().boxed()])
    }

    /// Match this parser zero or more times.
    fn repeat(self) -> Repeat<Self>
    where
        Self: Sized,
    {
        Repeat::new(self, 0, None)
    }

    /// Match this parser one or more times.
    fn repeat1(self) -> Repeat<Self>
    where
        Self: Sized,
    {
        Repeat::new(self, 1, None)
    }

    /// Match this parser between `min` and `max` times, both inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    fn repeat_range(self, min: usize, max: usize) -> Repeat<Self>
    where
        Self: Sized,
    {
        Repeat::new(self, min, Some(max))
    }

    /// Convert the value of a successful match.
    fn map<U, F>(self, convert: F) -> Map<Self, F, U>
    where
        Self: Sized,
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, convert)
    }

    /// Convert the value of a successful match, failing with
    /// [`FailureKind::Conversion`](crate::FailureKind::Conversion) when the
    /// conversion returns an error.
    fn try_map<U, E, F>(self, convert: F) -> TryMap<Self, F, U, E>
    where
        Self: Sized,
        E: fmt::Display,
        F: Fn(Self::Output) -> Result<U, E>,
    {
        TryMap::new(self, convert)
    }

    /// Require the match to reach the end of the input.
    fn end(self) -> End<Self>
    where
        Self: Sized,
    {
        End::new(self)
    }

    /// Erase the concrete parser type.
    fn boxed(self) -> BoxedParser<Self::Output>
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(self)
    }

    /// Wrap in an [`Arc`] so the parser can be cloned into several grammars.
    fn shared(self) -> Arc<Self>
    where
        Self: Sized,
    {
        Arc::new(self)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Output = P::Output;

    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, Self::Output> {
        (**self).parse_at(input, index)
    }
}

impl<P: Parser + ?Sized> Parser for Arc<P> {
    type Output = P::Output;

    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, Self::Output> {
        (**self).parse_at(input, index)
    }
}

/// Conversion into a parser, so builder methods accept shorthands.
///
/// Strings become [`Literal`] parsers and compiled regular expressions
/// become [`Pattern`] parsers.
pub trait IntoParser {
    /// The parser this value converts into.
    type Parser: Parser;

    /// Perform the conversion.
    fn into_parser(self) -> Self::Parser;
}

impl<P: Parser> IntoParser for P {
    type Parser = P;

    fn into_parser(self) -> Self::Parser {
        self
    }
}

impl IntoParser for &str {
    type Parser = Literal;

    fn into_parser(self) -> Self::Parser {
        Literal::new(self)
    }
}

impl IntoParser for String {
    type Parser = Literal;

    fn into_parser(self) -> Self::Parser {
        Literal::new(self)
    }
}

impl IntoParser for Regex {
    type Parser = Pattern;

    fn into_parser(self) -> Self::Parser {
        Pattern::new(self)
    }
}

/// Build a [`Literal`] parser.
pub fn literal(text: impl Into<String>) -> Literal {
    Literal::new(text)
}

/// Build a [`Pattern`] parser from a regular expression source.
///
/// # Errors
///
/// Returns [`Error::InvalidPattern`](crate::Error::InvalidPattern) if the
/// expression does not compile.
pub fn pattern(source: &str) -> crate::Result<Pattern> {
    Pattern::compile(source)
}

/// Build a [`Choice`] from an ordered list of alternatives.
pub fn choice<T>(alternatives: Vec<BoxedParser<T>>) -> Choice<T> {
    Choice::new(alternatives)
}

/// Defer building a parser until it is first used.
///
/// This is how self-referential grammars are written: the factory refers
/// to the grammar being defined, and runs only once the enclosing parser is
/// already built.
///
/// ```
/// # use braid::{BoxedParser, Parser, lazy, literal};
/// fn parens() -> BoxedParser<usize> {
///     literal("(")
///         .then(lazy(parens).optional())
///         .then(")")
///         .map(|seq| seq.first().next().map_or(1, |depth| depth + 1))
///         .boxed()
/// }
///
/// assert_eq!(parens().parse("((()))").into_value(), Some(3));
/// ```
pub fn lazy<P, F>(factory: F) -> Lazy<P, F>
where
    P: Parser,
    F: Fn() -> P,
{
    Lazy::new(factory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_starts_at_zero() {
        let result = literal("a").parse("ab");

        assert!(result.is_success());
        assert_eq!(result.index(), 0);
    }

    #[test]
    fn test_builders_do_not_parse() {
        // Building must not call the factory.
        let parser = lazy(|| -> Literal { panic!("factory must not run during construction") })
            .optional()
            .not()
            .end();

        assert_eq!(parser.to_string(), "!(([Lazy])?)");
    }

    #[test]
    fn test_then_accepts_shorthands() {
        let digits = Regex::new(r"\d+").unwrap();
        let parser = literal("x").then(digits).then(String::from("!"));

        let result = parser.parse("x42!");
        assert!(result.is_success());
        assert_eq!(result.text(), "x42!");
    }

    #[test]
    fn test_boxed_and_shared_delegate() {
        let shared = literal("a").shared();
        let boxed = Arc::clone(&shared).boxed();

        assert!(shared.parse("a").is_success());
        assert!(boxed.parse("a").is_success());
        assert_eq!(boxed.to_string(), "\"a\"");
    }

    #[test]
    fn test_pattern_rejects_invalid_source() {
        assert!(matches!(pattern("("), Err(crate::Error::InvalidPattern(_))));
    }
}
