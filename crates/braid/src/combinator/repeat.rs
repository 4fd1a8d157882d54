//! Repetition, with or without separators.

use std::fmt;

use log::trace;

use crate::{
    parser::{IntoParser, Parser},
    result::{Failure, ParseResult},
};

/// Matches a parser repeatedly, collecting the values.
///
/// Stops at the first failure or after `max` repetitions (`max` is
/// inclusive) and succeeds if at least `min` repetitions matched. A
/// repetition that consumes nothing is counted once and ends the loop.
#[derive(Debug, Clone)]
pub struct Repeat<P> {
    parser: P,
    min: usize,
    max: Option<usize>,
}

impl<P> Repeat<P> {
    /// Create a repetition of `parser`. `None` leaves the count unbounded.
    ///
    /// # Panics
    ///
    /// Panics if `max` is less than `min`.
    pub fn new(parser: P, min: usize, max: Option<usize>) -> Self {
        if let Some(max) = max {
            assert!(min <= max, "repetition minimum {min} exceeds maximum {max}");
        }
        Self { parser, min, max }
    }

    /// Get the minimum number of repetitions.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Get the maximum number of repetitions, if bounded.
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// Require `separator` between repetitions.
    ///
    /// `separator` may be a parser, a literal string, or a compiled
    /// [`Regex`](regex::Regex).
    pub fn separated_by<S: IntoParser>(self, separator: S) -> SeparatedRepeat<P, S::Parser> {
        SeparatedRepeat {
            repeat: self,
            separator: separator.into_parser(),
        }
    }

    fn can_continue(&self, count: usize) -> bool {
        self.max.is_none_or(|max| count < max)
    }

    fn fmt_bounds(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            None => write!(f, "[{}- ]", self.min),
            Some(max) if self.min == 0 => write!(f, "[ -{max}]"),
            Some(max) => write!(f, "[{}-{max}]", self.min),
        }
    }
}

impl<P: fmt::Display> Repeat<P> {
    /// Turn the collected values into the final result.
    fn finish<'a, T>(
        &self,
        input: &'a str,
        index: usize,
        end: usize,
        values: Vec<T>,
    ) -> ParseResult<'a, Vec<T>> {
        if values.len() >= self.min {
            if let Some(text) = input.get(index..end) {
                return ParseResult::success(text, index, values);
            }
            return Failure::parsing(index, format!("Invalid input index {index}")).into();
        }

        Failure::parsing(
            index,
            format!(
                "Expected to match {} at least {} times. Actually matched {} times.",
                self.parser,
                self.min,
                values.len()
            ),
        )
        .into()
    }
}

impl<P: Parser> Parser for Repeat<P> {
    type Output = Vec<P::Output>;

    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, Self::Output> {
        let mut values = Vec::new();
        let mut position = index;

        while self.can_continue(values.len()) {
            let ParseResult::Success(success) = self.parser.parse_at(input, position) else {
                break;
            };

            let end = success.end();
            values.push(success.into_value());

            if end == position {
                trace!(index = position; "Repetition made no progress, stopping");
                break;
            }
            position = end;
        }

        self.finish(input, index, position, values)
    }
}

impl<P: fmt::Display> fmt::Display for Repeat<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Repeat")?;
        self.fmt_bounds(f)?;
        write!(f, "({})", self.parser)
    }
}

/// A [`Repeat`] with a separator required between repetitions.
///
/// A separator that fails ends the loop. A separator that matches is
/// consumed even when the repetition after it fails; its value is
/// discarded.
#[derive(Debug, Clone)]
pub struct SeparatedRepeat<P, S> {
    repeat: Repeat<P>,
    separator: S,
}

impl<P: Parser, S: Parser> Parser for SeparatedRepeat<P, S> {
    type Output = Vec<P::Output>;

    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, Self::Output> {
        let mut values = Vec::new();
        let mut position = index;

        while self.repeat.can_continue(values.len()) {
            let start = position;
            if !values.is_empty() {
                match self.separator.parse_at(input, position) {
                    ParseResult::Success(separator) => position = separator.end(),
                    ParseResult::Failure(_) => break,
                }
            }

            let ParseResult::Success(success) = self.repeat.parser.parse_at(input, position)
            else {
                break;
            };

            position = success.end();
            values.push(success.into_value());

            if position == start {
                trace!(index = position; "Separated repetition made no progress, stopping");
                break;
            }
        }

        self.repeat.finish(input, index, position, values)
    }
}

impl<P: fmt::Display, S: fmt::Display> fmt::Display for SeparatedRepeat<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Repeat")?;
        self.repeat.fmt_bounds(f)?;
        write!(f, "({}/{})", self.repeat.parser, self.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        parser::{literal, pattern},
        result::FailureKind,
    };

    #[test]
    fn test_repeat_collects_values() {
        let result = literal("x").repeat().parse("xxx");

        assert!(result.is_success());
        assert_eq!(result.text(), "xxx");
        assert_eq!(result.len(), 3);
        assert_eq!(result.into_value().unwrap(), vec!["x", "x", "x"]);
    }

    #[test]
    fn test_repeat_zero_times_is_empty_success() {
        let result = literal("x").repeat().parse_at("abc", 1);

        assert!(result.is_success());
        assert!(result.is_empty());
        assert_eq!(result.index(), 1);
        assert_eq!(result.into_value().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let result = literal("x").repeat().parse_at("ab", 5);

        assert_eq!(result.failure_kind(), Some(FailureKind::Parsing));
        assert_eq!(result.index(), 5);
    }

    #[test]
    fn test_repeat1_requires_one() {
        let result = literal("x").repeat1().parse("");

        assert_eq!(result.failure_kind(), Some(FailureKind::Parsing));
        assert_eq!(
            result.message(),
            "Expected to match \"x\" at least 1 times. Actually matched 0 times."
        );
    }

    #[test]
    fn test_max_is_inclusive() {
        let result = literal("x").repeat_range(1, 2).parse("xxxx");

        assert_eq!(result.text(), "xx");
        assert_eq!(result.into_value().unwrap().len(), 2);
    }

    #[test]
    fn test_below_min_fails_at_start_index() {
        let result = literal("x").repeat_range(3, 5).parse_at("axxb", 1);

        assert!(result.is_failure());
        assert_eq!(result.index(), 1);
        assert!(result.message().ends_with("Actually matched 2 times."));
    }

    #[test]
    fn test_zero_width_body_terminates() {
        let result = literal("x").optional().repeat().parse("ab");

        assert!(result.is_success());
        assert!(result.is_empty());
        assert_eq!(result.into_value().unwrap(), vec![None]);
    }

    #[test]
    #[should_panic(expected = "repetition minimum 3 exceeds maximum 2")]
    fn test_min_above_max_panics() {
        let _ = literal("x").repeat_range(3, 2);
    }

    #[test]
    fn test_separated_values() {
        let parser = pattern(r"\d+").unwrap().repeat1().separated_by(",");

        let result = parser.parse("1,2,3");
        assert_eq!(result.text(), "1,2,3");
        assert_eq!(result.into_value().unwrap(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_trailing_separator_is_consumed() {
        let parser = pattern(r"\d+").unwrap().repeat1().separated_by(",");

        let result = parser.parse("1,2,x");
        assert_eq!(result.text(), "1,2,");
        assert_eq!(result.end(), 4);
        assert_eq!(result.into_value().unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn test_trailing_separator_reaches_end() {
        let parser = pattern(r"\d+").unwrap().repeat1().separated_by(",").end();

        let result = parser.parse("1,2,");
        assert!(result.is_success());
        assert_eq!(result.text(), "1,2,");
        assert_eq!(result.into_value().unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn test_separator_failure_ends_loop() {
        let parser = literal("a").repeat().separated_by("-");

        let result = parser.parse("a-aa");
        assert_eq!(result.text(), "a-a");
    }

    #[test]
    fn test_separated_below_min_fails() {
        let parser = literal("a").repeat_range(3, 4).separated_by(",");

        let result = parser.parse("a,a");
        assert_eq!(result.failure_kind(), Some(FailureKind::Parsing));
        assert_eq!(
            result.message(),
            "Expected to match \"a\" at least 3 times. Actually matched 2 times."
        );
    }

    #[test]
    fn test_separated_max_is_inclusive() {
        let parser = literal("a").repeat_range(0, 2).separated_by(",");

        assert_eq!(parser.parse("a,a,a").text(), "a,a");
    }

    #[test]
    fn test_display() {
        assert_eq!(literal("x").repeat().to_string(), r#"Repeat[0- ]("x")"#);
        assert_eq!(literal("x").repeat1().to_string(), r#"Repeat[1- ]("x")"#);
        assert_eq!(
            literal("x").repeat_range(0, 3).to_string(),
            r#"Repeat[ -3]("x")"#
        );
        assert_eq!(
            literal("x").repeat_range(2, 3).separated_by(",").to_string(),
            r#"Repeat[2-3]("x"/",")"#
        );
    }
}
