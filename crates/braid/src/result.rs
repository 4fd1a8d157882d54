//! Results of parse attempts.
//!
//! Every call to [`Parser::parse_at`](crate::Parser::parse_at) produces a
//! fresh [`ParseResult`]: either a [`Success`] holding the matched text and
//! the typed value, or a [`Failure`] describing why nothing matched.
//!
//! Matched text is always a slice of the original input, so for a success
//! `input[index..index + len] == text` holds by construction.
//!
//! # Example
//!
//! ```
//! # use braid::{Parser, literal};
//! let result = literal("ab").parse("abc");
//!
//! assert!(result.is_success());
//! assert_eq!(result.text(), "ab");
//! assert_eq!(result.index(), 0);
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.value().map(String::as_str), Some("ab"));
//! ```

mod failure;

pub use failure::{Failure, FailureKind};

/// A successful parse attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct Success<'a, T> {
    text: &'a str,
    index: usize,
    value: T,
}

impl<'a, T> Success<'a, T> {
    /// Create a success for `text` matched at `index`.
    ///
    /// `text` must be the slice of the input starting at `index`.
    pub fn new(text: &'a str, index: usize, value: T) -> Self {
        Self { text, index, value }
    }

    /// Create a zero-width success at `index`.
    pub fn empty(index: usize, value: T) -> Self {
        Self::new("", index, value)
    }

    /// Get the matched text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Get the index the match began at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Get the number of bytes consumed.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` for a zero-width match.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the position immediately after the matched text.
    pub fn end(&self) -> usize {
        self.index + self.len()
    }

    /// Get the parsed value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consume the success and return the parsed value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Replace the value, keeping text and position.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Success<'a, U> {
        Success {
            text: self.text,
            index: self.index,
            value: f(self.value),
        }
    }
}

/// Outcome of a single parse attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseResult<'a, T> {
    /// The parser matched.
    Success(Success<'a, T>),
    /// The parser did not match.
    Failure(Failure),
}

impl<'a, T> ParseResult<'a, T> {
    /// Create a successful result.
    pub fn success(text: &'a str, index: usize, value: T) -> Self {
        ParseResult::Success(Success::new(text, index, value))
    }

    /// Create a failed result.
    pub fn failure(kind: FailureKind, index: usize, message: impl Into<String>) -> Self {
        ParseResult::Failure(Failure::new(kind, index, message))
    }

    /// Returns `true` if the parser matched.
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success(_))
    }

    /// Returns `true` if the parser did not match.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Get the matched text, empty for a failure.
    pub fn text(&self) -> &'a str {
        match self {
            ParseResult::Success(success) => success.text(),
            ParseResult::Failure(_) => "",
        }
    }

    /// Get the index of the attempt.
    pub fn index(&self) -> usize {
        match self {
            ParseResult::Success(success) => success.index(),
            ParseResult::Failure(failure) => failure.index(),
        }
    }

    /// Get the number of bytes consumed, zero for a failure.
    pub fn len(&self) -> usize {
        match self {
            ParseResult::Success(success) => success.len(),
            ParseResult::Failure(_) => 0,
        }
    }

    /// Returns `true` if nothing was consumed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the position immediately after the consumed text.
    pub fn end(&self) -> usize {
        self.index() + self.len()
    }

    /// Get the parsed value, if the parser matched.
    pub fn value(&self) -> Option<&T> {
        match self {
            ParseResult::Success(success) => Some(success.value()),
            ParseResult::Failure(_) => None,
        }
    }

    /// Consume the result and return the parsed value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            ParseResult::Success(success) => Some(success.into_value()),
            ParseResult::Failure(_) => None,
        }
    }

    /// Get the diagnostic message, empty for a success.
    pub fn message(&self) -> &str {
        match self {
            ParseResult::Success(_) => "",
            ParseResult::Failure(failure) => failure.message(),
        }
    }

    /// Get the failure kind, if the parser did not match.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            ParseResult::Success(_) => None,
            ParseResult::Failure(failure) => Some(failure.kind()),
        }
    }

    /// Get the failure, if the parser did not match.
    pub fn as_failure(&self) -> Option<&Failure> {
        match self {
            ParseResult::Success(_) => None,
            ParseResult::Failure(failure) => Some(failure),
        }
    }

    /// Convert into a standard [`Result`] so `?` can be used on it.
    pub fn into_result(self) -> Result<Success<'a, T>, Failure> {
        match self {
            ParseResult::Success(success) => Ok(success),
            ParseResult::Failure(failure) => Err(failure),
        }
    }
}

impl<'a, T> From<Success<'a, T>> for ParseResult<'a, T> {
    fn from(success: Success<'a, T>) -> Self {
        ParseResult::Success(success)
    }
}

impl<T> From<Failure> for ParseResult<'_, T> {
    fn from(failure: Failure) -> Self {
        ParseResult::Failure(failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_accessors() {
        let input = "hello world";
        let result = ParseResult::success(&input[6..11], 6, 42);

        assert!(result.is_success());
        assert!(!result.is_failure());
        assert_eq!(result.text(), "world");
        assert_eq!(result.index(), 6);
        assert_eq!(result.len(), 5);
        assert_eq!(result.end(), 11);
        assert_eq!(result.value(), Some(&42));
        assert_eq!(result.message(), "");
        assert_eq!(result.failure_kind(), None);
    }

    #[test]
    fn test_failure_accessors() {
        let result: ParseResult<'_, i32> =
            ParseResult::failure(FailureKind::Inversion, 3, "matched unexpectedly");

        assert!(result.is_failure());
        assert_eq!(result.text(), "");
        assert_eq!(result.index(), 3);
        assert_eq!(result.len(), 0);
        assert!(result.is_empty());
        assert_eq!(result.value(), None);
        assert_eq!(result.message(), "matched unexpectedly");
        assert_eq!(result.failure_kind(), Some(FailureKind::Inversion));
    }

    #[test]
    fn test_empty_success() {
        let success = Success::empty(7, ());

        assert!(success.is_empty());
        assert_eq!(success.index(), 7);
        assert_eq!(success.end(), 7);
    }

    #[test]
    fn test_success_map_keeps_position() {
        let success = Success::new("12", 1, "12").map(|s| s.len());

        assert_eq!(success.text(), "12");
        assert_eq!(success.index(), 1);
        assert_eq!(*success.value(), 2);
    }

    #[test]
    fn test_into_result() {
        let ok: ParseResult<'_, u8> = ParseResult::success("x", 0, 1);
        assert_eq!(ok.into_result().map(Success::into_value), Ok(1));

        let err: ParseResult<'_, u8> = Failure::parsing(0, "nope").into();
        let failure = err.into_result().unwrap_err();
        assert_eq!(failure.kind(), FailureKind::Parsing);
        assert_eq!(failure.message(), "nope");
    }
}
