//! Exact text matching.

use std::fmt;

use crate::{
    parser::Parser,
    result::{Failure, ParseResult},
};

/// Matches a fixed string at the current index.
///
/// Only the window starting at the index is compared; the input is never
/// searched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    text: String,
}

impl Literal {
    /// Create a parser for `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the text this parser matches.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Parser for Literal {
    type Output = String;

    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, String> {
        match input.get(index..) {
            Some(rest) if rest.starts_with(self.text.as_str()) => {
                ParseResult::success(&rest[..self.text.len()], index, self.text.clone())
            }
            _ => Failure::parsing(index, format!("Expected {self} at index {index}")).into(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::FailureKind;

    #[test]
    fn test_matches_at_index() {
        let result = Literal::new("bc").parse_at("abcd", 1);

        assert!(result.is_success());
        assert_eq!(result.text(), "bc");
        assert_eq!(result.index(), 1);
        assert_eq!(result.len(), 2);
        assert_eq!(result.into_value().as_deref(), Some("bc"));
    }

    #[test]
    fn test_does_not_search_ahead() {
        let result = Literal::new("cd").parse_at("abcd", 1);

        assert_eq!(result.failure_kind(), Some(FailureKind::Parsing));
        assert_eq!(result.index(), 1);
        assert_eq!(result.message(), "Expected \"cd\" at index 1");
    }

    #[test]
    fn test_input_too_short() {
        assert!(Literal::new("abc").parse("ab").is_failure());
    }

    #[test]
    fn test_empty_literal_matches_everywhere() {
        let result = Literal::new("").parse_at("ab", 2);

        assert!(result.is_success());
        assert!(result.is_empty());
    }

    #[test]
    fn test_index_out_of_range_or_mid_character_fails() {
        assert!(Literal::new("").parse_at("ab", 3).is_failure());
        assert!(Literal::new("x").parse_at("é", 1).is_failure());
    }

    #[test]
    fn test_multibyte_text() {
        let result = Literal::new("é").parse_at("aé", 1);

        assert!(result.is_success());
        assert_eq!(result.len(), 2);
        assert_eq!(result.end(), 3);
    }
}
