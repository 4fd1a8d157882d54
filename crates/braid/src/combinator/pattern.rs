//! Regular expression matching.

use std::fmt;

use log::warn;
use regex::Regex;
use regex_automata::{Anchored, Input, meta};

use crate::{
    error::Result,
    parser::Parser,
    result::{Failure, ParseResult},
};

/// Matches a regular expression anchored at the current index.
///
/// The match must start exactly at the index, so a failed attempt never
/// scans the rest of the input. Look-behind assertions such as `\b` and `^`
/// see the input before the index.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    anchored: Option<meta::Regex>,
}

impl Pattern {
    /// Create a parser from a compiled expression.
    pub fn new(regex: Regex) -> Self {
        // Same defaults as `Regex::new`; fails only past the default size limits.
        let anchored = match meta::Regex::new(regex.as_str()) {
            Ok(anchored) => Some(anchored),
            Err(err) => {
                warn!(pattern = regex.as_str(), err:err; "Falling back to unanchored search");
                None
            }
        };
        Self { regex, anchored }
    }

    /// Compile `source` into a parser.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`](crate::Error::InvalidPattern) if
    /// `source` is not a valid expression.
    pub fn compile(source: &str) -> Result<Self> {
        Ok(Self::new(Regex::new(source)?))
    }

    /// Get the underlying expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    fn find_at<'a>(&self, input: &'a str, index: usize) -> Option<&'a str> {
        if !input.is_char_boundary(index) {
            return None;
        }

        match &self.anchored {
            Some(anchored) => {
                let search = Input::new(input).range(index..).anchored(Anchored::Yes);
                anchored
                    .find(search)
                    .and_then(|found| input.get(found.range()))
            }
            None => self
                .regex
                .find_at(input, index)
                .filter(|found| found.start() == index)
                .map(|found| found.as_str()),
        }
    }
}

impl Parser for Pattern {
    type Output = String;

    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, String> {
        match self.find_at(input, index) {
            Some(text) => ParseResult::success(text, index, text.to_owned()),
            None => Failure::parsing(
                index,
                format!("Expected text to match the pattern {self} at index {index}"),
            )
            .into(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.regex)
    }
}
