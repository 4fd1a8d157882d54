//! Errors raised while building a grammar.
//!
//! Parse attempts never return these: a parser that does not match produces
//! a [`Failure`](crate::Failure) inside its [`ParseResult`](crate::ParseResult).
//! This type only covers grammar construction, such as compiling a pattern.

use thiserror::Error;

/// A type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a grammar.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
