//! # Braid
//!
//! Backtracking parser combinators over string input. A grammar is a graph
//! of small parsers composed with builder methods; calling it on an input
//! produces either a typed value or a diagnostic [`Failure`].
//!
//! - **Primitives**: [`literal`] and [`pattern`] are the only parsers that
//!   read characters.
//! - **Structure**: [`then`](Parser::then) (sequence), [`or`](Parser::or)
//!   (ordered choice), [`repeat`](Parser::repeat), [`optional`](Parser::optional),
//!   [`not`](Parser::not) and [`end`](Parser::end).
//! - **Conversion**: [`map`](Parser::map) and [`try_map`](Parser::try_map).
//! - **Recursion**: [`lazy`] defers building a parser until first use.
//!
//! Choice is first-match-wins (PEG style): there is no memoization, no
//! left-recursion handling and no ambiguity detection.
//!
//! ## Usage
//!
//! ```
//! use braid::{FailureKind, Parser, literal, pattern};
//!
//! fn main() -> braid::Result<()> {
//!     let number = pattern(r"\d+")?.try_map(|digits| digits.parse::<u32>());
//!     let list = literal("[")
//!         .then(number.repeat().separated_by(","))
//!         .then("]")
//!         .map(|seq| seq.into_tuple3().1)
//!         .end();
//!
//!     assert_eq!(list.parse("[1,2,3]").into_value(), Some(vec![1, 2, 3]));
//!
//!     let failure = list.parse("[1,2]x");
//!     assert_eq!(failure.failure_kind(), Some(FailureKind::Termination));
//!     Ok(())
//! }
//! ```

pub mod combinator;
mod error;
mod parser;
pub mod result;
pub mod sequence;

pub use error::{Error, Result};
pub use parser::{BoxedParser, IntoParser, Parser, choice, lazy, literal, pattern};
pub use result::{Failure, FailureKind, ParseResult, Success};
pub use sequence::SequenceResult;
