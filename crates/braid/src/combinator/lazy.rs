//! Deferred construction for self-referential grammars.

use std::fmt;

use log::trace;
use once_cell::sync::OnceCell;

use crate::{parser::Parser, result::ParseResult};

/// Builds its parser on first use and reuses it afterwards.
///
/// The factory runs at most once per `Lazy`. When several threads hit an
/// unresolved `Lazy` at the same time, one runs the factory and the others
/// wait for it. The factory must only build a parser; parsing through the
/// same `Lazy` from inside its own factory deadlocks.
pub struct Lazy<P, F> {
    factory: F,
    parser: OnceCell<P>,
}

impl<P, F> Lazy<P, F>
where
    P: Parser,
    F: Fn() -> P,
{
    /// Create a parser that runs `factory` on first use.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            parser: OnceCell::new(),
        }
    }

    /// Returns `true` once the factory has run.
    pub fn is_resolved(&self) -> bool {
        self.parser.get().is_some()
    }

    /// Get the parser, running the factory if this is the first use.
    pub fn resolve(&self) -> &P {
        self.parser.get_or_init(|| {
            trace!("Resolving deferred parser");
            (self.factory)()
        })
    }
}

impl<P, F> Parser for Lazy<P, F>
where
    P: Parser,
    F: Fn() -> P,
{
    type Output = P::Output;

    fn parse_at<'a>(&self, input: &'a str, index: usize) -> ParseResult<'a, Self::Output> {
        self.resolve().parse_at(input, index)
    }
}

impl<P, F> fmt::Display for Lazy<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Lazy]")
    }
}

impl<P, F> fmt::Debug for Lazy<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lazy")
            .field("resolved", &self.parser.get().is_some())
            .finish()
    }
}
