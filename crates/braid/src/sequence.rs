//! Values produced by sequenced parsers.
//!
//! [`Sequence`](crate::combinator::Sequence) pairs the values of its two
//! steps in a [`SequenceResult`]. Chaining `then` nests pairs to the left, so
//! `a.then(b).then(c)` yields `SequenceResult<SequenceResult<A, B>, C>`:
//!
//! ```
//! # use braid::{Parser, literal};
//! let value = literal("a").then("b").then("c").parse("abc").into_value().unwrap();
//!
//! assert_eq!(value.first().first(), "a");
//! assert_eq!(value.first().next(), "b");
//! assert_eq!(value.next(), "c");
//! assert_eq!(value.to_string(), r#"Seq("a" ~ "b" ~ "c")"#);
//!
//! let (a, b, c) = value.into_tuple3();
//! assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("a", "b", "c"));
//! ```

use std::fmt;

/// A pair of sequenced values, nested to the left for longer chains.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SequenceResult<A, B> {
    first: A,
    next: B,
}

impl<A, B> SequenceResult<A, B> {
    /// Create a pair.
    pub fn new(first: A, next: B) -> Self {
        Self { first, next }
    }

    /// Get the value of the earlier steps.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// Get the value of the last step.
    pub fn next(&self) -> &B {
        &self.next
    }

    /// Split into `(first, next)`.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.next)
    }
}

impl<A, B, C> SequenceResult<SequenceResult<A, B>, C> {
    /// Flatten a three step chain.
    pub fn into_tuple3(self) -> (A, B, C) {
        let (ab, c) = self.into_parts();
        let (a, b) = ab.into_parts();
        (a, b, c)
    }
}

impl<A, B, C, D> SequenceResult<SequenceResult<SequenceResult<A, B>, C>, D> {
    /// Flatten a four step chain.
    pub fn into_tuple4(self) -> (A, B, C, D) {
        let (abc, d) = self.into_parts();
        let (a, b, c) = abc.into_tuple3();
        (a, b, c, d)
    }
}

impl<A, B, C, D, E> SequenceResult<SequenceResult<SequenceResult<SequenceResult<A, B>, C>, D>, E> {
    /// Flatten a five step chain.
    pub fn into_tuple5(self) -> (A, B, C, D, E) {
        let (abcd, e) = self.into_parts();
        let (a, b, c, d) = abcd.into_tuple4();
        (a, b, c, d, e)
    }
}

impl<A, B, C, D, E, F>
    SequenceResult<SequenceResult<SequenceResult<SequenceResult<SequenceResult<A, B>, C>, D>, E>, F>
{
    /// Flatten a six step chain.
    pub fn into_tuple6(self) -> (A, B, C, D, E, F) {
        let (abcde, f) = self.into_parts();
        let (a, b, c, d, e) = abcde.into_tuple5();
        (a, b, c, d, e, f)
    }
}

// Nested pairs print as one flat chain: `"a" ~ "b" ~ "c"`.
impl<A: fmt::Debug, B: fmt::Debug> fmt::Debug for SequenceResult<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} ~ {:?}", self.first, self.next)
    }
}

impl<A: fmt::Debug, B: fmt::Debug> fmt::Display for SequenceResult<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seq({self:?})")
    }
}
