//! Parser implementations.
//!
//! - Primitives that read characters: [`Literal`], [`Pattern`].
//! - Structural combinators: [`Sequence`], [`Choice`], [`Repeat`],
//!   [`SeparatedRepeat`], [`Optional`], [`Not`], [`End`].
//! - Value conversion: [`Map`], [`TryMap`].
//! - Deferred construction: [`Lazy`].
//!
//! These are normally built through the [`Parser`](crate::Parser) builder
//! methods rather than their constructors.

mod choice;
mod end;
mod lazy;
mod literal;
mod map;
mod not;
mod optional;
mod pattern;
mod repeat;
mod sequence;

pub use choice::Choice;
pub use end::End;
pub use lazy::Lazy;
pub use literal::Literal;
pub use map::{Map, TryMap};
pub use not::Not;
pub use optional::Optional;
pub use pattern::Pattern;
pub use repeat::{Repeat, SeparatedRepeat};
pub use sequence::Sequence;
