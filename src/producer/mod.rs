//! Pull-based producers and their combinators
//!
//! A producer answers one question at a time: the next value, or `None` when
//! the sequence ends. Combinator producers wrap a parent producer and expose
//! the same contract, so a whole pipeline is a single nested value with no
//! boxing and no shared state. Duplicating any producer yields an independent
//! copy whose cursor is reset to the start, which is what lets a `Sequence`
//! be consumed more than once.

pub mod combinators;
pub mod core;
pub mod sources;

pub use self::core::Producer;

pub use sources::{FromFn, Items, Values};

pub use combinators::{Filter, Group, Map, Skip, Take};
