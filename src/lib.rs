//! lazyseq - a lazy, composable, pull-based sequence processing library
//!
//! A [`Sequence`] is built from a collection, an iterator, a literal pack or a
//! zero-argument generator function, transformed through lazy combinators
//! (`skip`, `take`, `filter`, `map`, `group`) and consumed by a terminal
//! operation (`nth`, `to_vec`, `sum`, `reduce`, `print_joined`). Nothing is
//! pulled until a terminal operation runs, and every terminal operation
//! drains a fresh duplicate of the pipeline, so a sequence can be consumed
//! any number of times with identical results.
//!
//! Finiteness is tracked in the type: terminal operations that must drain the
//! whole pipeline only exist on [`Sequence<P, Finite>`], so collecting an
//! unbounded generator does not compile. `take` is the one combinator that
//! narrows an infinite sequence into a finite one.
//!
//! ```
//! use lazyseq::Sequence;
//!
//! let evens = Sequence::from_collection(1..=10)
//!     .filter(|n: &i32| n % 2 == 0)
//!     .map(|n| n * n)
//!     .to_vec();
//! assert_eq!(evens, vec![4, 16, 36, 64, 100]);
//!
//! let mut counter = 0;
//! let firsts = Sequence::from_generator_fn(move || {
//!     counter += 1;
//!     counter
//! });
//! assert_eq!(firsts.take(3).to_vec(), vec![1, 2, 3]);
//! ```

pub mod error;
pub mod producer;
pub mod sequence;

// Re-export the public surface at the crate root
pub use error::{SequenceError, SequenceResult};
pub use producer::Producer;
pub use sequence::{Finite, Finiteness, Infinite, Sequence};
