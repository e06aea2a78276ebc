//! The user-facing sequence handle: construction, combinators, terminal ops
//!
//! A `Sequence` owns exactly one producer and a type-level finiteness tag.
//! Combinators consume the handle by value and return a new handle wrapping
//! the nested producer; terminal operations borrow the handle, duplicate the
//! producer and drain the duplicate, so the handle stays usable and every
//! terminal operation restarts the traversal from the beginning.

use std::fmt::Display;
use std::io;
use std::marker::PhantomData;
use std::ops::Add;

use crate::error::{SequenceError, SequenceResult};
use crate::producer::{Filter, FromFn, Group, Items, Map, Producer, Skip, Take, Values};

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Finite {}
    impl Sealed for super::Infinite {}
}

/// Type-level finiteness classification of a sequence.
///
/// Sealed: the only implementors are [`Finite`] and [`Infinite`]. Terminal
/// operations that must drain the whole pipeline are only defined on
/// `Sequence<P, Finite>`, so asking an unbounded sequence to materialize is
/// a compile error rather than a hang.
pub trait Finiteness: sealed::Sealed {
    const IS_FINITE: bool;
}

/// Tag for sequences guaranteed to exhaust after a bounded number of pulls.
#[derive(Debug, Clone, Copy)]
pub struct Finite;

/// Tag for sequences that never exhaust on their own.
#[derive(Debug, Clone, Copy)]
pub struct Infinite;

impl Finiteness for Finite {
    const IS_FINITE: bool = true;
}

impl Finiteness for Infinite {
    const IS_FINITE: bool = false;
}

/// A lazy pipeline handle over one producer.
///
/// Nothing is pulled until a terminal operation runs. The producer is owned
/// by value; composing combinators nests producer types rather than boxing.
#[must_use = "sequences are lazy and do nothing until a terminal operation runs"]
pub struct Sequence<P, Tag = Finite> {
    producer: P,
    _tag: PhantomData<Tag>,
}

impl<P, Tag> Sequence<P, Tag> {
    fn wrap(producer: P) -> Self {
        Sequence {
            producer,
            _tag: PhantomData,
        }
    }
}

/// Cloning duplicates the producer graph: the clone replays the sequence
/// from the start and shares no cursor state with the original.
impl<P: Producer, Tag> Clone for Sequence<P, Tag> {
    fn clone(&self) -> Self {
        Sequence::wrap(self.producer.duplicate())
    }
}

// ================================
// Construction
// ================================

impl<T: Clone> Sequence<Items<T>, Finite> {
    /// Finite sequence over an owned copy of a collection's values.
    ///
    /// ```
    /// use lazyseq::Sequence;
    /// let s = Sequence::from_collection(vec![1, 2, 3]);
    /// assert_eq!(s.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn from_collection<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>,
    {
        Sequence::wrap(Items {
            items: collection.into_iter().collect(),
            cursor: 0,
        })
    }

    /// Finite sequence draining an iterator up front.
    ///
    /// The iterator is consumed eagerly into an owned buffer so the sequence
    /// can be re-traversed; the values themselves are still pulled lazily.
    pub fn from_range<I>(range: I) -> Self
    where
        I: Iterator<Item = T>,
    {
        Sequence::wrap(Items {
            items: range.collect(),
            cursor: 0,
        })
    }
}

impl<T: Clone> Sequence<Values<T>, Finite> {
    /// Finite sequence over an explicit pack of values.
    ///
    /// ```
    /// use lazyseq::Sequence;
    /// let s = Sequence::from_values([1, 2, 3, 4, 5]);
    /// assert_eq!(s.sum(), Ok(15));
    /// ```
    pub fn from_values<const N: usize>(values: [T; N]) -> Self {
        Sequence::wrap(Values {
            values: values.into(),
            cursor: 0,
        })
    }
}

impl<T, G> Sequence<FromFn<G>, Infinite>
where
    G: FnMut() -> T + Clone,
{
    /// Infinite sequence whose values are repeated calls to `generator`.
    ///
    /// The generator's captured state at construction time is the restart
    /// point: every duplicate replays the calls from that state.
    pub fn from_generator_fn(generator: G) -> Self {
        Sequence::wrap(FromFn { generator })
    }
}

// ================================
// Combinators and tag-agnostic operations
// ================================

impl<P: Producer, Tag: Finiteness> Sequence<P, Tag> {
    /// Whether this sequence carries the `Finite` tag.
    pub fn is_finite(&self) -> bool {
        Tag::IS_FINITE
    }

    /// Skip the first `amount` values. Finiteness is unchanged.
    pub fn skip(self, amount: usize) -> Sequence<Skip<P>, Tag> {
        Sequence::wrap(Skip {
            parent: self.producer,
            amount,
            skipped: false,
        })
    }

    /// Keep at most the first `amount` values.
    ///
    /// The result is always `Finite`; this is the one combinator that
    /// narrows an infinite sequence into a finite one.
    pub fn take(self, amount: usize) -> Sequence<Take<P>, Finite> {
        Sequence::wrap(Take {
            parent: self.producer,
            amount,
            taken: 0,
        })
    }

    /// Keep only values satisfying the predicate. Finiteness is unchanged.
    pub fn filter<F>(self, predicate: F) -> Sequence<Filter<P, F>, Tag>
    where
        F: FnMut(&P::Item) -> bool + Clone,
    {
        Sequence::wrap(Filter {
            parent: self.producer,
            predicate,
        })
    }

    /// Transform every value. Finiteness is unchanged.
    pub fn map<U, F>(self, transform: F) -> Sequence<Map<P, F>, Tag>
    where
        F: FnMut(P::Item) -> U + Clone,
    {
        Sequence::wrap(Map {
            parent: self.producer,
            transform,
        })
    }

    /// Batch values into groups of up to `size`. Finiteness is unchanged.
    ///
    /// The last group may be smaller than `size` when the sequence exhausts
    /// mid-batch; no empty group is ever yielded.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. A zero group size can never make progress,
    /// so it is rejected here, before any producer is built.
    pub fn group(self, size: usize) -> Sequence<Group<P>, Tag> {
        assert!(size > 0, "group size must be positive");
        Sequence::wrap(Group {
            parent: self.producer,
            size,
        })
    }

    /// The value at index `n` (zero-based), pulling exactly `n + 1` times.
    ///
    /// Safe on infinite sequences. Fails with
    /// [`SequenceError::InsufficientElements`] if the sequence exhausts
    /// before index `n` is reached.
    pub fn nth(&self, n: usize) -> SequenceResult<P::Item> {
        let mut producer = self.producer.duplicate();
        for _ in 0..n {
            if producer.pull().is_none() {
                log::debug!("nth({}) exhausted the sequence early", n);
                return Err(SequenceError::InsufficientElements { index: n });
            }
        }
        producer
            .pull()
            .ok_or(SequenceError::InsufficientElements { index: n })
    }
}

// ================================
// Terminal operations (finite sequences only)
// ================================

impl<P: Producer> Sequence<P, Finite> {
    /// Drain a duplicate of the pipeline into a vector, in pull order.
    pub fn to_vec(&self) -> Vec<P::Item> {
        let mut producer = self.producer.duplicate();
        let mut items = Vec::new();
        while let Some(item) = producer.pull() {
            items.push(item);
        }
        log::trace!("to_vec collected {} elements", items.len());
        items
    }

    /// Fold left with `+`, seeding with the first value.
    ///
    /// Fails with [`SequenceError::EmptySequence`] when no value can be
    /// pulled.
    pub fn sum(&self) -> SequenceResult<P::Item>
    where
        P::Item: Add<Output = P::Item>,
    {
        let mut producer = self.producer.duplicate();
        let mut total = producer
            .pull()
            .ok_or(SequenceError::EmptySequence { operation: "sum" })?;
        while let Some(item) = producer.pull() {
            total = total + item;
        }
        Ok(total)
    }

    /// Fold left, seeding with `identity(first)` and combining the rest with
    /// `accumulator(acc, value)` in pull order.
    ///
    /// Fails with [`SequenceError::EmptySequence`] when no value can be
    /// pulled; no partial accumulation is ever returned.
    ///
    /// ```
    /// use lazyseq::Sequence;
    /// let s = Sequence::from_values([1, 2, 3, 4, 5]);
    /// let r = s.reduce(|v| 10.0 * v as f64, |acc, v| acc + 2.0 * v as f64);
    /// assert_eq!(r, Ok(38.0));
    /// ```
    pub fn reduce<U, I, A>(&self, identity: I, mut accumulator: A) -> SequenceResult<U>
    where
        I: FnOnce(P::Item) -> U,
        A: FnMut(U, P::Item) -> U,
    {
        let mut producer = self.producer.duplicate();
        let first = producer.pull().ok_or(SequenceError::EmptySequence {
            operation: "reduce",
        })?;
        let mut acc = identity(first);
        while let Some(item) = producer.pull() {
            acc = accumulator(acc, item);
        }
        Ok(acc)
    }

    /// Write all values to `sink` separated by single spaces.
    pub fn print_joined<W: io::Write>(&self, sink: &mut W) -> io::Result<()>
    where
        P::Item: Display,
    {
        self.print_joined_with(sink, " ")
    }

    /// Write all values to `sink` separated by `delimiter`.
    ///
    /// No trailing delimiter; an empty sequence writes nothing. Sink write
    /// failures surface as `io::Error`.
    pub fn print_joined_with<W: io::Write>(&self, sink: &mut W, delimiter: &str) -> io::Result<()>
    where
        P::Item: Display,
    {
        let mut producer = self.producer.duplicate();
        if let Some(first) = producer.pull() {
            write!(sink, "{}", first)?;
            while let Some(item) = producer.pull() {
                write!(sink, "{}{}", delimiter, item)?;
            }
        }
        Ok(())
    }
}
