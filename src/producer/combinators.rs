//! Combinator producers: skip, take, filter, map, group
//!
//! Each combinator owns its parent producer by value, so a pipeline is one
//! nested value with no pointers and no shared cursor state. Duplication
//! recurses: a combinator duplicates its parent and resets its own counters,
//! which gives every duplicated lineage a fresh run from the start.

use super::core::Producer;

// ================================
// Skip
// ================================

/// Discards the first `amount` values of the parent, then delegates.
///
/// The skip phase runs lazily on the first pull, at most once. If the parent
/// exhausts during the skip phase, this producer is exhausted too. Each
/// duplicated lineage re-runs the skip phase against its own fresh parent.
pub struct Skip<P> {
    pub(crate) parent: P,
    pub(crate) amount: usize,
    pub(crate) skipped: bool,
}

impl<P: Producer> Producer for Skip<P> {
    type Item = P::Item;

    fn pull(&mut self) -> Option<P::Item> {
        if !self.skipped {
            self.skipped = true;
            for _ in 0..self.amount {
                // Parent producers are fused, so if this drains the parent
                // dry the delegation below keeps returning None.
                self.parent.pull()?;
            }
        }
        self.parent.pull()
    }

    fn duplicate(&self) -> Self {
        Skip {
            parent: self.parent.duplicate(),
            amount: self.amount,
            skipped: false,
        }
    }
}

// ================================
// Take
// ================================

/// Yields at most `amount` values from the parent.
///
/// The budget is spent on every pull that delegates, even one the parent
/// answers with `None` — take never retries a missed pull.
pub struct Take<P> {
    pub(crate) parent: P,
    pub(crate) amount: usize,
    pub(crate) taken: usize,
}

impl<P: Producer> Producer for Take<P> {
    type Item = P::Item;

    fn pull(&mut self) -> Option<P::Item> {
        if self.taken == self.amount {
            return None;
        }
        self.taken += 1;
        self.parent.pull()
    }

    fn duplicate(&self) -> Self {
        Take {
            parent: self.parent.duplicate(),
            amount: self.amount,
            taken: 0,
        }
    }
}

// ================================
// Filter
// ================================

/// Yields only the parent's values that satisfy the predicate.
pub struct Filter<P, F> {
    pub(crate) parent: P,
    pub(crate) predicate: F,
}

impl<P, F> Producer for Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool + Clone,
{
    type Item = P::Item;

    fn pull(&mut self) -> Option<P::Item> {
        loop {
            let item = self.parent.pull()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }

    fn duplicate(&self) -> Self {
        Filter {
            parent: self.parent.duplicate(),
            predicate: self.predicate.clone(),
        }
    }
}

// ================================
// Map
// ================================

/// Applies a transform to every value the parent yields.
///
/// The transform is never invoked once the parent is exhausted.
pub struct Map<P, F> {
    pub(crate) parent: P,
    pub(crate) transform: F,
}

impl<P, U, F> Producer for Map<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> U + Clone,
{
    type Item = U;

    fn pull(&mut self) -> Option<U> {
        self.parent.pull().map(&mut self.transform)
    }

    fn duplicate(&self) -> Self {
        Map {
            parent: self.parent.duplicate(),
            transform: self.transform.clone(),
        }
    }
}

// ================================
// Group
// ================================

/// Batches the parent's values into vectors of up to `size` elements.
///
/// A batch ends when `size` elements are collected or the parent exhausts
/// mid-batch; a final partial group is valid. When the first pull of a batch
/// already returns `None` the group producer is exhausted, so no empty
/// trailing group is ever yielded. `size` must be positive; the `Sequence`
/// layer rejects zero before this producer is built.
pub struct Group<P> {
    pub(crate) parent: P,
    pub(crate) size: usize,
}

impl<P: Producer> Producer for Group<P> {
    type Item = Vec<P::Item>;

    fn pull(&mut self) -> Option<Vec<P::Item>> {
        let first = self.parent.pull()?;
        let mut group = vec![first];
        while group.len() < self.size {
            match self.parent.pull() {
                Some(item) => group.push(item),
                None => break,
            }
        }
        Some(group)
    }

    fn duplicate(&self) -> Self {
        Group {
            parent: self.parent.duplicate(),
            size: self.size,
        }
    }
}
