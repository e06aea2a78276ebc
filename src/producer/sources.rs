//! Leaf producers: generator closures, owned collections, literal packs

use super::core::Producer;

// ================================
// Generator-backed producer
// ================================

/// Infinite producer backed by a zero-argument generator closure.
///
/// Every pull invokes the generator once; the sequence never ends.
pub struct FromFn<G> {
    pub(crate) generator: G,
}

impl<T, G> Producer for FromFn<G>
where
    G: FnMut() -> T + Clone,
{
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        Some((self.generator)())
    }

    fn duplicate(&self) -> Self {
        // Cloning the closure snapshots any captured state, so the duplicate
        // replays the generator from the same point this producer started at.
        FromFn {
            generator: self.generator.clone(),
        }
    }
}

// ================================
// Collection-backed producer
// ================================

/// Finite producer over an owned copy of an ordered collection.
pub struct Items<T> {
    pub(crate) items: Vec<T>,
    pub(crate) cursor: usize,
}

impl<T: Clone> Producer for Items<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let item = self.items.get(self.cursor).cloned();
        if item.is_some() {
            self.cursor += 1;
        }
        item
    }

    fn duplicate(&self) -> Self {
        Items {
            items: self.items.clone(),
            cursor: 0,
        }
    }
}

// ================================
// Literal-pack producer
// ================================

/// Finite producer over an explicit pack of literal values.
///
/// Values are stored and pulled in left-to-right order.
pub struct Values<T> {
    pub(crate) values: Vec<T>,
    pub(crate) cursor: usize,
}

impl<T: Clone> Producer for Values<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let value = self.values.get(self.cursor).cloned();
        if value.is_some() {
            self.cursor += 1;
        }
        value
    }

    fn duplicate(&self) -> Self {
        Values {
            values: self.values.clone(),
            cursor: 0,
        }
    }
}
