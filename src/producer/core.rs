//! The core producer trait

/// A pull-based source of values.
///
/// `pull` yields the next value or `None` once the sequence is exhausted.
/// Producers are fused: after a leaf producer has returned `None`, every
/// later `pull` returns `None` as well.
pub trait Producer {
    type Item;

    /// Advance and yield the next value, or `None` at the end.
    fn pull(&mut self) -> Option<Self::Item>;

    /// Deep copy with the cursor reset to the producer's starting position.
    ///
    /// The duplicate is fully independent of `self`: pulling one never
    /// advances the other, and the duplicate always replays the sequence
    /// from the beginning regardless of how far `self` has been driven.
    fn duplicate(&self) -> Self
    where
        Self: Sized;
}
