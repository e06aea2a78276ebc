//! Error types for sequence terminal operations
//!
//! Only runtime failures live here: a terminal operation ran but the data did
//! not satisfy its requirement. Precondition violations are caught earlier —
//! draining an infinite sequence does not compile, and a zero group size
//! panics at the `group` call before any producer is built.

/// Error raised by a terminal operation on a `Sequence`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// `nth` ran past the end of the sequence before reaching the index
    #[error("sequence does not contain enough elements to reach index {index}")]
    InsufficientElements { index: usize },
    /// A fold over at least one element was asked of an empty sequence
    #[error("operation '{operation}' cannot be performed on an empty sequence")]
    EmptySequence { operation: &'static str },
}

/// Result type for sequence terminal operations
pub type SequenceResult<T> = Result<T, SequenceError>;
