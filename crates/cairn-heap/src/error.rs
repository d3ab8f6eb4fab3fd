//! Heap-specific error types.

use std::error::Error;
use std::fmt;

use cairn_arena::ArenaError;

/// Errors that can occur during heap operations.
///
/// Every condition is detected before any mutation happens, so a returned
/// error always leaves the heap in its previous valid state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeapError {
    /// The backing buffer could not be obtained from the arena at init.
    Allocation(ArenaError),
    /// The operation requires at least one element but the heap is empty.
    Empty,
    /// Insertion attempted while the heap holds `capacity` elements.
    Full {
        /// The heap's fixed capacity.
        capacity: usize,
    },
    /// The supplied index does not address a stored element.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of elements currently stored.
        len: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation(err) => write!(f, "heap buffer allocation failed: {err}"),
            Self::Empty => write!(f, "heap is empty"),
            Self::Full { capacity } => write!(f, "heap is full at capacity {capacity}"),
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for heap of {len} elements")
            }
        }
    }
}

impl Error for HeapError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Allocation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ArenaError> for HeapError {
    fn from(err: ArenaError) -> Self {
        Self::Allocation(err)
    }
}
