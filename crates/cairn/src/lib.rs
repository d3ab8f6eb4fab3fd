//! Cairn: fixed-capacity containers over bump-arena storage.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Cairn sub-crates. For most users, adding `cairn` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cairn::{Arena, MinHeap};
//!
//! // One up-front allocation; everything below is allocation-free.
//! let mut arena: Arena<i32> = Arena::new(64);
//! let mut heap = MinHeap::init_in(&mut arena, 16, i32::cmp).unwrap();
//!
//! for reading in [212, 96, 154, 96, 301] {
//!     heap.insert(reading).unwrap();
//! }
//!
//! assert_eq!(heap.len(), 5);
//! assert_eq!(heap.peek(), Some(&96));
//!
//! // Drain in ascending order.
//! let mut sorted = Vec::new();
//! while let Ok(v) = heap.pop() {
//!     sorted.push(v);
//! }
//! assert_eq!(sorted, vec![96, 96, 154, 212, 301]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `cairn-arena` | [`Arena`], [`RegionId`], [`ArenaError`] |
//! | [`heap`] | `cairn-heap` | [`MinHeap`], [`HeapError`], defensive queries |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Arena storage: fixed-capacity zeroed bump allocation.
pub mod arena {
    pub use cairn_arena::*;
}

/// The min-heap container and its error type.
pub mod heap {
    pub use cairn_heap::*;
}

pub use cairn_arena::{Arena, ArenaError, RegionId};
pub use cairn_heap::{HeapError, MinHeap};
