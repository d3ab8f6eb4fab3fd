//! Fixed-capacity, allocation-free binary min-heap.
//!
//! [`MinHeap`] stores elements in a contiguous buffer obtained once from a
//! [`cairn_arena::Arena`] (or supplied by the caller) and maintains the
//! min-heap invariant across insertion, arbitrary-index removal, and
//! membership queries. After construction it never allocates: capacity is
//! fixed, overflow is an error, and reclamation belongs to whoever owns
//! the storage.
//!
//! The interesting machinery is in [`heap`]: sift-up on insertion, and
//! index-based removal that restores the invariant with a single
//! direction-aware pass (up *or* down, picked by one comparison). See
//! [`MinHeap::remove`] for why one direction always suffices.
//!
//! Single-threaded by design — no locks, no atomics; `&mut` exclusivity
//! is the concurrency story.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod heap;
pub mod query;

pub use error::HeapError;
pub use heap::MinHeap;
