//! Fixed-capacity bump arena for the Cairn containers.
//!
//! The arena is the single point where memory is obtained in a Cairn
//! program: it allocates its backing store once, up front, and hands out
//! zero-initialised regions from it. Containers built on top (such as
//! [`MinHeap`](https://docs.rs/cairn-heap)) take their region at
//! construction time and never call back into the arena afterwards —
//! reclamation happens in bulk, by resetting or dropping the arena, never
//! per region.
//!
//! # Allocation model
//!
//! ```text
//! Arena<T>
//! ├── Vec<T>          backing store, allocated once, zeroed
//! ├── cursor          bump pointer (elements handed out so far)
//! └── IndexMap<RegionId, (offset, len)>   region table for re-borrowing
//! ```
//!
//! Every allocation is recorded in the region table, so callers that let
//! the original borrow lapse can re-borrow a region by id via
//! [`Arena::region`] / [`Arena::region_mut`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod error;
pub mod region;

pub use arena::Arena;
pub use error::ArenaError;
pub use region::RegionId;
