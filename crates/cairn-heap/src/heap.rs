//! The fixed-capacity binary min-heap.
//!
//! Storage is a borrowed slice carved out of an [`Arena`] (or supplied
//! directly by the caller), laid out as a complete binary tree: the
//! children of index `i` sit at `2i + 1` and `2i + 2`. The minimum under
//! the heap's comparator is always at index 0.

use std::cmp::Ordering;

use cairn_arena::Arena;

use crate::error::HeapError;

/// A fixed-capacity binary min-heap over borrowed storage.
///
/// The heap performs no allocation of its own: its buffer is obtained
/// once, at construction, either from an [`Arena`] (via
/// [`MinHeap::init_in`]) or from any caller-provided slice (via
/// [`MinHeap::from_slice`]). Capacity is the buffer length and never
/// changes; insertion beyond it is rejected with
/// [`HeapError::Full`], never grown or silently dropped.
///
/// Ordering is driven by a caller-supplied comparator. The comparator
/// must implement a total, consistent order; violating that yields an
/// arbitrarily ordered heap, not a crash or memory error. Argument order
/// is fixed throughout the crate: `compare(a, b)` receives the stored
/// element as `a` and the probe as `b`.
///
/// Equal elements never swap: an inserted element that compares `Equal`
/// to its parent settles where it landed, so the relative order of
/// equal-priority elements is unspecified.
///
/// All access is through `&self` / `&mut self`; there is no interior
/// mutability and no locking. Callers that share a heap across threads
/// or interrupt contexts must serialise externally.
///
/// # Examples
///
/// ```
/// use cairn_arena::Arena;
/// use cairn_heap::MinHeap;
///
/// let mut arena: Arena<i32> = Arena::new(16);
/// let mut heap = MinHeap::init_in(&mut arena, 8, i32::cmp).unwrap();
///
/// heap.insert(5).unwrap();
/// heap.insert(10).unwrap();
/// heap.insert(3).unwrap();
///
/// assert_eq!(heap.peek(), Some(&3));
/// assert_eq!(heap.pop().unwrap(), 3);
/// assert_eq!(heap.len(), 2);
/// ```
pub struct MinHeap<'a, T, C> {
    /// Backing storage. Only `buf[..len]` is live.
    buf: &'a mut [T],
    /// Number of elements currently stored.
    len: usize,
    /// Three-way comparator; `compare(stored, probe)`.
    compare: C,
}

impl<'a, T, C> MinHeap<'a, T, C>
where
    T: Default + Clone,
    C: Fn(&T, &T) -> Ordering,
{
    /// Create a heap backed by a fresh zeroed region of `arena`.
    ///
    /// Allocates `capacity` elements from the arena — the heap's only
    /// interaction with it, ever. The arena stays mutably borrowed for
    /// the heap's lifetime; dropping or resetting the arena afterwards is
    /// what actually reclaims the storage (the heap never frees).
    ///
    /// Fails with [`HeapError::Allocation`] if the arena cannot supply
    /// `capacity` elements.
    pub fn init_in(
        arena: &'a mut Arena<T>,
        capacity: usize,
        compare: C,
    ) -> Result<Self, HeapError> {
        let (_, buf) = arena.alloc(capacity)?;
        Ok(Self {
            buf,
            len: 0,
            compare,
        })
    }

    /// Create a heap over caller-provided storage.
    ///
    /// Capacity is `buf.len()`; the logical size starts at zero and the
    /// slice's prior contents are treated as scratch. This is the path
    /// for static buffers or for carving several structures out of one
    /// region with `split_at_mut`.
    pub fn from_slice(buf: &'a mut [T], compare: C) -> Self {
        Self {
            buf,
            len: 0,
            compare,
        }
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the heap holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the heap is at capacity.
    pub fn is_full(&self) -> bool {
        self.len >= self.buf.len()
    }

    /// Maximum number of elements, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Borrow the minimum element, or `None` if the heap is empty.
    ///
    /// The referent's *content* may change across subsequent mutations —
    /// this is a view into live storage, not a snapshot.
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            Some(&self.buf[0])
        }
    }

    /// Copy out the minimum element.
    ///
    /// Fails with [`HeapError::Empty`] if the heap holds no elements.
    pub fn top(&self) -> Result<T, HeapError> {
        self.peek().cloned().ok_or(HeapError::Empty)
    }

    /// Remove all elements.
    ///
    /// O(1): resets the logical size without touching capacity,
    /// comparator, or storage contents.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Insert an element, restoring the heap property by sifting up.
    ///
    /// Fails with [`HeapError::Full`] at capacity, before any mutation;
    /// the rejected element is dropped. O(log n).
    pub fn insert(&mut self, item: T) -> Result<(), HeapError> {
        if self.is_full() {
            return Err(HeapError::Full {
                capacity: self.capacity(),
            });
        }
        self.buf[self.len] = item;
        self.len += 1;
        self.sift_up(self.len - 1);
        Ok(())
    }

    /// Remove and return the element at `index`.
    ///
    /// Fails with [`HeapError::Empty`] on an empty heap and
    /// [`HeapError::OutOfBounds`] if `index >= len()`, in that order,
    /// before any mutation.
    ///
    /// The element is exchanged with the last occupied slot and the heap
    /// shrinks by one. If the substitution landed mid-tree, the heap
    /// property can only have broken in one direction — the moved-in
    /// element is either too small for its parent or too large for its
    /// children, never both — so a single comparison against the removed
    /// element picks the restoration pass: sift up if the moved-in
    /// element compares `Less`, sift down if `Greater`, nothing on
    /// `Equal`. O(log n).
    pub fn remove(&mut self, index: usize) -> Result<T, HeapError> {
        if self.len == 0 {
            return Err(HeapError::Empty);
        }
        if index >= self.len {
            return Err(HeapError::OutOfBounds {
                index,
                len: self.len,
            });
        }

        let last = self.len - 1;
        self.buf.swap(index, last);
        self.len = last;
        let removed = std::mem::take(&mut self.buf[last]);

        // Removing the last slot directly leaves the tree intact.
        if index < self.len {
            match (self.compare)(&self.buf[index], &removed) {
                Ordering::Less => self.sift_up(index),
                Ordering::Greater => self.sift_down(index),
                Ordering::Equal => {}
            }
        }
        Ok(removed)
    }

    /// Remove and return the minimum element.
    ///
    /// Equivalent to `remove(0)`; fails with [`HeapError::Empty`] on an
    /// empty heap.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        self.remove(0)
    }

    /// Linear scan for an element comparing `Equal` to `probe`.
    ///
    /// Returns the index of the first match in storage order, or `None`.
    /// O(n) — the expensive path, intended for callers that need an index
    /// to feed [`MinHeap::remove`] and do not already know it.
    pub fn find(&self, probe: &T) -> Option<usize> {
        self.buf[..self.len]
            .iter()
            .position(|stored| (self.compare)(stored, probe) == Ordering::Equal)
    }

    /// View the live elements in storage (tree) order.
    ///
    /// Index 0 is the minimum; beyond that the order is the heap layout,
    /// not sorted order.
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// Move `cur` toward the root until its parent no longer compares
    /// greater. Equal parents stop the walk: ties never swap.
    fn sift_up(&mut self, mut cur: usize) {
        while cur != 0 {
            let parent = (cur - 1) / 2;
            if (self.compare)(&self.buf[cur], &self.buf[parent]) != Ordering::Less {
                break;
            }
            self.buf.swap(cur, parent);
            cur = parent;
        }
    }

    /// Move `cur` toward the leaves, exchanging with its smaller child
    /// while that child compares less.
    fn sift_down(&mut self, mut cur: usize) {
        loop {
            let left = 2 * cur + 1;
            if left >= self.len {
                break;
            }
            let right = left + 1;
            // The right child is taken unless the left compares strictly
            // less (ties go right, matching the insertion-side rule that
            // equal elements stay put).
            let child = if right < self.len
                && (self.compare)(&self.buf[left], &self.buf[right]) != Ordering::Less
            {
                right
            } else {
                left
            };
            if (self.compare)(&self.buf[child], &self.buf[cur]) != Ordering::Less {
                break;
            }
            self.buf.swap(cur, child);
            cur = child;
        }
    }
}
