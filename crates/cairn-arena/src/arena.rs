//! The bump arena itself.

use indexmap::IndexMap;

use crate::error::ArenaError;
use crate::region::RegionId;

/// A fixed-capacity bump arena over elements of type `T`.
///
/// The backing store is allocated to full capacity at construction and
/// zero-initialised (`T::default()`). Allocation advances a cursor and
/// never touches the global allocator again; freeing happens in bulk via
/// [`Arena::reset`] or by dropping the arena. Regions are never freed
/// individually.
///
/// Each successful allocation is recorded in a region table keyed by
/// [`RegionId`], so a region can be re-borrowed later even after the
/// slice returned by [`Arena::alloc`] has been released.
///
/// # Examples
///
/// ```
/// use cairn_arena::Arena;
///
/// let mut arena: Arena<u32> = Arena::new(16);
/// let (id, buf) = arena.alloc(4).unwrap();
/// buf[0] = 7;
///
/// assert_eq!(arena.used(), 4);
/// assert_eq!(arena.region(id).unwrap()[0], 7);
/// ```
pub struct Arena<T> {
    /// Backing store. Allocated to full capacity at creation, zeroed.
    data: Vec<T>,
    /// Bump pointer: next free position (in elements).
    cursor: usize,
    /// Maps RegionId to (offset, len) within `data`.
    regions: IndexMap<RegionId, (usize, usize)>,
    /// Next id to hand out.
    next_region: u32,
}

impl<T: Default + Clone> Arena<T> {
    /// Create a new arena with room for `capacity` elements.
    ///
    /// This is the only point at which the arena allocates.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![T::default(); capacity],
            cursor: 0,
            regions: IndexMap::new(),
            next_region: 0,
        }
    }

    /// Bump-allocate `len` elements.
    ///
    /// Returns the region's id and a zero-initialised mutable slice over
    /// it. Fails with [`ArenaError::CapacityExceeded`] if fewer than `len`
    /// elements remain, in which case the arena is left untouched.
    ///
    /// The returned borrow ties up the arena; a caller binding a
    /// long-lived structure to the region holds the arena by `&mut` for
    /// that structure's lifetime, or re-borrows later via
    /// [`Arena::region_mut`].
    pub fn alloc(&mut self, len: usize) -> Result<(RegionId, &mut [T]), ArenaError> {
        let new_cursor = self
            .cursor
            .checked_add(len)
            .ok_or(ArenaError::CapacityExceeded {
                requested: len,
                remaining: self.remaining(),
            })?;
        if new_cursor > self.data.len() {
            return Err(ArenaError::CapacityExceeded {
                requested: len,
                remaining: self.remaining(),
            });
        }

        let id = RegionId(self.next_region);
        self.next_region += 1;
        self.regions.insert(id, (self.cursor, len));

        let start = self.cursor;
        self.cursor = new_cursor;
        let slice = &mut self.data[start..new_cursor];
        // Stale data may remain from before a reset; hand out zeroes.
        slice.fill(T::default());
        Ok((id, slice))
    }

    /// Re-borrow a recorded region immutably.
    ///
    /// Returns `None` for ids not in the table (unknown, or cleared by a
    /// reset).
    pub fn region(&self, id: RegionId) -> Option<&[T]> {
        let &(offset, len) = self.regions.get(&id)?;
        Some(&self.data[offset..offset + len])
    }

    /// Re-borrow a recorded region mutably.
    pub fn region_mut(&mut self, id: RegionId) -> Option<&mut [T]> {
        let &(offset, len) = self.regions.get(&id)?;
        Some(&mut self.data[offset..offset + len])
    }

    /// Bulk free: reset the cursor and clear the region table.
    ///
    /// All previously handed-out region ids become invalid. The backing
    /// store is retained and NOT zeroed here; the next [`Arena::alloc`]
    /// zeroes what it hands out.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.regions.clear();
        self.next_region = 0;
    }

    /// Number of elements currently allocated.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Total capacity in elements.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Remaining free capacity in elements.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// Number of live regions.
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Memory usage of the backing store in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_returns_zeroed_slice() {
        let mut arena: Arena<i32> = Arena::new(64);
        let (_, s) = arena.alloc(10).unwrap();
        assert_eq!(s.len(), 10);
        assert!(s.iter().all(|&v| v == 0));
    }

    #[test]
    fn sequential_allocs_dont_overlap() {
        let mut arena: Arena<i32> = Arena::new(64);
        let (a, s) = arena.alloc(5).unwrap();
        s[0] = 1;
        s[4] = 5;
        let (b, s) = arena.alloc(3).unwrap();
        s[0] = 10;

        assert_eq!(arena.used(), 8);
        assert_eq!(arena.region(a).unwrap(), &[1, 0, 0, 0, 5]);
        assert_eq!(arena.region(b).unwrap(), &[10, 0, 0]);
    }

    #[test]
    fn alloc_fails_when_full_without_state_change() {
        let mut arena: Arena<u8> = Arena::new(10);
        arena.alloc(8).unwrap();
        let result = arena.alloc(3);
        assert_eq!(
            result.unwrap_err(),
            ArenaError::CapacityExceeded {
                requested: 3,
                remaining: 2,
            }
        );
        // A failed alloc must not move the cursor or record a region.
        assert_eq!(arena.used(), 8);
        assert_eq!(arena.region_count(), 1);
        assert!(arena.alloc(2).is_ok());
    }

    #[test]
    fn exactly_remaining_capacity_succeeds() {
        let mut arena: Arena<u8> = Arena::new(10);
        arena.alloc(4).unwrap();
        assert!(arena.alloc(6).is_ok());
        assert_eq!(arena.remaining(), 0);
    }

    #[test]
    fn reset_invalidates_regions_and_rezeroes() {
        let mut arena: Arena<i32> = Arena::new(16);
        let (id, s) = arena.alloc(4).unwrap();
        s.fill(9);

        arena.reset();
        assert_eq!(arena.used(), 0);
        assert_eq!(arena.region_count(), 0);
        assert!(arena.region(id).is_none());

        // Re-alloc over the same storage must read as zeroes again.
        let (_, s) = arena.alloc(4).unwrap();
        assert!(s.iter().all(|&v| v == 0));
    }

    #[test]
    fn zero_len_alloc_is_valid() {
        let mut arena: Arena<i32> = Arena::new(4);
        let (id, s) = arena.alloc(0).unwrap();
        assert!(s.is_empty());
        assert_eq!(arena.used(), 0);
        assert_eq!(arena.region(id).unwrap().len(), 0);
    }

    #[test]
    fn region_mut_roundtrip() {
        let mut arena: Arena<i32> = Arena::new(8);
        let (id, _) = arena.alloc(3).unwrap();
        arena.region_mut(id).unwrap()[1] = 42;
        assert_eq!(arena.region(id).unwrap()[1], 42);
    }

    #[test]
    fn memory_bytes_accounts_for_element_size() {
        let arena: Arena<u64> = Arena::new(100);
        assert_eq!(arena.memory_bytes(), 800);
    }

    #[test]
    fn zero_capacity_arena_rejects_everything() {
        let mut arena: Arena<i32> = Arena::new(0);
        assert!(arena.alloc(1).is_err());
        assert!(arena.alloc(0).is_ok());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn used_equals_sum_of_successful_allocs(
                lens in proptest::collection::vec(0usize..32, 1..20),
            ) {
                let mut arena: Arena<u8> = Arena::new(128);
                let mut expected = 0usize;
                for &len in &lens {
                    if arena.alloc(len).is_ok() {
                        expected += len;
                    }
                }
                prop_assert_eq!(arena.used(), expected);
                prop_assert!(arena.used() <= arena.capacity());
            }

            #[test]
            fn regions_never_overlap(
                lens in proptest::collection::vec(1usize..16, 1..10),
            ) {
                let mut arena: Arena<u8> = Arena::new(256);
                let mut ids = Vec::new();
                for &len in &lens {
                    if let Ok((id, s)) = arena.alloc(len) {
                        // Tag the region with its own id.
                        s.fill(id.0 as u8 + 1);
                        ids.push(id);
                    }
                }
                for &id in &ids {
                    let region = arena.region(id).unwrap();
                    prop_assert!(region.iter().all(|&v| v == id.0 as u8 + 1));
                }
            }
        }
    }
}
