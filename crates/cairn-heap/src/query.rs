//! Defensive queries over possibly-absent heaps.
//!
//! Code that threads an `Option<&MinHeap<..>>` through defensive paths
//! (driver glue, teardown sequences) often wants the size queries to stay
//! total rather than branch on presence. These helpers define an absent
//! heap as the most restrictive state: it holds nothing and accepts
//! nothing. Mutating operations get no such defaults — absence there is a
//! caller bug, and the type system already makes it unrepresentable.

use std::cmp::Ordering;

use crate::heap::MinHeap;

/// Number of stored elements; `0` when `heap` is absent.
pub fn size<T, C>(heap: Option<&MinHeap<'_, T, C>>) -> usize
where
    T: Default + Clone,
    C: Fn(&T, &T) -> Ordering,
{
    heap.map_or(0, MinHeap::len)
}

/// Whether the heap is empty; `true` when `heap` is absent.
pub fn is_empty<T, C>(heap: Option<&MinHeap<'_, T, C>>) -> bool
where
    T: Default + Clone,
    C: Fn(&T, &T) -> Ordering,
{
    heap.is_none_or(|h| h.is_empty())
}

/// Whether the heap is full; `true` when `heap` is absent.
pub fn is_full<T, C>(heap: Option<&MinHeap<'_, T, C>>) -> bool
where
    T: Default + Clone,
    C: Fn(&T, &T) -> Ordering,
{
    heap.is_none_or(|h| h.is_full())
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntHeap<'a> = MinHeap<'a, i32, fn(&i32, &i32) -> Ordering>;

    #[test]
    fn absent_heap_is_the_most_restrictive_state() {
        let heap: Option<&IntHeap<'_>> = None;
        assert_eq!(size(heap), 0);
        assert!(is_empty(heap));
        assert!(is_full(heap));
    }

    #[test]
    fn present_heap_reports_its_own_state() {
        let mut buf = [0i32; 2];
        let mut heap: IntHeap<'_> = MinHeap::from_slice(&mut buf, i32::cmp);
        heap.insert(1).unwrap();

        assert_eq!(size(Some(&heap)), 1);
        assert!(!is_empty(Some(&heap)));
        assert!(!is_full(Some(&heap)));

        heap.insert(2).unwrap();
        assert!(is_full(Some(&heap)));
    }
}
