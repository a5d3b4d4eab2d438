/*!
 * Stable Heap
 * Bounded priority queue that keeps FIFO order among equal priorities
 */

use super::sequence::BucketSequence;
use super::traits::Heap;
use super::types::{HeapStats, InsertOutcome};
use crate::core::config::HeapConfig;
use crate::core::errors::HeapResult;

/// Bounded, stable min-priority queue
///
/// Elements are ordered by `T: Ord`; the smallest pops first. Elements that
/// compare equal pop in the order they were inserted.
///
/// # Capacity
/// - at most `max_buckets` distinct priorities; a new priority beyond that
///   is dropped and reported as `InsertOutcome::Dropped`
/// - at most `bucket_capacity` elements per priority; overflowing one is
///   `HeapError::CapacityExceeded`
///
/// # Example
/// ```
/// use stable_heap::{Prioritized, StableHeap};
///
/// let mut heap = StableHeap::new();
/// assert!(heap.insert(Prioritized::new(3, 'a')).unwrap().is_accepted());
/// assert!(heap.insert(Prioritized::new(1, 'b')).unwrap().is_accepted());
/// assert!(heap.insert(Prioritized::new(3, 'c')).unwrap().is_accepted());
///
/// let order: Vec<char> = heap.drain().map(|p| p.value).collect();
/// assert_eq!(order, vec!['b', 'a', 'c']);
/// ```
#[derive(Debug, Clone)]
pub struct StableHeap<T> {
    sequence: BucketSequence<T>,
    config: HeapConfig,
}

impl<T: Ord> StableHeap<T> {
    /// Heap with the default capacities (10 priorities, 8 elements each)
    pub fn new() -> Self {
        Self {
            sequence: BucketSequence::with_defaults(),
            config: HeapConfig::default(),
        }
    }

    /// Heap with validated capacities
    ///
    /// Fails with `InvalidConfig` if `config` does not validate, or with
    /// `AllocationFailed` if the bucket slots cannot be reserved.
    pub fn with_config(config: HeapConfig) -> HeapResult<Self> {
        Ok(Self {
            sequence: BucketSequence::with_config(&config)?,
            config,
        })
    }

    pub fn with_capacity(max_buckets: usize, bucket_capacity: usize) -> HeapResult<Self> {
        Self::with_config(HeapConfig::new(max_buckets, bucket_capacity))
    }

    /// Insert an element behind any equal-priority elements already queued
    ///
    /// On `Err` or `Dropped` the heap is unchanged and the element is discarded.
    /// Errors are `CapacityExceeded` for a full bucket, or `AllocationFailed`
    /// if a new bucket's ring cannot be allocated.
    pub fn insert(&mut self, element: T) -> HeapResult<InsertOutcome> {
        self.sequence.insert(element)
    }

    /// Remove the minimum element, oldest first among equals
    ///
    /// Returns `None` on an empty heap, every time.
    pub fn pop_front(&mut self) -> Option<T> {
        self.sequence.pop_front()
    }

    /// The element `pop_front` would return next
    pub fn peek_min(&self) -> Option<&T> {
        self.sequence.peek_min()
    }

    /// Pop every element in priority-then-insertion order
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { heap: self }
    }
}

impl<T> StableHeap<T> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn clear(&mut self) {
        self.sequence.clear();
    }

    /// Number of queued elements
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Number of distinct priorities currently queued
    pub fn bucket_count(&self) -> usize {
        self.sequence.bucket_count()
    }

    pub fn config(&self) -> &HeapConfig {
        &self.config
    }

    pub fn stats(&self) -> HeapStats {
        HeapStats {
            elements: self.sequence.len(),
            buckets: self.sequence.bucket_count(),
            max_buckets: self.sequence.max_buckets(),
            bucket_capacity: self.sequence.bucket_capacity(),
        }
    }

    /// Elements in pop order, without removing them
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.sequence.iter()
    }
}

impl<T: Ord> Default for StableHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Heap<T> for StableHeap<T> {
    fn insert(&mut self, element: T) -> HeapResult<InsertOutcome> {
        StableHeap::insert(self, element)
    }

    fn delete_min(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn find_min(&self) -> Option<&T> {
        self.peek_min()
    }

    fn is_empty(&self) -> bool {
        StableHeap::is_empty(self)
    }

    fn make_empty(&mut self) {
        self.clear();
    }
}

/// Draining iterator returned by [`StableHeap::drain`]
///
/// Elements not consumed stay in the heap.
#[derive(Debug)]
pub struct Drain<'a, T: Ord> {
    heap: &'a mut StableHeap<T>,
}

impl<T: Ord> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T: Ord> ExactSizeIterator for Drain<'_, T> {}
