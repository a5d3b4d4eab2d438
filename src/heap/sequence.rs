/*!
 * Bucket Sequence
 * Priority buckets kept sorted ascending, one bucket per distinct priority
 */

use super::bucket::PriorityBucket;
use super::types::InsertOutcome;
use crate::core::config::HeapConfig;
use crate::core::errors::{HeapError, HeapResult};
use std::cmp::Ordering;
use tracing::{debug, trace, warn};

/// Sorted sequence of priority buckets
///
/// Invariants:
/// - buckets are sorted ascending by priority, no two share a priority
/// - every bucket holds at least one element
/// - at most `max_buckets` buckets exist
#[derive(Debug, Clone)]
pub(crate) struct BucketSequence<T> {
    buckets: Vec<PriorityBucket<T>>,
    max_buckets: usize,
    bucket_capacity: usize,
}

impl<T> BucketSequence<T> {
    /// Sequence with the default capacities
    pub(crate) fn with_defaults() -> Self {
        let config = HeapConfig::default();
        Self {
            buckets: Vec::with_capacity(config.max_buckets),
            max_buckets: config.max_buckets,
            bucket_capacity: config.bucket_capacity,
        }
    }

    /// Sequence sized by `config`, with room for every bucket reserved up front
    pub(crate) fn with_config(config: &HeapConfig) -> HeapResult<Self> {
        config.validate()?;

        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(config.max_buckets)
            .map_err(|_| HeapError::AllocationFailed {
                capacity: config.max_buckets,
            })?;

        Ok(Self {
            buckets,
            max_buckets: config.max_buckets,
            bucket_capacity: config.bucket_capacity,
        })
    }
}

impl<T: Ord> BucketSequence<T> {
    /// Binary search for the bucket holding `element`'s priority
    pub fn find_bucket(&self, element: &T) -> Option<usize> {
        self.buckets
            .binary_search_by(|bucket| bucket.cmp_priority(element))
            .ok()
    }

    /// Queue an element behind its equal-priority peers
    ///
    /// # Returns
    /// - `Ok(Accepted)` if the element was queued
    /// - `Ok(Dropped)` if its priority is new and all bucket slots are taken
    /// - `Err(CapacityExceeded)` if its priority's bucket is full
    /// - `Err(AllocationFailed)` if a new bucket's ring could not be allocated
    pub fn insert(&mut self, element: T) -> HeapResult<InsertOutcome> {
        if let Some(index) = self.find_bucket(&element) {
            let bucket = &mut self.buckets[index];
            return match bucket.enqueue(element) {
                Ok(()) => Ok(InsertOutcome::Accepted),
                Err(_) => {
                    warn!(
                        bucket = index,
                        capacity = bucket.capacity(),
                        "Priority bucket full, rejecting insert"
                    );
                    Err(HeapError::CapacityExceeded {
                        capacity: bucket.capacity(),
                    })
                }
            };
        }

        if self.buckets.len() >= self.max_buckets {
            debug!(
                max_buckets = self.max_buckets,
                "Distinct priority limit reached, dropping insert"
            );
            return Ok(InsertOutcome::Dropped);
        }

        let bucket = PriorityBucket::with_first(element, self.bucket_capacity).map_err(|_| {
            warn!(
                capacity = self.bucket_capacity,
                "Could not allocate priority bucket, rejecting insert"
            );
            HeapError::AllocationFailed {
                capacity: self.bucket_capacity,
            }
        })?;
        self.buckets.push(bucket);
        let position = self.sift_last_into_place();
        trace!(
            bucket = position,
            buckets = self.buckets.len(),
            "Created priority bucket"
        );
        Ok(InsertOutcome::Accepted)
    }

    /// Adjacent-swap the newest bucket leftward until the sequence is sorted
    fn sift_last_into_place(&mut self) -> usize {
        let mut j = self.buckets.len() - 1;
        while j > 0 && self.buckets[j].cmp_bucket(&self.buckets[j - 1]) == Ordering::Less {
            self.buckets.swap(j, j - 1);
            j -= 1;
        }
        j
    }

    /// Remove the oldest element of the minimum priority
    ///
    /// Drops the first bucket when it empties, shifting the rest forward.
    pub fn pop_front(&mut self) -> Option<T> {
        let first = self.buckets.first_mut()?;
        let popped = first.dequeue();
        if first.is_empty() {
            self.buckets.remove(0);
            trace!(buckets = self.buckets.len(), "Destroyed priority bucket");
        }
        popped
    }

    /// Oldest element of the minimum priority
    pub fn peek_min(&self) -> Option<&T> {
        self.buckets.first().and_then(PriorityBucket::front)
    }
}

impl<T> BucketSequence<T> {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Total number of queued elements
    pub fn len(&self) -> usize {
        self.buckets.iter().map(PriorityBucket::len).sum()
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn max_buckets(&self) -> usize {
        self.max_buckets
    }

    #[inline]
    pub fn bucket_capacity(&self) -> usize {
        self.bucket_capacity
    }

    /// Elements in pop order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.buckets.iter().flat_map(|bucket| bucket.iter())
    }
}
