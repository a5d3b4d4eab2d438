/*!
 * Heap Types
 * Insert outcomes, statistics, and the priority/value element wrapper
 */

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Result of an insert that did not fail
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertOutcome {
    /// Element was queued
    Accepted,
    /// Element carried an unseen priority while every bucket slot was taken;
    /// the heap is unchanged
    Dropped,
}

impl InsertOutcome {
    #[inline]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    #[inline]
    pub const fn is_dropped(self) -> bool {
        matches!(self, Self::Dropped)
    }
}

/// Heap statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeapStats {
    pub elements: usize,
    pub buckets: usize,
    pub max_buckets: usize,
    pub bucket_capacity: usize,
}

/// Element ordered by its priority alone
///
/// Values with equal priority compare equal, so they share one bucket and
/// come back out in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prioritized<P, V> {
    pub priority: P,
    pub value: V,
}

impl<P, V> Prioritized<P, V> {
    pub const fn new(priority: P, value: V) -> Self {
        Self { priority, value }
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<P: Ord, V> PartialEq for Prioritized<P, V> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<P: Ord, V> Eq for Prioritized<P, V> {}

impl<P: Ord, V> PartialOrd for Prioritized<P, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Ord, V> Ord for Prioritized<P, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}
