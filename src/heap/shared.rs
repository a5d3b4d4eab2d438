/*!
 * Shared Stable Heap
 * Thread-safe handle around a single stable heap
 */

use super::stable_heap::StableHeap;
use super::types::{HeapStats, InsertOutcome};
use crate::core::config::HeapConfig;
use crate::core::errors::HeapResult;
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to one stable heap guarded by one lock
///
/// # Performance
/// - RwLock over the whole structure: mutations are exclusive
/// - Read-only calls (`peek_min`, `is_empty`, `len`, `stats`) run concurrently
///   while no mutation is in flight
#[derive(Debug)]
pub struct SharedStableHeap<T> {
    inner: Arc<RwLock<StableHeap<T>>>,
}

impl<T> Clone for SharedStableHeap<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Ord> SharedStableHeap<T> {
    pub fn new() -> Self {
        Self::from_heap(StableHeap::new())
    }

    pub fn with_config(config: HeapConfig) -> HeapResult<Self> {
        Ok(Self::from_heap(StableHeap::with_config(config)?))
    }

    pub fn from_heap(heap: StableHeap<T>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(heap)),
        }
    }

    pub fn insert(&self, element: T) -> HeapResult<InsertOutcome> {
        self.inner.write().insert(element)
    }

    pub fn pop_front(&self) -> Option<T> {
        self.inner.write().pop_front()
    }

    /// Clone of the element `pop_front` would return next
    pub fn peek_min(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.read().peek_min().cloned()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn stats(&self) -> HeapStats {
        self.inner.read().stats()
    }
}

impl<T: Ord> Default for SharedStableHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
