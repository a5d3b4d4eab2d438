/*!
 * Heap Traits
 * Interface definitions for min-priority heaps
 */

use super::types::InsertOutcome;
use crate::core::errors::HeapResult;

/// Min-priority heap operations
pub trait Heap<T: Ord> {
    /// Insert an element
    fn insert(&mut self, element: T) -> HeapResult<InsertOutcome>;

    /// Remove and return the minimum element
    fn delete_min(&mut self) -> Option<T>;

    /// Minimum element without removing it
    fn find_min(&self) -> Option<&T>;

    fn is_empty(&self) -> bool;

    /// Remove every element
    fn make_empty(&mut self);
}
