/*!
 * Heap Module
 *
 * Stable bounded priority queue:
 * - Priority buckets: fixed-capacity FIFO rings, one per distinct priority
 * - Bucket sequence: buckets sorted ascending, binary-searched on insert
 * - Shared heap: one read/write lock around the whole structure
 *
 * # Ordering
 *
 * Smallest priority pops first. Equal priorities pop in insertion order,
 * which a plain binary heap does not guarantee.
 */

mod bucket;
mod sequence;
pub mod shared;
pub mod stable_heap;
pub mod traits;
pub mod types;

pub use shared::SharedStableHeap;
pub use stable_heap::{Drain, StableHeap};
pub use traits::Heap;
pub use types::{HeapStats, InsertOutcome, Prioritized};
