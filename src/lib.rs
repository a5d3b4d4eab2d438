/*!
 * Stable Heap Library
 * Bounded priority queue with FIFO order among equal priorities
 */

pub mod core;
pub mod heap;
pub mod monitoring;

// Re-exports
pub use crate::core::{HeapConfig, HeapError, HeapResult};
pub use heap::{
    Drain, Heap, HeapStats, InsertOutcome, Prioritized, SharedStableHeap, StableHeap,
};
pub use monitoring::{init_tracing, try_init_tracing};
