/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable heap errors with serialization support
///
/// An empty heap is not an error: `pop_front` and `peek_min` return `None`.
/// A new priority arriving while every bucket slot is taken is not an error
/// either: `insert` reports it as `InsertOutcome::Dropped`.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum HeapError {
    #[error("Priority bucket full: {capacity} elements already queued at this priority")]
    #[diagnostic(
        code(heap::capacity_exceeded),
        help("Pop elements of this priority first, or construct the heap with a larger bucket_capacity.")
    )]
    CapacityExceeded { capacity: usize },

    #[error("Invalid heap configuration: {0}")]
    #[diagnostic(
        code(heap::invalid_config),
        help("max_buckets and bucket_capacity must both be at least 1 and within the compiled limits.")
    )]
    InvalidConfig(String),

    #[error("Could not allocate room for {capacity} elements")]
    #[diagnostic(
        code(heap::allocation_failed),
        help("The configured capacity is larger than the allocator can provide. Lower it.")
    )]
    AllocationFailed { capacity: usize },
}

/// Result type for heap operations
pub type HeapResult<T> = Result<T, HeapError>;
