/*!
 * Heap Limits and Constants
 *
 * Fixed capacities for the stable heap. Both are set at construction and
 * never grow afterwards.
 */

// =============================================================================
// DEFAULT CAPACITIES
// =============================================================================

/// Default number of distinct priorities a heap can hold
/// Inserting an unseen priority beyond this is dropped, not queued
pub const DEFAULT_MAX_BUCKETS: usize = 10;

/// Default number of live elements per priority bucket
/// Overflowing a bucket is a hard `CapacityExceeded` failure
pub const DEFAULT_BUCKET_CAPACITY: usize = 8;

// =============================================================================
// CONFIGURATION CEILINGS
// =============================================================================

/// Largest accepted `max_buckets`
/// New priorities are placed by adjacent swaps, O(n) in bucket count
#[cfg(not(feature = "custom_limits"))]
pub const MAX_BUCKETS: usize = 64 * 1024;

#[cfg(feature = "custom_limits")]
pub const MAX_BUCKETS: usize = 1 << 24;

/// Largest accepted `bucket_capacity`
/// Every bucket preallocates its full ring on creation
#[cfg(not(feature = "custom_limits"))]
pub const MAX_BUCKET_CAPACITY: usize = 64 * 1024;

#[cfg(feature = "custom_limits")]
pub const MAX_BUCKET_CAPACITY: usize = 1 << 24;

// =============================================================================
// ENVIRONMENT
// =============================================================================

/// Environment variable overriding `max_buckets`
pub const ENV_MAX_BUCKETS: &str = "STABLE_HEAP_MAX_BUCKETS";

/// Environment variable overriding `bucket_capacity`
pub const ENV_BUCKET_CAPACITY: &str = "STABLE_HEAP_BUCKET_CAPACITY";

/// Environment variable enabling JSON trace output
pub const ENV_TRACE_JSON: &str = "STABLE_HEAP_TRACE_JSON";
