/*!
 * Heap Configuration
 *
 * Construction-time capacities for the stable heap
 */

use super::errors::{HeapError, HeapResult};
use super::limits::{
    DEFAULT_BUCKET_CAPACITY, DEFAULT_MAX_BUCKETS, ENV_BUCKET_CAPACITY, ENV_MAX_BUCKETS,
    MAX_BUCKETS, MAX_BUCKET_CAPACITY,
};
use serde::{Deserialize, Serialize};

/// Heap capacity configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeapConfig {
    /// Maximum number of distinct priorities held at once
    pub max_buckets: usize,
    /// Maximum number of live elements per priority
    pub bucket_capacity: usize,
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self {
            max_buckets: DEFAULT_MAX_BUCKETS,
            bucket_capacity: DEFAULT_BUCKET_CAPACITY,
        }
    }
}

impl HeapConfig {
    /// Configuration with explicit capacities
    pub const fn new(max_buckets: usize, bucket_capacity: usize) -> Self {
        Self {
            max_buckets,
            bucket_capacity,
        }
    }

    /// A plain FIFO: one priority, default bucket depth
    pub const fn single_priority() -> Self {
        Self {
            max_buckets: 1,
            bucket_capacity: DEFAULT_BUCKET_CAPACITY,
        }
    }

    pub const fn with_max_buckets(mut self, max_buckets: usize) -> Self {
        self.max_buckets = max_buckets;
        self
    }

    pub const fn with_bucket_capacity(mut self, bucket_capacity: usize) -> Self {
        self.bucket_capacity = bucket_capacity;
        self
    }

    /// Total number of elements the heap can ever hold at once
    pub const fn total_capacity(&self) -> usize {
        self.max_buckets.saturating_mul(self.bucket_capacity)
    }

    /// Check both capacities are within `1..=MAX_*`
    pub fn validate(&self) -> HeapResult<()> {
        if self.max_buckets == 0 {
            return Err(HeapError::InvalidConfig(
                "max_buckets must be at least 1".into(),
            ));
        }
        if self.max_buckets > MAX_BUCKETS {
            return Err(HeapError::InvalidConfig(format!(
                "max_buckets {} exceeds limit {}",
                self.max_buckets, MAX_BUCKETS
            )));
        }
        if self.bucket_capacity == 0 {
            return Err(HeapError::InvalidConfig(
                "bucket_capacity must be at least 1".into(),
            ));
        }
        if self.bucket_capacity > MAX_BUCKET_CAPACITY {
            return Err(HeapError::InvalidConfig(format!(
                "bucket_capacity {} exceeds limit {}",
                self.bucket_capacity, MAX_BUCKET_CAPACITY
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> HeapResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| HeapError::InvalidConfig(format!("malformed JSON config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the environment
    ///
    /// Environment variables:
    /// - STABLE_HEAP_MAX_BUCKETS: distinct priorities (default: 10)
    /// - STABLE_HEAP_BUCKET_CAPACITY: elements per priority (default: 8)
    pub fn from_env() -> HeapResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> HeapResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            max_buckets: parse_var(&lookup, ENV_MAX_BUCKETS)?.unwrap_or(defaults.max_buckets),
            bucket_capacity: parse_var(&lookup, ENV_BUCKET_CAPACITY)?
                .unwrap_or(defaults.bucket_capacity),
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_var<F>(lookup: &F, key: &str) -> HeapResult<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<usize>().map(Some).map_err(|e| {
            HeapError::InvalidConfig(format!("{}={:?} is not a count: {}", key, raw, e))
        }),
    }
}
