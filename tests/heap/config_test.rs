/*!
 * Heap Configuration Tests
 * Construction from presets, JSON, and validation failures
 */

use pretty_assertions::assert_eq;
use stable_heap::{HeapConfig, HeapError, SharedStableHeap, StableHeap};

#[test]
fn test_default_heap_config() {
    let heap: StableHeap<u32> = StableHeap::default();
    assert_eq!(*heap.config(), HeapConfig::new(10, 8));
}

#[test]
fn test_heap_from_json_config() {
    let config = HeapConfig::from_json(r#"{"max_buckets": 3, "bucket_capacity": 1}"#).unwrap();
    let mut heap = StableHeap::with_config(config).unwrap();

    for priority in [3, 1, 2] {
        assert!(heap.insert(priority).unwrap().is_accepted());
    }
    assert!(heap.insert(4).unwrap().is_dropped());
    assert!(heap.insert(1).is_err());

    let stats = heap.stats();
    assert_eq!(stats.elements, 3);
    assert_eq!(stats.max_buckets, 3);
    assert_eq!(stats.bucket_capacity, 1);
}

#[test]
fn test_invalid_configs_rejected() {
    assert!(matches!(
        StableHeap::<u32>::with_config(HeapConfig::new(0, 1)),
        Err(HeapError::InvalidConfig(_))
    ));
    assert!(matches!(
        SharedStableHeap::<u32>::with_config(HeapConfig::new(1, 0)),
        Err(HeapError::InvalidConfig(_))
    ));
}

#[test]
fn test_stats_serialize() {
    let mut heap = StableHeap::with_capacity(2, 2).unwrap();
    assert!(heap.insert(1u8).unwrap().is_accepted());

    let json = serde_json::to_value(heap.stats()).unwrap();
    assert_eq!(json["elements"], 1);
    assert_eq!(json["buckets"], 1);
}

#[test]
#[cfg(feature = "custom_limits")]
fn test_largest_custom_limits_never_panic() {
    use stable_heap::core::limits::{MAX_BUCKETS, MAX_BUCKET_CAPACITY};
    use stable_heap::InsertOutcome;

    let config = HeapConfig::new(MAX_BUCKETS, 1);
    assert!(config.validate().is_ok());
    match StableHeap::<u32>::with_config(config) {
        Ok(heap) => assert_eq!(heap.config().max_buckets, MAX_BUCKETS),
        Err(err) => assert_eq!(err, HeapError::AllocationFailed { capacity: MAX_BUCKETS }),
    }

    let config = HeapConfig::new(1, MAX_BUCKET_CAPACITY);
    let mut heap = StableHeap::<u64>::with_config(config).unwrap();
    match heap.insert(1) {
        Ok(outcome) => assert_eq!(outcome, InsertOutcome::Accepted),
        Err(err) => assert_eq!(
            err,
            HeapError::AllocationFailed {
                capacity: MAX_BUCKET_CAPACITY
            }
        ),
    }
}
