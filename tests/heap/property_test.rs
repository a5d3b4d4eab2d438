/*!
 * Stable Heap Property Tests
 * Ordering, stability, and round-trip checks over random insert sequences
 */

use proptest::prelude::*;
use stable_heap::{HeapConfig, InsertOutcome, Prioritized, StableHeap};

const PROPTEST_CASES: u32 = 256;

#[derive(Debug, Clone)]
enum Op {
    Insert(u8),
    Pop,
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u8..16).prop_map(Op::Insert),
        3 => Just(Op::Pop),
        1 => Just(Op::Clear),
    ]
}

/// Reference model: a sorted list of (priority, sequence) pairs with the
/// same admission rules
struct Model {
    items: Vec<(u8, usize)>,
    config: HeapConfig,
}

impl Model {
    fn insert(&mut self, priority: u8, seq: usize) -> Result<InsertOutcome, ()> {
        let same = self.items.iter().filter(|(p, _)| *p == priority).count();
        if same > 0 {
            if same >= self.config.bucket_capacity {
                return Err(());
            }
        } else {
            let mut distinct: Vec<u8> = self.items.iter().map(|(p, _)| *p).collect();
            distinct.dedup();
            if distinct.len() >= self.config.max_buckets {
                return Ok(InsertOutcome::Dropped);
            }
        }
        let at = self.items.partition_point(|(p, _)| *p <= priority);
        self.items.insert(at, (priority, seq));
        Ok(InsertOutcome::Accepted)
    }

    fn pop(&mut self) -> Option<(u8, usize)> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn prop_pops_sorted_and_stable(priorities in prop::collection::vec(0u8..8, 0..64)) {
        // Large enough that nothing is rejected
        let mut heap = StableHeap::with_capacity(8, 64).unwrap();
        for (seq, priority) in priorities.iter().enumerate() {
            prop_assert!(heap.insert(Prioritized::new(*priority, seq)).unwrap().is_accepted());
        }
        prop_assert_eq!(heap.len(), priorities.len());

        let popped: Vec<(u8, usize)> = heap.drain().map(|p| (p.priority, p.value)).collect();
        let mut expected: Vec<(u8, usize)> = priorities.iter().copied().zip(0..).collect();
        expected.sort_by_key(|(priority, _)| *priority);

        prop_assert_eq!(popped, expected);
        prop_assert!(heap.is_empty());
    }

    #[test]
    fn prop_matches_model(
        max_buckets in 1usize..6,
        bucket_capacity in 1usize..5,
        ops in prop::collection::vec(op_strategy(), 1..200),
    ) {
        let config = HeapConfig::new(max_buckets, bucket_capacity);
        let mut heap = StableHeap::with_config(config).unwrap();
        let mut model = Model { items: Vec::new(), config };

        for (seq, op) in ops.into_iter().enumerate() {
            match op {
                Op::Insert(priority) => {
                    let actual = heap.insert(Prioritized::new(priority, seq));
                    let expected = model.insert(priority, seq);
                    match expected {
                        Ok(outcome) => prop_assert_eq!(actual, Ok(outcome)),
                        Err(()) => prop_assert!(actual.is_err()),
                    }
                }
                Op::Pop => {
                    let actual = heap.pop_front().map(|p| (p.priority, p.value));
                    prop_assert_eq!(actual, model.pop());
                }
                Op::Clear => {
                    heap.clear();
                    model.items.clear();
                }
            }

            prop_assert_eq!(heap.len(), model.items.len());
            prop_assert_eq!(heap.is_empty(), model.items.is_empty());
            prop_assert_eq!(
                heap.peek_min().map(|p| (p.priority, p.value)),
                model.items.first().copied()
            );
            prop_assert!(heap.bucket_count() <= max_buckets);
        }
    }
}
