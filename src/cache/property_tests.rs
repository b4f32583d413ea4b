//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the store against a simple recency-list model.

use proptest::prelude::*;
use std::time::Duration;

use crate::cache::CacheStore;

// == Test Configuration ==
const TEST_DEFAULT_TTL: Duration = Duration::from_secs(300);

// == Strategies ==
/// Keys drawn from a small alphabet so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "(product|solution|user):[a-d]{1,2}".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: u32 },
    Get { key: String },
    Has { key: String },
    Delete { key: String },
    DeletePattern { prefix: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), any::<u32>()).prop_map(|(key, value)| CacheOp::Set { key, value }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Has { key }),
        1 => key_strategy().prop_map(|key| CacheOp::Delete { key }),
        1 => prop_oneof![Just("product"), Just("solution:"), Just("user:a")]
            .prop_map(|prefix| CacheOp::DeletePattern { prefix: prefix.to_string() }),
    ]
}

// == Model ==
/// Reference model: keys ordered oldest to newest, with their values.
#[derive(Default)]
struct Model {
    order: Vec<(String, u32)>,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl Model {
    fn position(&self, key: &str) -> Option<usize> {
        self.order.iter().position(|(k, _)| k == key)
    }

    fn apply(&mut self, op: &CacheOp, capacity: usize) {
        match op {
            CacheOp::Set { key, value } => {
                match self.position(key) {
                    Some(index) => {
                        self.order.remove(index);
                    }
                    None if self.order.len() >= capacity => {
                        self.order.remove(0);
                        self.evictions += 1;
                    }
                    None => {}
                }
                self.order.push((key.clone(), *value));
            }
            CacheOp::Get { key } => match self.position(key) {
                Some(index) => {
                    let entry = self.order.remove(index);
                    self.order.push(entry);
                    self.hits += 1;
                }
                None => self.misses += 1,
            },
            CacheOp::Has { .. } => {}
            CacheOp::Delete { key } => {
                if let Some(index) = self.position(key) {
                    self.order.remove(index);
                }
            }
            CacheOp::DeletePattern { prefix } => {
                self.order.retain(|(k, _)| !k.starts_with(prefix.as_str()));
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // For any sequence of operations the store agrees with the model on
    // contents, recency order and counters.
    #[test]
    fn prop_store_matches_recency_model(
        capacity in 1usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let mut store = CacheStore::new(capacity, TEST_DEFAULT_TTL);
        let mut model = Model::default();

        for op in &ops {
            match op {
                CacheOp::Set { key, value } => store.set(key.clone(), *value, None),
                CacheOp::Get { key } => {
                    let expected = model.position(key).map(|i| model.order[i].1);
                    prop_assert_eq!(store.get(key).copied(), expected);
                }
                CacheOp::Has { key } => {
                    prop_assert_eq!(store.has(key), model.position(key).is_some());
                }
                CacheOp::Delete { key } => {
                    prop_assert_eq!(store.delete(key), model.position(key).is_some());
                }
                CacheOp::DeletePattern { prefix } => {
                    let expected = model
                        .order
                        .iter()
                        .filter(|(k, _)| k.starts_with(prefix.as_str()))
                        .count();
                    prop_assert_eq!(store.delete_pattern(prefix), expected);
                }
            }
            model.apply(op, capacity);

            prop_assert!(store.len() <= capacity, "size {} exceeds capacity {}", store.len(), capacity);
            let keys: Vec<&str> = store.keys().collect();
            let expected_keys: Vec<&str> = model.order.iter().map(|(k, _)| k.as_str()).collect();
            prop_assert_eq!(keys, expected_keys);
        }

        let stats = store.stats();
        prop_assert_eq!(stats.hits, model.hits);
        prop_assert_eq!(stats.misses, model.misses);
        prop_assert_eq!(stats.evictions, model.evictions);
        prop_assert_eq!(stats.size, store.len());
    }

    // Filling a store of capacity N with N keys, reading the oldest, then
    // adding a new key evicts the second oldest.
    #[test]
    fn prop_read_protects_oldest_key(capacity in 2usize..20) {
        let mut store = CacheStore::new(capacity, TEST_DEFAULT_TTL);
        for i in 0..capacity {
            store.set(format!("key{i}"), i, None);
        }

        prop_assert_eq!(store.get("key0"), Some(&0));
        store.set("fresh", capacity, None);

        prop_assert!(store.has("key0"));
        prop_assert!(!store.has("key1"));
        prop_assert_eq!(store.len(), capacity);
        prop_assert_eq!(store.stats().evictions, 1);
    }

    // Distinct inserts beyond capacity always evict in insertion order.
    #[test]
    fn prop_capacity_enforcement(capacity in 1usize..30, extra in 1usize..30) {
        let mut store = CacheStore::new(capacity, TEST_DEFAULT_TTL);
        let total = capacity + extra;

        for i in 0..total {
            store.set(format!("key{i}"), i, None);
            prop_assert!(store.len() <= capacity);
        }

        let expected: Vec<String> = (extra..total).map(|i| format!("key{i}")).collect();
        let keys: Vec<String> = store.keys().map(str::to_string).collect();
        prop_assert_eq!(keys, expected);
        prop_assert_eq!(store.stats().evictions, extra as u64);
    }
}
