// Model-based checks of LinHashMap against std's HashMap.
//  - Last write wins: after any sequence of puts, get(k) is the most recent value for k.
//  - put returns exactly what the model held before.
//  - After every put: mod2 == 2 * mod1, isplit < mod1, at most one new chain.
//  - iter() yields every live pair exactly once.
use std::collections::HashMap;
use proptest::prelude::*;
use crate::index::LinHashMap;
use crate::tests::IdentityState;

proptest! {
    #[test]
    fn prop_last_write_wins(ops in proptest::collection::vec((0u32..256, any::<u32>()), 0..600)) {
        let mut map: LinHashMap<u32, u32> = LinHashMap::new();
        let mut model: HashMap<u32, u32> = HashMap::new();

        for (k, v) in ops {
            let before = map.split_state();
            prop_assert_eq!(map.put(k, v), model.insert(k, v));
            prop_assert_eq!(map.get(&k), Some(&v));

            let after = map.split_state();
            prop_assert_eq!(after.mod2, 2 * after.mod1);
            prop_assert!(after.isplit < after.mod1);
            prop_assert!(after.chains() - before.chains() <= 1);
        }

        prop_assert_eq!(map.len(), model.len());
        for (k, v) in model.iter() {
            prop_assert_eq!(map.get(k), Some(v));
        }

        let mut entries: Vec<(u32, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        entries.sort();
        let mut expected: Vec<(u32, u32)> = model.into_iter().collect();
        expected.sort();
        prop_assert_eq!(entries, expected);
    }

    #[test]
    fn prop_round_trip_with_collisions(keys in proptest::collection::hash_set(0i32..64, 1..64)) {
        // Few distinct keys under the identity hash pile up in long chains.
        let mut map = LinHashMap::with_hasher(IdentityState);
        for &k in keys.iter() {
            prop_assert_eq!(map.put(k * 4, k), None);
            prop_assert_eq!(map.get(&(k * 4)), Some(&k));
        }
        for &k in keys.iter() {
            prop_assert_eq!(map.get(&(k * 4)), Some(&k));
        }
        prop_assert_eq!(map.get(&1), None);
    }
}
