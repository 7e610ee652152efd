use std::collections::HashSet;
use crate::constants::size::{INITIAL_MOD, SLOTS};
use crate::error::DbError;
use crate::index::lin_hash::SplitState;
use crate::index::{AnyIndex, Index, IndexType, LinHashMap};
use crate::tests::IdentityState;

fn identity_map() -> LinHashMap<i32, i32, IdentityState> {
    LinHashMap::with_hasher(IdentityState)
}

fn assert_invariants(state: SplitState) {
    assert_eq!(state.mod2, 2 * state.mod1);
    assert!(state.isplit < state.mod1);
}

#[test]
fn odd_keys_map_to_their_squares() {
    let mut map = identity_map();
    for k in (1..=39).step_by(2) {
        assert_eq!(map.put(k, k * k), None);
        assert_invariants(map.split_state());
    }

    assert_eq!(map.len(), 20);
    for k in (1..=39).step_by(2) {
        assert_eq!(map.get(&k), Some(&(k * k)), "key {k}");
    }
    assert_eq!(map.get(&2), None);
    assert_eq!(map.get(&0), None);
    assert_eq!(map.get(&40), None);
}

#[test]
fn keys_sharing_a_home_chain_spill_into_overflow() {
    let mut map = identity_map();
    let keys = [0, 4, 8, 12, 16];
    for &k in keys.iter() {
        assert_eq!(map.resolve_address(&k), 0);
        map.put(k, -k);
    }

    let stats = map.stats();
    assert_eq!(stats.chains, INITIAL_MOD);
    assert_eq!(stats.buckets, INITIAL_MOD + 1);
    for &k in keys.iter() {
        assert_eq!(map.get(&k), Some(&-k));
    }
}

#[test]
fn colliding_keys_with_the_default_hasher() {
    let mut map: LinHashMap<u64, u64> = LinHashMap::new();
    let keys: Vec<u64> = (0..).filter(|k| map.resolve_address(k) == 0).take(5).collect();
    for &k in keys.iter() {
        map.put(k, k + 1);
    }

    assert_eq!(map.stats().buckets, INITIAL_MOD + 1);
    for &k in keys.iter() {
        assert_eq!(map.get(&k), Some(&(k + 1)));
    }
}

#[test]
fn put_overwrites_and_returns_the_previous_value() {
    let mut map = identity_map();
    assert_eq!(map.put(7, 1), None);
    assert_eq!(map.put(7, 2), Some(1));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&7), Some(&2));
}

#[test]
fn split_happens_once_the_threshold_is_exceeded() {
    let mut map = identity_map();
    // 19 keys over 4 chains of 4 slots is a load factor of 1.1875.
    for k in 0..19 {
        map.put(k, k);
    }
    assert_eq!(map.split_state().isplit, 0);
    assert_eq!(map.stats().chains, 4);

    map.put(19, 19);
    let state = map.split_state();
    assert_eq!(state.isplit, 1);
    assert_eq!(state.mod1, 4);
    assert_eq!(map.stats().chains, 5);
    assert_eq!(map.size(), SLOTS * 5);
}

#[test]
fn lookups_follow_keys_moved_by_a_split() {
    let mut map = identity_map();
    for k in 0..20 {
        map.put(k, k * 10);
    }
    // Chain 0 was split: key 4 moved to chain 4 while low resolution still says chain 0.
    let state = map.split_state();
    assert_eq!(state.isplit, 1);
    assert_eq!(state.low(4), 0);
    assert_eq!(map.resolve_address(&4), 4);
    assert_eq!(map.get(&4), Some(&40));
    assert_eq!(map.resolve_address(&8), 0);
    assert_eq!(map.get(&8), Some(&80));

    // Keys landing on an already split chain after the split.
    map.put(20, 200);
    map.put(28, 280);
    assert_eq!(map.get(&20), Some(&200));
    assert_eq!(map.get(&28), Some(&280));
}

#[test]
fn every_key_stays_reachable_while_the_table_grows() {
    let mut map = identity_map();
    for k in 0..300 {
        map.put(k, k + 1);
        for j in (0..=k).step_by(7) {
            assert_eq!(map.get(&j), Some(&(j + 1)), "key {j} lost after inserting {k}");
        }
    }
    for k in 0..300 {
        assert_eq!(map.get(&k), Some(&(k + 1)));
    }
}

#[test]
fn full_pass_doubles_mod1() {
    let mut map = identity_map();
    let start = map.split_state();
    let mut k = 0;
    let mut prev = start;
    loop {
        map.put(k, k);
        k += 1;
        let state = map.split_state();
        assert_invariants(state);
        // At most one split per insert.
        assert!(state.chains() - prev.chains() <= 1);
        assert_eq!(map.stats().chains, state.chains());
        prev = state;
        if state.mod1 != start.mod1 {
            break;
        }
    }

    let state = map.split_state();
    assert_eq!(state.mod1, 2 * start.mod1);
    assert_eq!(state.mod2, 2 * state.mod1);
    assert_eq!(state.isplit, 0);
    assert_eq!(map.stats().chains, state.mod1);
}

#[test]
fn entries_survive_several_splits() {
    let mut map = identity_map();
    for k in 0..200 {
        map.put(k, -k);
    }
    let state = map.split_state();
    assert!(state.chains() >= INITIAL_MOD + 2);

    let mut keys: Vec<i32> = map.iter().map(|(k, v)| {
        assert_eq!(*v, -*k);
        *k
    }).collect();
    keys.sort();
    assert_eq!(keys, (0..200).collect::<Vec<_>>());

    let entries = Index::entries(&map);
    let unique: HashSet<i32> = entries.iter().map(|(k, _)| *k).collect();
    assert_eq!(entries.len(), 200);
    assert_eq!(unique.len(), 200);
}

#[test]
fn resolve_address_is_deterministic() {
    let mut a: LinHashMap<String, usize> = LinHashMap::new();
    let mut b: LinHashMap<String, usize> = LinHashMap::new();
    for i in 0..50 {
        a.put(format!("key{i}"), i);
        b.put(format!("key{i}"), i);
    }
    assert_eq!(a.split_state(), b.split_state());
    for i in 0..80 {
        let key = format!("key{i}");
        assert_eq!(a.resolve_address(&key), a.resolve_address(&key));
        assert_eq!(a.resolve_address(&key), b.resolve_address(&key));
    }
}

#[test]
fn get_counts_buckets_accessed() {
    let mut map = identity_map();
    for k in [0, 4, 8, 12, 16] {
        map.put(k, k);
    }
    map.get(&0);
    assert_eq!(map.stats().buckets_accessed, 1);
    map.get(&16);
    assert_eq!(map.stats().buckets_accessed, 3);
    map.get(&1);
    assert_eq!(map.stats().buckets_accessed, 4);
    assert_eq!(map.average_buckets_accessed(4), 1.0);
}

#[test]
fn index_variants() {
    assert!(matches!(AnyIndex::<i32, i32>::new(IndexType::BpTreeMap), Err(DbError::Unsupported(_))));

    let mut none: AnyIndex<i32, i32> = AnyIndex::new(IndexType::NoMap).unwrap();
    assert_eq!(none.put(1, 1), None);
    assert_eq!(none.get(&1), None);

    for index_type in [IndexType::TreeMap, IndexType::LinHashMap] {
        let mut index: AnyIndex<i32, i32> = AnyIndex::new(index_type).unwrap();
        assert_eq!(index.index_type(), index_type);
        for k in 0..100 {
            assert_eq!(index.put(k, k), None);
        }
        assert_eq!(index.put(5, 50), Some(5));
        assert_eq!(index.get(&5), Some(50));
        assert_eq!(index.count(), 100);
        assert_eq!(index.entries().len(), 100);
    }
}

#[test]
fn index_type_names() {
    for name in ["NoMap", "TreeMap", "LinHashMap", "BpTreeMap"] {
        let index_type: IndexType = name.parse().unwrap();
        assert_eq!(index_type.to_string(), name);
    }
    assert!("Hash".parse::<IndexType>().is_err());
}
