use std::cell::Cell;
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};
use std::mem;
use ahash::RandomState;
use crate::constants::size::{INITIAL_MOD, SLOTS, THRESHOLD};
use crate::index::bucket::Bucket;
use crate::index::Index;
use crate::trace;

/// Fixed seeds, so that the address of a key does not change between runs.
const SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];

/// Growth state of a linear hashing table.
///
/// Invariants: `mod2 == 2 * mod1` and `isplit < mod1`. Chains `0..isplit` have already been
/// split during the current pass and are addressed with `mod2`, the rest with `mod1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitState {
    pub mod1: usize,
    pub mod2: usize,
    pub isplit: usize,
    pub key_count: usize,
}

impl SplitState {
    pub fn new(initial_mod: usize) -> Self {
        Self {
            mod1: initial_mod,
            mod2: 2 * initial_mod,
            isplit: 0,
            key_count: 0,
        }
    }

    /// Number of chains currently in the directory.
    #[inline(always)]
    pub fn chains(&self) -> usize {
        self.mod1 + self.isplit
    }

    #[inline(always)]
    pub fn load_factor(&self) -> f64 {
        self.key_count as f64 / (SLOTS * self.chains()) as f64
    }

    /// Low resolution hash function.
    #[inline(always)]
    pub fn low(&self, hash: u64) -> usize {
        (hash % self.mod1 as u64) as usize
    }

    /// High resolution hash function.
    #[inline(always)]
    pub fn high(&self, hash: u64) -> usize {
        (hash % self.mod2 as u64) as usize
    }

    /// Home chain of a key with the given hash.
    #[inline(always)]
    pub fn resolve_address(&self, hash: u64) -> usize {
        let low = self.low(hash);
        if low < self.isplit {
            self.high(hash)
        } else {
            low
        }
    }

    /// Moves the split pointer forward, doubling the moduli when a pass completes.
    fn advance(&mut self) {
        if self.isplit + 1 == self.mod1 {
            self.mod1 *= 2;
            self.mod2 = 2 * self.mod1;
            self.isplit = 0;
        } else {
            self.isplit += 1;
        }
    }

    fn check(&self, chains: usize) {
        assert_eq!(self.mod2, 2 * self.mod1, "linear hashing: mod2 must be twice mod1");
        assert!(self.isplit < self.mod1, "linear hashing: split pointer {} out of range 0..{}", self.isplit, self.mod1);
        assert_eq!(chains, self.chains(), "linear hashing: directory length out of sync");
    }
}

/// A snapshot of the map internals, for diagnostics and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinHashStats {
    pub mod1: usize,
    pub mod2: usize,
    pub isplit: usize,
    pub key_count: usize,
    pub chains: usize,
    /// Home buckets plus overflow buckets.
    pub buckets: usize,
    /// Buckets visited by `get` so far.
    pub buckets_accessed: usize,
}

/// Hash map based on linear hashing.
///
/// The directory grows by exactly one chain per split and at most one split happens per
/// insert, so no insert ever pays for rehashing the whole table.
///
/// Not thread safe: callers must serialize access themselves.
pub struct LinHashMap<K, V, S = RandomState> {
    directory: Vec<Bucket<K, V>>,
    state: SplitState,
    hasher: S,
    buckets_accessed: Cell<usize>,
}

impl<K, V> LinHashMap<K, V>
    where K: Eq + Hash
{
    pub fn new() -> Self {
        Self::with_hasher(RandomState::with_seeds(SEEDS[0], SEEDS[1], SEEDS[2], SEEDS[3]))
    }
}

impl<K, V> Default for LinHashMap<K, V>
    where K: Eq + Hash
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> LinHashMap<K, V, S>
    where K: Eq + Hash, S: BuildHasher
{
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_moduli_and_hasher(INITIAL_MOD, hasher)
    }

    /// Creates a map with `initial_mod` empty home chains.
    pub fn with_moduli_and_hasher(initial_mod: usize, hasher: S) -> Self {
        assert!(initial_mod > 0, "linear hashing needs at least one home chain");
        let mut directory = Vec::with_capacity(initial_mod);
        for _ in 0..initial_mod {
            directory.push(Bucket::new());
        }
        Self {
            directory,
            state: SplitState::new(initial_mod),
            hasher,
            buckets_accessed: Cell::new(0),
        }
    }

    #[inline(always)]
    fn hash(&self, key: &K) -> u64 {
        self.hasher.hash_one(key)
    }

    /// Chain index a key currently lives at. Pure in the key and the split state.
    #[inline(always)]
    pub fn resolve_address(&self, key: &K) -> usize {
        self.state.resolve_address(self.hash(key))
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let address = self.resolve_address(key);
        let mut accessed = 0;
        let result = self.directory[address].find_in_chain(key, &mut accessed);
        self.buckets_accessed.set(self.buckets_accessed.get() + accessed);
        result
    }

    /// Inserts or overwrites. Returns the previous value of the key, if any.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash(&key);
        let address = self.state.resolve_address(hash);
        trace!("LinHashMap.put: hash = {}, address = {}", hash, address);

        let chain = &mut self.directory[address];
        if let Some(old) = chain.find_in_chain_mut(&key) {
            return Some(mem::replace(old, value));
        }
        chain.append(key, value);
        self.state.key_count += 1;

        let load_factor = self.state.load_factor();
        trace!("put: load factor = {}", load_factor);
        if load_factor > THRESHOLD {
            split(&mut self.directory, &mut self.state, &self.hasher);
        }
        None
    }

    /// Number of stored entries.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.state.key_count
    }

    /// Logical capacity: `SLOTS` times the number of home chains.
    #[inline(always)]
    pub fn size(&self) -> usize {
        SLOTS * self.state.chains()
    }

    #[inline(always)]
    pub fn split_state(&self) -> SplitState {
        self.state
    }

    /// Every stored pair exactly once, chain by chain.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.directory
            .iter()
            .flat_map(|head| head.chain())
            .flat_map(|bucket| bucket.slots().iter())
            .map(|(k, v)| (k, v))
    }

    pub fn stats(&self) -> LinHashStats {
        LinHashStats {
            mod1: self.state.mod1,
            mod2: self.state.mod2,
            isplit: self.state.isplit,
            key_count: self.state.key_count,
            chains: self.directory.len(),
            buckets: self.directory.iter().map(|head| head.chain().count()).sum(),
            buckets_accessed: self.buckets_accessed.get(),
        }
    }

    /// Average number of buckets `get` touched over `lookups` lookups.
    pub fn average_buckets_accessed(&self, lookups: usize) -> f64 {
        if lookups == 0 {
            return 0.0;
        }
        self.buckets_accessed.get() as f64 / lookups as f64
    }
}

impl<K, V, S> LinHashMap<K, V, S>
    where K: Eq + Hash + Display, S: BuildHasher
{
    /// Dumps every chain to stdout.
    pub fn print(&self) {
        println!("LinHashMap");
        println!("-------------------------------------------");
        for (i, head) in self.directory.iter().enumerate() {
            let buckets: Vec<String> = head
                .chain()
                .map(|bucket| {
                    let keys: String = bucket.slots().iter().map(|(k, _)| format!("{k} . ")).collect();
                    format!("[ {keys}]")
                })
                .collect();
            println!("Bucket [ {} ] = {}", i, buckets.join(" \t --> "));
        }
        println!("-------------------------------------------");
    }
}

/// Splits chain `isplit` into itself and a new chain `mod1 + isplit` using the high resolution
/// hash, then advances the split pointer.
fn split<K, V, S>(directory: &mut Vec<Bucket<K, V>>, state: &mut SplitState, hasher: &S)
    where K: Eq + Hash, S: BuildHasher
{
    let isplit = state.isplit;
    let image = state.mod1 + isplit;
    trace!("split: bucket chain {} -> {}", isplit, image);

    directory.push(Bucket::new());
    let old = mem::replace(&mut directory[isplit], Bucket::new());
    for (key, value) in old.into_entries() {
        let address = state.high(hasher.hash_one(&key));
        debug_assert!(address == isplit || address == image, "split moved a key outside its pair of chains");
        directory[address].append(key, value);
    }

    state.advance();
    state.check(directory.len());
}

impl<K, V, S> Index<K, V> for LinHashMap<K, V, S>
    where K: Eq + Hash + Clone, V: Clone, S: BuildHasher
{
    #[inline(always)]
    fn get(&self, key: &K) -> Option<V> {
        LinHashMap::get(self, key).cloned()
    }

    #[inline(always)]
    fn put(&mut self, key: K, value: V) -> Option<V> {
        LinHashMap::put(self, key, value)
    }

    #[inline(always)]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn size(&self) -> usize {
        LinHashMap::size(self)
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}
