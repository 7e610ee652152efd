mod lin_hash;
mod lin_hash_proptest;

use std::hash::{BuildHasher, Hasher};

/// Hashes an integer key to itself, so tests can pick which chain a key lands in.
#[derive(Clone, Copy, Default)]
pub struct IdentityState;

#[derive(Default)]
pub struct IdentityHasher(u64);

impl Hasher for IdentityHasher {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = self.0.wrapping_mul(31).wrapping_add(b as u64);
        }
    }

    fn write_i32(&mut self, i: i32) {
        self.0 = i as u32 as u64;
    }

    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }
}

impl BuildHasher for IdentityState {
    type Hasher = IdentityHasher;

    fn build_hasher(&self) -> IdentityHasher {
        IdentityHasher::default()
    }
}
