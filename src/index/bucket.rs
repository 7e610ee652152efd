use std::iter;
use crate::constants::size::SLOTS;

/// A fixed-capacity array of key/value slots with an owned link to one overflow bucket.
///
/// The directory holds the head bucket of every chain inline; overflow buckets are boxed
/// and owned by their predecessor, so a chain can neither share buckets nor form a cycle.
pub(crate) struct Bucket<K, V> {
    entries: Vec<(K, V)>,
    pub(crate) next: Option<Box<Bucket<K, V>>>,
}

impl<K, V> Bucket<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::with_capacity(SLOTS),
            next: None,
        }
    }

    #[inline(always)]
    pub(crate) fn is_full(&self) -> bool {
        self.entries.len() >= SLOTS
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends into the next free slot. The caller guarantees that the bucket is not full.
    #[inline(always)]
    pub(crate) fn add(&mut self, key: K, value: V) {
        debug_assert!(!self.is_full(), "add into a full bucket");
        self.entries.push((key, value));
    }

    #[inline(always)]
    pub(crate) fn slots(&self) -> &[(K, V)] {
        &self.entries
    }

    /// Walks this bucket and all of its overflow buckets.
    pub(crate) fn chain(&self) -> impl Iterator<Item = &Bucket<K, V>> {
        iter::successors(Some(self), |bucket| bucket.next.as_deref())
    }

    /// Stores the pair in the first bucket of the chain with a free slot,
    /// linking a new overflow bucket at the tail when every bucket is full.
    pub(crate) fn append(&mut self, key: K, value: V) {
        let mut bucket = self;
        while bucket.is_full() {
            bucket = bucket.next.get_or_insert_with(|| Box::new(Bucket::new())).as_mut();
        }
        bucket.add(key, value);
    }

    /// Takes every pair out of the chain, consuming it.
    pub(crate) fn into_entries(mut self) -> Vec<(K, V)> {
        let mut entries = std::mem::take(&mut self.entries);
        let mut next = self.next.take();
        while let Some(mut bucket) = next {
            entries.append(&mut bucket.entries);
            next = bucket.next.take();
        }
        entries
    }
}

impl<K: Eq, V> Bucket<K, V> {
    #[inline(always)]
    pub(crate) fn find(&self, key: &K) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// First match wins. `accessed` is bumped once per bucket visited.
    pub(crate) fn find_in_chain(&self, key: &K, accessed: &mut usize) -> Option<&V> {
        for bucket in self.chain() {
            *accessed += 1;
            if let Some(value) = bucket.find(key) {
                return Some(value);
            }
        }
        None
    }

    pub(crate) fn find_in_chain_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut bucket = Some(self);
        while let Some(current) = bucket {
            for (k, v) in current.entries.iter_mut() {
                if k == key {
                    return Some(v);
                }
            }
            bucket = current.next.as_deref_mut();
        }
        None
    }
}

// Unlinks the overflow list iteratively; a recursive drop of a long chain could blow the stack.
impl<K, V> Drop for Bucket<K, V> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut bucket) = next {
            next = bucket.next.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_links_overflow_only_when_full() {
        let mut head = Bucket::new();
        for i in 0..SLOTS {
            head.append(i, i * 10);
        }
        assert!(head.is_full());
        assert!(head.next.is_none());

        head.append(SLOTS, SLOTS * 10);
        assert_eq!(head.chain().count(), 2);
        assert_eq!(head.next.as_ref().map(|b| b.len()), Some(1));

        let mut accessed = 0;
        assert_eq!(head.find_in_chain(&SLOTS, &mut accessed), Some(&(SLOTS * 10)));
        assert_eq!(accessed, 2);
    }

    #[test]
    fn find_in_chain_mut_overwrites_in_place() {
        let mut head = Bucket::new();
        for i in 0..(SLOTS * 3) {
            head.append(i, 0);
        }
        if let Some(v) = head.find_in_chain_mut(&(SLOTS * 2 + 1)) {
            *v = 7;
        }
        let mut accessed = 0;
        assert_eq!(head.find_in_chain(&(SLOTS * 2 + 1), &mut accessed), Some(&7));
        assert_eq!(head.find_in_chain(&(SLOTS * 3), &mut accessed), None);
    }

    #[test]
    fn into_entries_drains_the_whole_chain() {
        let mut head = Bucket::new();
        for i in 0..(SLOTS * 2 + 1) {
            head.append(i, ());
        }
        let mut keys: Vec<usize> = head.into_entries().into_iter().map(|(k, _)| k).collect();
        keys.sort();
        assert_eq!(keys, (0..(SLOTS * 2 + 1)).collect::<Vec<_>>());
    }
}
