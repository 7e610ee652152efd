use std::collections::BTreeMap;
use crate::index::Index;

/// Ordered balanced-tree index.
pub struct TreeIndex<K, V>
    where K: Ord, V: Clone
{
    data: BTreeMap<K, V>,
}

impl<K, V> TreeIndex<K, V>
    where K: Ord, V: Clone
{
    pub(crate) fn new() -> Self {
        Self {
            data: BTreeMap::new(),
        }
    }
}

impl<K, V> Index<K, V> for TreeIndex<K, V>
    where K: Ord + Clone, V: Clone
{
    #[inline(always)]
    fn get(&self, key: &K) -> Option<V> {
        self.data.get(key).cloned()
    }

    #[inline(always)]
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.data.insert(key, value)
    }

    #[inline(always)]
    fn count(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    fn size(&self) -> usize {
        self.data.len()
    }

    fn entries(&self) -> Vec<(K, V)> {
        self.data.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}
