use std::hash::Hash;
use crate::error::{DbError, DbResult};
use crate::index::{Index, IndexType, LinHashMap, TreeIndex};

/// An index whose variant is picked at runtime.
pub enum AnyIndex<K, V>
    where K: Eq + Ord + Hash + Clone, V: Clone
{
    /// Stores nothing; lookups always miss.
    NoMap,
    TreeMap(TreeIndex<K, V>),
    LinHashMap(LinHashMap<K, V>),
}

impl<K, V> AnyIndex<K, V>
    where K: Eq + Ord + Hash + Clone, V: Clone
{
    pub fn new(index_type: IndexType) -> DbResult<Self> {
        match index_type {
            IndexType::NoMap => Ok(AnyIndex::NoMap),
            IndexType::TreeMap => Ok(AnyIndex::TreeMap(TreeIndex::new())),
            IndexType::LinHashMap => Ok(AnyIndex::LinHashMap(LinHashMap::new())),
            IndexType::BpTreeMap => Err(DbError::Unsupported("B+tree index is not implemented".to_string())),
        }
    }

    pub fn index_type(&self) -> IndexType {
        match self {
            AnyIndex::NoMap => IndexType::NoMap,
            AnyIndex::TreeMap(_) => IndexType::TreeMap,
            AnyIndex::LinHashMap(_) => IndexType::LinHashMap,
        }
    }
}

impl<K, V> Index<K, V> for AnyIndex<K, V>
    where K: Eq + Ord + Hash + Clone, V: Clone
{
    fn get(&self, key: &K) -> Option<V> {
        match self {
            AnyIndex::NoMap => None,
            AnyIndex::TreeMap(index) => index.get(key),
            AnyIndex::LinHashMap(index) => Index::get(index, key),
        }
    }

    fn put(&mut self, key: K, value: V) -> Option<V> {
        match self {
            AnyIndex::NoMap => None,
            AnyIndex::TreeMap(index) => index.put(key, value),
            AnyIndex::LinHashMap(index) => index.put(key, value),
        }
    }

    fn count(&self) -> usize {
        match self {
            AnyIndex::NoMap => 0,
            AnyIndex::TreeMap(index) => index.count(),
            AnyIndex::LinHashMap(index) => index.count(),
        }
    }

    fn size(&self) -> usize {
        match self {
            AnyIndex::NoMap => 0,
            AnyIndex::TreeMap(index) => index.size(),
            AnyIndex::LinHashMap(index) => index.size(),
        }
    }

    fn entries(&self) -> Vec<(K, V)> {
        match self {
            AnyIndex::NoMap => Vec::new(),
            AnyIndex::TreeMap(index) => index.entries(),
            AnyIndex::LinHashMap(index) => index.entries(),
        }
    }
}
