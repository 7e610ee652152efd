use std::fmt;
use std::str::FromStr;
use crate::error::DbError;

/// Point lookup and upsert contract the table layer relies on.
pub trait Index<K, V> {
    fn get(&self, key: &K) -> Option<V>;
    /// Inserts or overwrites.
    ///
    /// Returns the previous value of the key, if any.
    fn put(&mut self, key: K, value: V) -> Option<V>;
    /// Number of stored entries.
    fn count(&self) -> usize;
    /// Logical capacity of the structure.
    fn size(&self) -> usize;
    /// All stored pairs exactly once, in no particular order.
    fn entries(&self) -> Vec<(K, V)>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexType {
    NoMap,
    TreeMap,
    LinHashMap,
    /// Reserved, there is no B+tree implementation.
    BpTreeMap,
}

impl FromStr for IndexType {
    type Err = DbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NoMap" => Ok(IndexType::NoMap),
            "TreeMap" => Ok(IndexType::TreeMap),
            "LinHashMap" => Ok(IndexType::LinHashMap),
            "BpTreeMap" => Ok(IndexType::BpTreeMap),
            _ => Err(DbError::InvalidArgument(format!("unknown index type {s}"))),
        }
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            IndexType::NoMap => "NoMap",
            IndexType::TreeMap => "TreeMap",
            IndexType::LinHashMap => "LinHashMap",
            IndexType::BpTreeMap => "BpTreeMap",
        };
        f.write_str(name)
    }
}
