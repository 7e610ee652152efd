use std::fmt;
use crate::error::{DbError, DbResult};
use crate::types::Value;

/// Immutable composite key built from the primary-key columns of a tuple.
///
/// Equality, hash and order are positional over the elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyType {
    key: Box<[Value]>,
}

impl KeyType {
    /// Fails with `InvalidArgument` for an absent key: no elements, or a null element.
    pub fn new(key: Vec<Value>) -> DbResult<Self> {
        if key.is_empty() {
            return Err(DbError::invalid_argument("key has no elements"));
        }
        if key.iter().any(Value::is_null) {
            return Err(DbError::invalid_argument("key contains a null element"));
        }
        Ok(Self {
            key: key.into_boxed_slice(),
        })
    }

    #[inline(always)]
    pub fn values(&self) -> &[Value] {
        &self.key
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for v in self.key.iter() {
            write!(f, " {}", v)?;
        }
        f.write_str(" }")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_keys_are_rejected() {
        assert!(matches!(KeyType::new(vec![]), Err(DbError::InvalidArgument(_))));
        assert!(matches!(
            KeyType::new(vec![Value::Integer(1), Value::Null]),
            Err(DbError::InvalidArgument(_))
        ));
    }

    #[test]
    fn equality_is_positional() -> DbResult<()> {
        let a = KeyType::new(vec![Value::from("Star_Wars"), Value::Integer(1977)])?;
        let b = KeyType::new(vec![Value::from("Star_Wars"), Value::Integer(1977)])?;
        let c = KeyType::new(vec![Value::Integer(1977), Value::from("Star_Wars")])?;
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "{ Star_Wars 1977 }");
        Ok(())
    }
}
