use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};
use crate::types::real;

/// A scalar attribute value.
///
/// Equality, hashing and ordering are structural; reals compare by bit pattern for
/// equality and by `total_cmp` for ordering, so a `Value` can be used as a map key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    Null,
    Byte(i8),
    Short(i16),
    Integer(i32),
    Long(i64),
    Float(
        #[serde(serialize_with = "real::serialize_f32", deserialize_with = "real::deserialize_f32")]
        f32,
    ),
    Double(
        #[serde(serialize_with = "real::serialize_f64", deserialize_with = "real::deserialize_f64")]
        f64,
    ),
    Character(char),
    Str(String),
}

impl Value {
    #[inline(always)]
    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Byte(_) => 1,
            Value::Short(_) => 2,
            Value::Integer(_) => 3,
            Value::Long(_) => 4,
            Value::Float(_) => 5,
            Value::Double(_) => 6,
            Value::Character(_) => 7,
            Value::Str(_) => 8,
        }
    }

    #[inline(always)]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Byte(a), Value::Byte(b)) => a == b,
            (Value::Short(a), Value::Short(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Long(a), Value::Long(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Double(a), Value::Double(b)) => a.to_bits() == b.to_bits(),
            (Value::Character(a), Value::Character(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.rank());
        match self {
            Value::Null => {}
            Value::Byte(v) => v.hash(state),
            Value::Short(v) => v.hash(state),
            Value::Integer(v) => v.hash(state),
            Value::Long(v) => v.hash(state),
            Value::Float(v) => v.to_bits().hash(state),
            Value::Double(v) => v.to_bits().hash(state),
            Value::Character(v) => v.hash(state),
            Value::Str(v) => v.hash(state),
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Byte(a), Value::Byte(b)) => a.cmp(b),
            (Value::Short(a), Value::Short(b)) => a.cmp(b),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Long(a), Value::Long(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Double(a), Value::Double(b)) => a.total_cmp(b),
            (Value::Character(a), Value::Character(b)) => a.cmp(b),
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Byte(v) => write!(f, "{}", v),
            Value::Short(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", v),
            Value::Character(v) => write!(f, "{}", v),
            Value::Str(v) => f.write_str(v),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<char> for Value {
    fn from(v: char) -> Self {
        Value::Character(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

/// One row of a table.
pub type Tuple = Vec<Value>;

/// Builds a `Tuple` from values convertible into `Value`.
#[macro_export]
macro_rules! tuple {
    ($($v:expr),* $(,)?) => {
        vec![$($crate::types::Value::from($v)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reals_are_usable_as_keys() {
        assert_eq!(Value::Double(1.5), Value::Double(1.5));
        assert_ne!(Value::Double(0.0), Value::Double(-0.0));
        assert_eq!(Value::Double(f64::NAN), Value::Double(f64::NAN));
        assert!(Value::Double(-1.0) < Value::Double(2.0));
    }

    #[test]
    fn non_finite_reals_survive_json() {
        let values = vec![
            Value::Double(f64::NAN),
            Value::Double(f64::INFINITY),
            Value::Double(f64::NEG_INFINITY),
            Value::Float(f32::NAN),
            Value::Float(f32::NEG_INFINITY),
            Value::Float(1.25),
        ];
        let json = serde_json::to_string(&values).unwrap();
        let back: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn different_kinds_never_compare_equal() {
        assert_ne!(Value::Integer(1), Value::Long(1));
        assert!(Value::Null < Value::Integer(i32::MIN));
        assert!(Value::Integer(i32::MAX) < Value::Str(String::new()));
    }
}
