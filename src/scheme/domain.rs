use std::fmt;
use serde::{Deserialize, Serialize};
use crate::error::{DbError, DbResult};
use crate::types::Value;

/// The set of values an attribute may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    Byte,
    Short,
    Integer,
    Long,
    Float,
    Double,
    Character,
    String,
}

#[inline(always)]
pub fn domain_from_string(domain: &str) -> DbResult<Domain> {
    match domain {
        "Byte" => Ok(Domain::Byte),
        "Short" => Ok(Domain::Short),
        "Integer" => Ok(Domain::Integer),
        "Long" => Ok(Domain::Long),
        "Float" => Ok(Domain::Float),
        "Double" => Ok(Domain::Double),
        "Character" => Ok(Domain::Character),
        "String" => Ok(Domain::String),
        _ => Err(DbError::UnknownDomain(domain.to_string())),
    }
}

impl Domain {
    /// Whether `value` belongs to this domain. Null belongs to every domain.
    pub fn admits(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (_, Value::Null)
                | (Domain::Byte, Value::Byte(_))
                | (Domain::Short, Value::Short(_))
                | (Domain::Integer, Value::Integer(_))
                | (Domain::Long, Value::Long(_))
                | (Domain::Float, Value::Float(_))
                | (Domain::Double, Value::Double(_))
                | (Domain::Character, Value::Character(_))
                | (Domain::String, Value::Str(_))
        )
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
