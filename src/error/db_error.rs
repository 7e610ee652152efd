use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum DbError {
    /// An argument the operation cannot work with, e.g. an absent (empty or null) key.
    InvalidArgument(String),
    UnknownAttribute(String),
    UnknownDomain(String),
    /// Two tables disagree on arity or domains.
    Incompatible(String),
    TypeMismatch(String),
    Unsupported(String),
    Io(io::Error),
    Serde(serde_json::Error),
}

pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    pub fn invalid_argument(message: &str) -> DbError {
        DbError::InvalidArgument(message.to_string())
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DbError::Io(err) => Some(err),
            DbError::Serde(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for DbError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DbError::InvalidArgument(message) => write!(f, "invalid argument: {}", message),
            DbError::UnknownAttribute(name) => write!(f, "unknown attribute: {}", name),
            DbError::UnknownDomain(name) => write!(f, "unknown domain: {}", name),
            DbError::Incompatible(message) => write!(f, "incompatible tables: {}", message),
            DbError::TypeMismatch(message) => write!(f, "type mismatch: {}", message),
            DbError::Unsupported(message) => write!(f, "unsupported: {}", message),
            DbError::Io(err) => write!(f, "io error: {}", err),
            DbError::Serde(err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl From<io::Error> for DbError {
    fn from(err: io::Error) -> Self {
        DbError::Io(err)
    }
}

impl From<serde_json::Error> for DbError {
    fn from(err: serde_json::Error) -> Self {
        DbError::Serde(err)
    }
}
