pub mod value;
pub mod key_type;
pub mod real;

pub use value::{Tuple, Value};
pub use key_type::KeyType;
