pub mod index;
pub mod bucket;
pub mod lin_hash;
pub mod tree;
pub mod any;

pub use index::{Index, IndexType};
pub use lin_hash::LinHashMap;
pub use tree::TreeIndex;
pub use any::AnyIndex;
