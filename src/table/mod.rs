pub mod in_memory;
pub mod algebra;
pub mod on_disk;

pub use in_memory::Table;
