pub mod domain;
pub mod schema;

pub use schema::Schema;
