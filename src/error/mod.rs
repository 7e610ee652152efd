pub mod db_error;

pub use db_error::{DbError, DbResult};
