pub const STORE_DIR: &str = "store";
pub const TABLE_EXT: &str = "dbf";
