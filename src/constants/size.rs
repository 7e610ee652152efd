/// Number of key/value slots in one bucket.
pub const SLOTS: usize = 4;
/// Upper bound on the load factor; one chain is split once it is exceeded.
pub const THRESHOLD: f64 = 1.2;
/// Initial low-resolution modulus (number of home chains in a fresh map).
pub const INITIAL_MOD: usize = 4;
