pub mod macros;
pub mod start_message;

pub use macros::set_trace;
pub use start_message::start_message;
