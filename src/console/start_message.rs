use crate::info;
use crate::constants::size::{SLOTS, THRESHOLD};

pub fn start_message() {
    let welcome_message = format!("
    ------------------------------------------------------------------
    |{: ^64}|
    |{: ^64}|
    |{: ^64}|
    ------------------------------------------------------------------
    ", "lindb: relational tables over a linear hashing index",
       "Version: 0.1.0",
       format!("slots per bucket: {SLOTS}, split threshold: {THRESHOLD}"),
    );

    info!("{}", welcome_message);
}
