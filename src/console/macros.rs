use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering::Relaxed;

static TRACE: AtomicBool = AtomicBool::new(false);

/// Turns the `trace!` output of the index internals on or off.
pub fn set_trace(on: bool) {
    TRACE.store(on, Relaxed);
}

#[inline(always)]
pub fn is_trace() -> bool {
    TRACE.load(Relaxed)
}

#[macro_export]
macro_rules! info {
    ($msg:expr) => {
        let blue = colored::Colorize::blue($msg);
        println!("{}", blue);
    };
    ($msg:expr, $($arg:expr),*) => {
        let blue = colored::Colorize::blue(format!($msg, $($arg),*).as_str());
        println!("{blue}");
    };
}

#[macro_export]
macro_rules! warn {
    ($msg:expr) => {
        let yellow = colored::Colorize::yellow($msg);
        println!("{}", yellow);
    };
    ($msg:expr, $($arg:expr),*) => {
        let yellow = colored::Colorize::yellow(format!($msg, $($arg),*).as_str());
        println!("{yellow}");
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        let green = colored::Colorize::bright_green($msg);
        println!("{}", green);
    };
    ($msg:expr, $($arg:expr),*) => {
        let green = colored::Colorize::bright_green(format!($msg, $($arg),*).as_str());
        println!("{green}");
    };
}

#[macro_export]
macro_rules! error {
    ($msg:expr) => {
        let red = colored::Colorize::red($msg);
        eprintln!("{}", red);
    };
    ($msg:expr, $($arg:expr),*) => {
        let red = colored::Colorize::red(format!($msg, $($arg),*).as_str());
        eprintln!("{red}");
    };
}

/// Like `info!`, but silent unless tracing was switched on with `set_trace`.
#[macro_export]
macro_rules! trace {
    ($msg:expr) => {
        if $crate::console::macros::is_trace() {
            let dimmed = colored::Colorize::dimmed($msg);
            println!("{}", dimmed);
        }
    };
    ($msg:expr, $($arg:expr),*) => {
        if $crate::console::macros::is_trace() {
            let dimmed = colored::Colorize::dimmed(format!($msg, $($arg),*).as_str());
            println!("{dimmed}");
        }
    };
}
