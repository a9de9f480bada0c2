// File: log.rs
// Created: 2026-10-12 14:02:51

// Colored string for log
pub const INFO: &str = "\x1b[1;32m[INFO]\x1b[0m";
pub const FAIL: &str = "\x1b[1;31m[FAIL]\x1b[0m";
pub const WARN: &str = "\x1b[1;33m[WARN]\x1b[0m";
pub const DONE: &str = "\x1b[1;34m[DONE]\x1b[0m";

pub fn log_msg(prefix: &str, msg: &str) -> String { format!("{} {}", prefix, msg) }
pub fn print_log_msg(prefix: &str, msg: &str) { eprintln!("{}", log_msg(prefix, msg)); }

/// Evaluate an expression and report how long it took.
/// With a second argument, the report is only printed when it is true.
#[macro_export]
macro_rules! measure_time {
    ($e:expr, $verbose:expr) => {{
        if $verbose {
            $crate::measure_time!($e)
        } else {
            $e
        }
    }};
    ($e:expr) => {{
        let start = std::time::Instant::now();
        let result = $e;
        $crate::utils::log::print_log_msg(
            $crate::utils::log::INFO,
            &format!("Time elapsed for {}: {:?}", stringify!($e), start.elapsed()),
        );
        result
    }};
}
