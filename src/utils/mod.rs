//! Common utilities for the library.
//!

pub mod calculator;
pub mod formatter;
pub mod log;
