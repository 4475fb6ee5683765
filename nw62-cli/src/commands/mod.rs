//! Command implementations for the nw62 CLI
//!
//! Each command returns the text to print on stdout so it can be tested
//! without capturing the process output.

pub mod align;
pub mod batch;
pub mod example;
pub mod history;
