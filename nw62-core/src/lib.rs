//! Shared primitives for the nw62 alignment workspace.
//!
//! `nw62-core` provides the foundation the other crates build on:
//!
//! - **Error types**: [`Nw62Error`] and [`Result`] for structured error handling
//! - **Traits**: [`Summarizable`] for one-line result summaries, plus [`preview`]

pub mod error;
pub mod traits;

pub use error::{Nw62Error, Result};
pub use traits::*;
