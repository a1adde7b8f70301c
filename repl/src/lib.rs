//! Pairing narrative library.
//!
//! Replays the pairing walkthrough against an in-memory graph:
//!
//! - `narrative`: the scripted acts and their output
//! - `format`: output formatting utilities

mod format;
mod narrative;

pub use format::format_entity;
pub use narrative::{run_failed_pairing, run_narrative, run_successful_pairing};
