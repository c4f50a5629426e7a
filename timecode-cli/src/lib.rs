//! Library entry for timecode-cli used by integration tests and embedding.

pub mod commands;
pub mod rate;

// Re-export commands for convenience
pub use commands::*;
pub use rate::{parse_rate, RateArgs};
