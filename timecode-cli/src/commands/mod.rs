//! Subcommand implementations

pub mod arith;
pub mod batch;
pub mod format;
pub mod parse;

use serde::{Deserialize, Serialize};
use timecode_core::Timecode;

/// JSON view of a timecode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Absolute frame number
    pub frame: u64,
    /// `HH:MM:SS:FF` or `HH:MM:SS;FF`
    pub timecode: String,
    /// Milliseconds at the start of the frame
    pub milliseconds: u64,
}

impl From<&Timecode> for Report {
    fn from(tc: &Timecode) -> Self {
        Report {
            frame: tc.frame(),
            timecode: tc.to_string(),
            milliseconds: tc.milliseconds(),
        }
    }
}
