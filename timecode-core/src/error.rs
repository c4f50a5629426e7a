//! Error types for timecode operations

/// Errors that can occur during timecode construction, parsing and arithmetic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimecodeError {
    /// Non-positive or non-finite frame rate, negative seconds or negative frame
    #[error("Invalid fps or duration")]
    InvalidRate,

    /// Frame rates or drop-frame flags differ, or the frame field exceeds the rate
    #[error("Inconsistent fps")]
    InconsistentRate,

    /// The string is not a valid timecode for this rate and drop-frame mode
    #[error("Invalid timecode: {0:?}")]
    InvalidTimecode(String),
}

impl TimecodeError {
    /// Create an invalid timecode error for the offending input
    pub fn invalid_timecode(input: impl Into<String>) -> Self {
        Self::InvalidTimecode(input.into())
    }
}
