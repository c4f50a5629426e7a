//! Core timecode type and constructors

use crate::constants::{FPS_29_97, RANDOM_RANGE_SECONDS};
use crate::decimal;
use crate::error::TimecodeError;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[cfg(feature = "logging")]
use tracing::debug;

/// SMPTE timecode anchored on an absolute frame count.
///
/// The first frame is frame 0. Drop-frame counting only applies at
/// [`FPS_29_97`](crate::constants::FPS_29_97).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawTimecode")]
pub struct Timecode {
    /// Frames per second
    pub(crate) fps: f64,

    /// Zero-based absolute frame count
    pub(crate) frame: u64,

    /// Display and parse with drop-frame numbering
    pub(crate) drop_frame: bool,
}

/// Unchecked serialized form, validated on the way into `Timecode`
#[derive(Deserialize)]
struct RawTimecode {
    fps: f64,
    frame: u64,
    drop_frame: bool,
}

impl TryFrom<RawTimecode> for Timecode {
    type Error = TimecodeError;

    fn try_from(raw: RawTimecode) -> Result<Self, Self::Error> {
        check_rate(raw.fps)?;
        if raw.drop_frame && raw.fps.to_bits() != FPS_29_97.to_bits() {
            return Err(TimecodeError::InvalidRate);
        }

        Ok(Self {
            fps: raw.fps,
            frame: raw.frame,
            drop_frame: raw.drop_frame,
        })
    }
}

impl Timecode {
    /// Create a timecode `seconds` after `00:00:00:00` at `fps`.
    ///
    /// The frame is `seconds * fps` truncated, computed on the decimal values so that
    /// rates like 29.97 do not drift.
    pub fn from_seconds(fps: f64, seconds: f64) -> Result<Self, TimecodeError> {
        check_rate(fps)?;
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(TimecodeError::InvalidRate);
        }

        if seconds == 0.0 {
            return Ok(Self::zero(fps));
        }

        let frame = decimal::frames_in(seconds, fps).ok_or(TimecodeError::InvalidRate)?;

        Ok(Self {
            fps,
            frame,
            drop_frame: false,
        })
    }

    /// Create a timecode at an explicit frame. Frame and rate must be positive.
    pub fn from_frame(fps: f64, frame: i64) -> Result<Self, TimecodeError> {
        check_rate(fps)?;
        let frame = u64::try_from(frame).map_err(|_| TimecodeError::InvalidRate)?;

        Ok(Self {
            fps,
            frame,
            drop_frame: false,
        })
    }

    /// Create a timecode by parsing `HH:MM:SS:FF` at `fps`
    pub fn from_string(fps: f64, timecode: &str) -> Result<Self, TimecodeError> {
        let mut tc = Self::from_seconds(fps, 0.0)?;
        tc.parse(timecode)?;
        Ok(tc)
    }

    /// Create a drop-frame timecode at 29.97 fps, `seconds` after midnight
    pub fn drop_frame_from_seconds(seconds: f64) -> Result<Self, TimecodeError> {
        let mut tc = Self::from_seconds(FPS_29_97, seconds)?;
        tc.drop_frame = true;
        Ok(tc)
    }

    /// Create a drop-frame timecode at 29.97 fps at an explicit frame
    pub fn drop_frame_from_frame(frame: i64) -> Result<Self, TimecodeError> {
        let mut tc = Self::from_frame(FPS_29_97, frame)?;
        tc.drop_frame = true;
        Ok(tc)
    }

    /// Create a drop-frame timecode by parsing `HH:MM:SS;FF`
    pub fn drop_frame_from_string(timecode: &str) -> Result<Self, TimecodeError> {
        let mut tc = Self::drop_frame_from_seconds(0.0)?;
        tc.parse(timecode)?;
        Ok(tc)
    }

    /// Generate a timecode at a uniformly chosen whole second in `[0, 12h)`.
    ///
    /// Intended for test fixtures; the caller owns the generator.
    pub fn random<R: Rng + ?Sized>(fps: f64, rng: &mut R) -> Result<Self, TimecodeError> {
        let seconds = rng.gen_range(0..RANDOM_RANGE_SECONDS);

        #[cfg(feature = "logging")]
        debug!("Random timecode at {} s, {} fps", seconds, fps);

        Self::from_seconds(fps, seconds as f64)
    }

    fn zero(fps: f64) -> Self {
        Self {
            fps,
            frame: 0,
            drop_frame: false,
        }
    }

    /// Zero-based frame number
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Number of frames up to and including the current one
    pub fn frames(&self) -> u64 {
        self.frame.saturating_add(1)
    }

    /// Frame rate in frames per second
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Whether this timecode uses drop-frame numbering
    pub fn is_drop_frame(&self) -> bool {
        self.drop_frame
    }
}

/// Reject zero, negative and non-finite rates
fn check_rate(fps: f64) -> Result<(), TimecodeError> {
    if fps > 0.0 && fps.is_finite() {
        #[cfg(feature = "logging")]
        if fps > crate::constants::MAX_SUPPORTED_FPS {
            debug!("{} fps is above 30 fps, frame fields may exceed two digits", fps);
        }

        Ok(())
    } else {
        Err(TimecodeError::InvalidRate)
    }
}
