//! Frame rate arguments shared by every command

use anyhow::{bail, Result};
use clap::Args;
use timecode_core::{Timecode, TimecodeError, FPS_23_976, FPS_29_97};

/// Parse a frame rate: `24`, `25`, `29.97`, `30000/1001`, `23.976`, `24000/1001`,
/// any other ratio `n/d`, or any decimal
pub fn parse_rate(s: &str) -> Result<f64, String> {
    let s = s.trim();
    match s {
        "29.97" | "30000/1001" => return Ok(FPS_29_97),
        "23.976" | "24000/1001" => return Ok(FPS_23_976),
        _ => {}
    }

    let fps = match s.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().map_err(|_| bad_rate(s))?;
            let den: f64 = den.trim().parse().map_err(|_| bad_rate(s))?;
            num / den
        }
        None => s.parse().map_err(|_| bad_rate(s))?,
    };

    if !fps.is_finite() || fps <= 0.0 {
        return Err(bad_rate(s));
    }
    Ok(fps)
}

fn bad_rate(s: &str) -> String {
    format!("invalid frame rate {:?}", s)
}

/// Frame rate and drop-frame mode
#[derive(Args, Debug, Clone, Copy)]
pub struct RateArgs {
    /// Frame rate (24, 25, 29.97, 30000/1001, 23.976, 24000/1001 or a decimal)
    #[arg(long, value_parser = parse_rate, default_value = "29.97")]
    pub fps: f64,

    /// Use drop-frame timecode (29.97 only)
    #[arg(long)]
    pub drop_frame: bool,
}

impl RateArgs {
    /// Reject drop-frame at any rate other than 29.97
    pub fn check(&self) -> Result<()> {
        if self.drop_frame && self.fps.to_bits() != FPS_29_97.to_bits() {
            bail!("--drop-frame requires --fps 29.97 (got {})", self.fps);
        }
        Ok(())
    }

    /// Timecode at an absolute frame
    pub fn from_frame(&self, frame: i64) -> Result<Timecode, TimecodeError> {
        if self.drop_frame {
            Timecode::drop_frame_from_frame(frame)
        } else {
            Timecode::from_frame(self.fps, frame)
        }
    }

    /// Timecode parsed from `HH:MM:SS:FF` / `HH:MM:SS;FF`
    pub fn from_string(&self, text: &str) -> Result<Timecode, TimecodeError> {
        if self.drop_frame {
            Timecode::drop_frame_from_string(text)
        } else {
            Timecode::from_string(self.fps, text)
        }
    }
}
