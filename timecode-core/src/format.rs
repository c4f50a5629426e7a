//! Timecode formatting
//!
//! Non-drop timecode is a plain decomposition of the frame count by the nominal
//! (integer) rate. Drop-frame timecode first re-inflates the frame count with the
//! frame numbers that were skipped, then decomposes it the same way.

use crate::constants::{
    nominal_fps, DROP_FRAMES_PER_MINUTE, DROP_FRAME_CYCLE_MINUTES,
    DROP_FRAME_DELIMITER, HOURS_PER_DAY, MILLIS_PER_SECOND, NON_DROP_DELIMITER,
    SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use crate::types::Timecode;
use core::fmt;

/// Format `frame` as `HH:MM:SS:FF`, or `HH:MM:SS;FF` when `drop_frame` is set
pub fn format_timecode(frame: u64, fps: f64, drop_frame: bool) -> String {
    if drop_frame {
        format_drop_frame(frame, fps)
    } else {
        format_non_drop(frame, fps)
    }
}

/// Non-drop formatting. Hours are not reduced modulo 24.
fn format_non_drop(frame: u64, fps: f64) -> String {
    let per_second = nominal_fps(fps);
    let per_minute = per_second.saturating_mul(SECONDS_PER_MINUTE);
    let per_hour = per_minute.saturating_mul(SECONDS_PER_MINUTE);

    let hours = frame / per_hour;
    let rem = frame % per_hour;
    let minutes = rem / per_minute;
    let rem = rem % per_minute;
    let seconds = rem / per_second;
    let frames = rem % per_second;

    render(hours, minutes, seconds, frames, NON_DROP_DELIMITER)
}

/// Drop-frame formatting.
///
/// Frame numbers 0 and 1 do not exist at the start of each minute, except
/// minutes 00, 10, 20, 30, 40 and 50.
fn format_drop_frame(frame: u64, fps: f64) -> String {
    let drop = DROP_FRAMES_PER_MINUTE;
    let per_second = nominal_fps(fps);
    let per_hour = rounded_frames(fps * SECONDS_PER_HOUR as f64);
    let per_day = per_hour.saturating_mul(HOURS_PER_DAY);
    let per_ten_minutes =
        rounded_frames(fps * (DROP_FRAME_CYCLE_MINUTES * SECONDS_PER_MINUTE) as f64);
    let per_minute = per_second.saturating_mul(SECONDS_PER_MINUTE) - drop;

    let reduced = frame % per_day;
    let cycles = reduced / per_ten_minutes;
    let into_cycle = reduced % per_ten_minutes;

    let mut adjusted = reduced.saturating_add((DROP_FRAME_CYCLE_MINUTES - 1) * cycles * drop);
    if into_cycle > drop {
        adjusted = adjusted.saturating_add(drop * ((into_cycle - drop) / per_minute));
    }

    let total_seconds = adjusted / per_second;
    let frames = adjusted % per_second;
    let seconds = total_seconds % SECONDS_PER_MINUTE;
    let minutes = (total_seconds / SECONDS_PER_MINUTE) % SECONDS_PER_MINUTE;
    let hours = (total_seconds / SECONDS_PER_HOUR) % HOURS_PER_DAY;

    render(hours, minutes, seconds, frames, DROP_FRAME_DELIMITER)
}

/// Round a real frame count, never below one
fn rounded_frames(frames: f64) -> u64 {
    (frames.round() as u64).max(1)
}

fn render(hours: u64, minutes: u64, seconds: u64, frames: u64, delimiter: char) -> String {
    format!(
        "{:02}:{:02}:{:02}{}{:02}",
        hours, minutes, seconds, delimiter, frames
    )
}

impl Timecode {
    /// Start-of-frame time as `HH:MM:SS.mmm`
    pub fn as_milliseconds(&self) -> String {
        let total = self
            .millis_rounded_to(0)
            .and_then(|ms| ms.to_u64())
            .unwrap_or(0);
        let millis = total % MILLIS_PER_SECOND;
        let secs = total / MILLIS_PER_SECOND;

        format!(
            "{:02}:{:02}:{:02}.{:03}",
            secs / SECONDS_PER_HOUR,
            (secs % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            secs % SECONDS_PER_MINUTE,
            millis
        )
    }

    /// Milliseconds elapsed at the start of the frame.
    ///
    /// Zero when the rate has no decimal form or the result is out of range.
    pub fn milliseconds(&self) -> u64 {
        self.millis_rounded_to(3)
            .and_then(|ms| ms.trunc().to_u64())
            .unwrap_or(0)
    }

    fn millis_rounded_to(&self, dp: u32) -> Option<Decimal> {
        let numerator =
            Decimal::from(self.frame).checked_mul(Decimal::from(MILLIS_PER_SECOND))?;
        decimal::div_round(numerator, self.fps, dp)
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_timecode(self.frame, self.fps, self.drop_frame))
    }
}
