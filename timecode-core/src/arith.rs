//! Timecode arithmetic and comparisons
//!
//! Addition and subtraction wrap once around the 24-hour day. Both operands are
//! expected to already lie within one day.

use crate::constants::frames_per_day;
use crate::error::TimecodeError;
use crate::types::Timecode;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

impl Timecode {
    /// Whether both timecodes share the same rate and drop-frame mode
    pub fn is_compatible(&self, other: &Timecode) -> bool {
        self.fps.to_bits() == other.fps.to_bits() && self.drop_frame == other.drop_frame
    }

    /// Number of frames in a 24-hour day at this rate
    pub fn frames_per_day(&self) -> u64 {
        frames_per_day(self.fps)
    }

    /// Add `other` to this timecode, wrapping at 24 hours.
    ///
    /// Both timecodes must have the same rate and drop-frame mode.
    pub fn add(&mut self, other: &Timecode) -> Result<(), TimecodeError> {
        self.check_compatible(other)?;

        let modulus = self.frames_per_day();
        let mut frame = self.frame.saturating_add(other.frame);
        if frame >= modulus {
            #[cfg(feature = "logging")]
            debug!("Addition wrapped past 24 hours ({} >= {})", frame, modulus);

            frame -= modulus;
        }

        self.frame = frame;
        Ok(())
    }

    /// Subtract `other` from this timecode, wrapping below zero.
    ///
    /// `00:00:01:00 - 00:00:02:00` is `23:59:59:00`. Both timecodes must have the
    /// same rate and drop-frame mode.
    pub fn subtract(&mut self, other: &Timecode) -> Result<(), TimecodeError> {
        self.check_compatible(other)?;

        self.frame = match self.frame.checked_sub(other.frame) {
            Some(frame) => frame,
            None => {
                let modulus = self.frames_per_day();

                #[cfg(feature = "logging")]
                debug!("Subtraction wrapped below zero, adding {}", modulus);

                self.frame
                    .saturating_add(modulus)
                    .saturating_sub(other.frame)
            }
        };
        Ok(())
    }

    /// Move by `frames`, which may be negative. No 24-hour wraparound is applied;
    /// the frame stops at zero.
    pub fn offset(&mut self, frames: i64) {
        self.frame = self.frame.saturating_add_signed(frames);
    }

    /// Set the absolute frame. Negative values clamp to zero.
    pub fn set_frame(&mut self, frame: i64) {
        self.frame = u64::try_from(frame).unwrap_or(0);
    }

    /// Take the frame number of `other`, keeping this timecode's rate and drop-frame mode
    pub fn convert(&mut self, other: &Timecode) {
        self.frame = other.frame;
    }

    /// Whether this timecode is before or equal to `other`
    pub fn before(&self, other: &Timecode) -> bool {
        self.frame <= other.frame
    }

    /// Whether this timecode lies `frames` after `other`.
    ///
    /// Always false when the rates or drop-frame modes differ.
    pub fn at_offset_from(&self, other: &Timecode, frames: i64) -> bool {
        self.is_compatible(other)
            && i128::from(other.frame) + i128::from(frames) == i128::from(self.frame)
    }

    /// Signed number of frames from this timecode to `other`
    pub fn frame_count(&self, other: &Timecode) -> i64 {
        let diff = i128::from(other.frame) - i128::from(self.frame);
        diff.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    fn check_compatible(&self, other: &Timecode) -> Result<(), TimecodeError> {
        if self.is_compatible(other) {
            return Ok(());
        }

        #[cfg(feature = "logging")]
        warn!(
            "Incompatible timecodes: {} fps (drop frame {}) vs {} fps (drop frame {})",
            self.fps, self.drop_frame, other.fps, other.drop_frame
        );

        Err(TimecodeError::InconsistentRate)
    }
}

/// Equal frame, bit-equal rate and same drop-frame mode
impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.frame == other.frame && self.is_compatible(other)
    }
}

impl Eq for Timecode {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FPS_23_976, FPS_29_97};

    #[test]
    fn test_add() {
        let mut t1 = Timecode::from_seconds(25.0, 60.0).unwrap();
        let t2 = Timecode::from_seconds(25.0, 60.0).unwrap();
        t1.add(&t2).unwrap();
        assert_eq!(t1.to_string(), "00:02:00:00");

        let t3 = Timecode::from_seconds(FPS_29_97, 120.0).unwrap();
        assert_eq!(t1.add(&t3).unwrap_err(), TimecodeError::InconsistentRate);
        assert_eq!(t1.to_string(), "00:02:00:00");
    }

    #[test]
    fn test_add_drop_frame() {
        let mut t4 = Timecode::drop_frame_from_string("00:05:00;02").unwrap();
        let t5 = Timecode::drop_frame_from_string("00:05:00;02").unwrap();
        t4.add(&t5).unwrap();
        assert_eq!(t4.to_string(), "00:10:00;02");
        t4.add(&t5).unwrap();
        assert_eq!(t4.to_string(), "00:15:00;04");

        // same rate, different drop-frame mode
        let t3 = Timecode::from_seconds(FPS_29_97, 120.0).unwrap();
        assert!(t4.add(&t3).is_err());
    }

    #[test]
    fn test_add_wraps_day() {
        let mut t1 = Timecode::from_seconds(24.0, 2.0).unwrap();
        let day = Timecode::from_seconds(24.0, 86_400.0).unwrap();
        t1.add(&day).unwrap();
        assert_eq!(t1.to_string(), "00:00:02:00");
    }

    #[test]
    fn test_subtract() {
        let mut t1 = Timecode::from_frame(25.0, 60).unwrap();
        let t2 = Timecode::from_frame(25.0, 31).unwrap();
        t1.subtract(&t2).unwrap();
        assert_eq!(t1.frame(), 29);
        t1.subtract(&t2).unwrap();
        assert_eq!(t1.to_string(), "23:59:59:23");

        let t3 = Timecode::from_frame(FPS_29_97, 60).unwrap();
        let before = t1;
        assert_eq!(t1.subtract(&t3).unwrap_err(), TimecodeError::InconsistentRate);
        assert_eq!(t1, before);
    }

    #[test]
    fn test_subtract_underflow() {
        let mut t1 = Timecode::from_string(25.0, "00:00:01:00").unwrap();
        let t2 = Timecode::from_string(25.0, "00:00:02:00").unwrap();
        t1.subtract(&t2).unwrap();
        assert_eq!(t1.to_string(), "23:59:59:00");
    }

    #[test]
    fn test_subtract_underflow_drop_frame() {
        // The wrap modulus is trunc(86400 * 29.97...) = 2_589_410, two frames longer than
        // the 24 * 107_892 frames the display cycles through
        let mut tc = Timecode::drop_frame_from_string("00:00:00;00").unwrap();
        let one = Timecode::drop_frame_from_frame(1).unwrap();
        tc.subtract(&one).unwrap();
        assert_eq!(tc.frame(), 2_589_409);
        assert_eq!(tc.to_string(), "00:00:00;01");

        let mut tc = Timecode::drop_frame_from_frame(0).unwrap();
        let three = Timecode::drop_frame_from_frame(3).unwrap();
        tc.subtract(&three).unwrap();
        assert_eq!(tc.frame(), 2_589_407);
        assert_eq!(tc.to_string(), "23:59:59;29");
    }

    #[test]
    fn test_offset() {
        let mut t1 = Timecode::from_string(24.0, "00:00:00:00").unwrap();
        t1.offset(1);
        assert_eq!(t1.to_string(), "00:00:00:01");
        t1.offset(1);
        t1.offset(1);
        assert_eq!(t1.to_string(), "00:00:00:03");
        t1.offset(-1);
        assert_eq!(t1.to_string(), "00:00:00:02");

        let mut t1 = Timecode::from_string(24.0, "00:00:01:00").unwrap();
        t1.offset(2);
        assert_eq!(t1.to_string(), "00:00:01:02");
    }

    #[test]
    fn test_offset_does_not_wrap() {
        let mut t1 = Timecode::from_frame(24.0, 0).unwrap();
        t1.offset(-5);
        assert_eq!(t1.frame(), 0);

        let mut t2 = Timecode::from_frame(24.0, 2_073_599).unwrap();
        t2.offset(1);
        assert_eq!(t2.frame(), 2_073_600);
        assert_eq!(t2.to_string(), "24:00:00:00");
    }

    #[test]
    fn test_offset_no_drift() {
        let mut stepped = Timecode::from_seconds(24.0, 0.0).unwrap();
        for _ in 0..2000 {
            stepped.offset(1);
        }
        let mut jumped = Timecode::from_seconds(24.0, 0.0).unwrap();
        jumped.offset(2000);
        assert_eq!(stepped.to_string(), jumped.to_string());

        let mut t = Timecode::from_seconds(FPS_23_976, 0.0).unwrap();
        assert_eq!(t.to_string(), "00:00:00:00");
        for _ in 0..24 {
            t.offset(1);
        }
        assert_eq!(t.to_string(), "00:00:01:00");
    }

    #[test]
    fn test_set_frame() {
        let mut tc = Timecode::from_seconds(25.0, 0.0).unwrap();
        for (frame, expected) in [(537, 537), (-1, 0), (0, 0)] {
            tc.set_frame(frame);
            assert_eq!(tc.frame(), expected);
            assert_eq!(tc.frames(), expected + 1);
        }
    }

    #[test]
    fn test_convert_keeps_rate() {
        let t1 = Timecode::from_frame(25.0, 4321).unwrap();
        let mut t2 = Timecode::from_frame(24.0, 17).unwrap();
        t2.convert(&t1);
        assert_eq!(t2.frame(), 4321);
        assert_eq!(t2.fps(), 24.0);
        assert!(!t2.is_drop_frame());
    }

    #[test]
    fn test_before_and_frame_count() {
        let t1 = Timecode::from_frame(25.0, 1000).unwrap();
        let t2 = Timecode::from_frame(25.0, 1001).unwrap();
        assert!(t1.before(&t2));
        assert!(t1.before(&t1));
        assert!(!t2.before(&t1));
        assert_eq!(t2.frame_count(&t1), -1);
        assert_eq!(t1.frame_count(&t2), 1);

        let t0 = Timecode::from_seconds(24.0, 0.0).unwrap();
        let t1 = Timecode::from_seconds(24.0, 1.0).unwrap();
        assert_eq!(t0.frame_count(&t1), 24);
    }

    #[test]
    fn test_at_offset_from() {
        let t1 = Timecode::from_frame(24.0, 500).unwrap();
        let mut t2 = t1;
        t2.offset(37);
        assert!(t2.at_offset_from(&t1, 37));
        assert!(!t2.at_offset_from(&t1, 38));
        assert!(t1.at_offset_from(&t2, -37));

        let t3 = Timecode::drop_frame_from_seconds(0.0).unwrap();
        assert!(!t3.at_offset_from(&t1, 1));
        let t4 = Timecode::from_frame(25.0, 501).unwrap();
        assert!(!t4.at_offset_from(&t1, 1));
    }

    #[test]
    fn test_equal() {
        let t0 = Timecode::from_frame(FPS_23_976, 1234).unwrap();
        let mut t1 = t0;
        assert_eq!(t0, t1);
        t1.offset(1);
        assert_ne!(t0, t1);

        let t2 = Timecode::from_frame(24.0, 1234).unwrap();
        assert_ne!(t0, t2);

        let plain = Timecode::from_frame(FPS_29_97, 10).unwrap();
        let drop = Timecode::drop_frame_from_frame(10).unwrap();
        assert_ne!(plain, drop);
    }

    #[test]
    fn test_frames_per_day() {
        assert_eq!(Timecode::from_frame(24.0, 0).unwrap().frames_per_day(), 2_073_600);
        assert_eq!(
            Timecode::drop_frame_from_frame(0).unwrap().frames_per_day(),
            2_589_410
        );
    }
}
