//! Timecode parsing (strict mode)
//!
//! Accepted input is exactly `\d{2}:[0-5]\d:[0-5]\d[:;][0-2]\d`. Syntax is checked
//! first, then the fields are validated against the rate and drop-frame mode of
//! the receiving timecode.

use crate::constants::{
    nominal_fps, DROP_FRAMES_PER_MINUTE, DROP_FRAME_CYCLE_MINUTES, DROP_FRAME_DELIMITER,
    SECONDS_PER_HOUR, SECONDS_PER_MINUTE, TIMECODE_LEN,
};
use crate::error::TimecodeError;
use crate::types::Timecode;

#[cfg(feature = "logging")]
use tracing::debug;

/// Byte classes of the timecode grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Digit,
    /// `[0-5]`, tens of minutes or seconds
    Sexagesimal,
    /// `[0-2]`, tens of frames
    FrameTens,
    Colon,
    /// `:` or `;`
    Delimiter,
}

impl Class {
    fn matches(self, b: u8) -> bool {
        match self {
            Class::Digit => b.is_ascii_digit(),
            Class::Sexagesimal => (b'0'..=b'5').contains(&b),
            Class::FrameTens => (b'0'..=b'2').contains(&b),
            Class::Colon => b == b':',
            Class::Delimiter => b == b':' || b == b';',
        }
    }
}

const GRAMMAR: [Class; TIMECODE_LEN] = [
    Class::Digit,
    Class::Digit,
    Class::Colon,
    Class::Sexagesimal,
    Class::Digit,
    Class::Colon,
    Class::Sexagesimal,
    Class::Digit,
    Class::Delimiter,
    Class::FrameTens,
    Class::Digit,
];

/// The four numeric fields of a syntactically valid timecode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimecodeFields {
    /// Hours, any two digits
    pub hours: u64,
    /// Minutes, 0-59
    pub minutes: u64,
    /// Seconds, 0-59
    pub seconds: u64,
    /// Frame number within the second, 0-29
    pub frames: u64,
    /// Delimiter before the frame field
    pub delimiter: char,
}

impl TimecodeFields {
    /// Whether every field is zero
    pub fn is_zero(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.frames == 0
    }

    /// Minutes since `00:00`
    pub fn total_minutes(&self) -> u64 {
        self.hours * SECONDS_PER_MINUTE + self.minutes
    }
}

/// Check the timecode grammar and extract its fields
pub fn parse_fields(text: &str) -> Result<TimecodeFields, TimecodeError> {
    let bytes = text.as_bytes();
    if bytes.len() != TIMECODE_LEN
        || !GRAMMAR
            .iter()
            .zip(bytes)
            .all(|(class, &b)| class.matches(b))
    {
        return Err(TimecodeError::invalid_timecode(text));
    }

    let pair = |at: usize| u64::from(bytes[at] - b'0') * 10 + u64::from(bytes[at + 1] - b'0');

    Ok(TimecodeFields {
        hours: pair(0),
        minutes: pair(3),
        seconds: pair(6),
        frames: pair(9),
        delimiter: char::from(bytes[8]),
    })
}

/// Compute the absolute frame for `fields` at `fps`.
///
/// Fails with `InconsistentRate` when the frame field does not exist at this rate, and
/// with `InvalidTimecode` when a drop-frame timecode uses `:` or names a dropped frame.
pub fn frame_from_fields(
    fields: &TimecodeFields,
    fps: f64,
    drop_frame: bool,
) -> Result<u64, TimecodeError> {
    if fields.is_zero() {
        return Ok(0);
    }

    let per_second = nominal_fps(fps);
    if fields.frames >= per_second {
        return Err(TimecodeError::InconsistentRate);
    }

    if !drop_frame {
        let seconds =
            fields.hours * SECONDS_PER_HOUR + fields.minutes * SECONDS_PER_MINUTE + fields.seconds;
        return Ok(seconds
            .saturating_mul(per_second)
            .saturating_add(fields.frames));
    }

    if fields.delimiter != DROP_FRAME_DELIMITER {
        return Err(invalid(fields));
    }

    if is_dropped(fields) {
        return Err(invalid(fields));
    }

    let per_minute = per_second.saturating_mul(SECONDS_PER_MINUTE);
    let per_hour = per_minute.saturating_mul(SECONDS_PER_MINUTE);
    let total_minutes = fields.total_minutes();
    let dropped =
        DROP_FRAMES_PER_MINUTE * (total_minutes - total_minutes / DROP_FRAME_CYCLE_MINUTES);

    Ok(fields
        .hours
        .saturating_mul(per_hour)
        .saturating_add(fields.minutes.saturating_mul(per_minute))
        .saturating_add(fields.seconds.saturating_mul(per_second))
        .saturating_add(fields.frames)
        .saturating_sub(dropped))
}

/// Frame numbers 0 and 1 of a minute that is not a multiple of ten never appear
/// in drop-frame timecode
fn is_dropped(fields: &TimecodeFields) -> bool {
    fields.seconds == 0
        && fields.frames < DROP_FRAMES_PER_MINUTE
        && fields.minutes % DROP_FRAME_CYCLE_MINUTES != 0
}

fn invalid(fields: &TimecodeFields) -> TimecodeError {
    TimecodeError::invalid_timecode(format!(
        "{:02}:{:02}:{:02}{}{:02}",
        fields.hours, fields.minutes, fields.seconds, fields.delimiter, fields.frames
    ))
}

impl Timecode {
    /// Set the timecode from `HH:MM:SS:FF` or `HH:MM:SS;FF`.
    ///
    /// The frame field must exist at this timecode's rate and drop-frame mode. On error
    /// the timecode is left unchanged.
    pub fn parse(&mut self, text: &str) -> Result<(), TimecodeError> {
        let result =
            parse_fields(text).and_then(|f| frame_from_fields(&f, self.fps, self.drop_frame));

        match result {
            Ok(frame) => {
                self.frame = frame;
                Ok(())
            }
            Err(e) => {
                #[cfg(feature = "logging")]
                debug!("Rejected timecode {:?} at {} fps: {}", text, self.fps, e);

                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{FPS_23_976, FPS_29_97};

    #[test]
    fn test_parse_fields() {
        let fields = parse_fields("12:34:56;22").unwrap();
        assert_eq!(
            fields,
            TimecodeFields {
                hours: 12,
                minutes: 34,
                seconds: 56,
                frames: 22,
                delimiter: ';',
            }
        );
        assert_eq!(fields.total_minutes(), 754);
    }

    #[test]
    fn test_grammar_rejects() {
        let bad = [
            "a2:34:56:22",
            "1a:34:56:22",
            "12:a4:56:22",
            "12:3a:56:22",
            "12:34:a6:22",
            "12:34:5a:22",
            "12:34:56:a2",
            "12:34:56:2a",
            "12:64:56:22",
            "12:34:66:22",
            "12:34:56:32",
            "12:34:56",
            "12:34:56:220",
            " 12:34:56:22",
            "12;34:56:22",
            "12:34:56.22",
            "",
            "bad",
        ];
        for text in bad {
            assert_eq!(
                parse_fields(text).unwrap_err(),
                TimecodeError::invalid_timecode(text),
                "{:?}",
                text
            );
        }
    }

    #[test]
    fn test_grammar_rejects_multibyte() {
        assert!(parse_fields("12:34:56:2٢").is_err());
        assert!(parse_fields("１2:34:56:2").is_err());
    }

    #[test]
    fn test_non_drop_frames() {
        let cases = [
            ("00:00:00:00", 25.0, 0),
            ("00:00:00:00", FPS_23_976, 0),
            ("00:00:01:00", 25.0, 25),
            ("00:00:01:00", 24.0, 24),
            ("00:00:01:00", FPS_23_976, 24),
            ("00:00:59:00", 25.0, 1475),
            ("00:00:59:00", FPS_23_976, 1416),
            ("00:00:59:00", 24.0, 1416),
            ("12:34:56:22", 25.0, 1_132_422),
        ];
        for (text, fps, expected) in cases {
            let fields = parse_fields(text).unwrap();
            assert_eq!(frame_from_fields(&fields, fps, false).unwrap(), expected, "{}", text);
        }
    }

    #[test]
    fn test_frame_field_beyond_rate() {
        let fields = parse_fields("12:34:56:25").unwrap();
        assert_eq!(
            frame_from_fields(&fields, 25.0, false).unwrap_err(),
            TimecodeError::InconsistentRate
        );
        let fields = parse_fields("00:00:01:24").unwrap();
        assert_eq!(
            frame_from_fields(&fields, FPS_23_976, false).unwrap_err(),
            TimecodeError::InconsistentRate
        );
    }

    #[test]
    fn test_drop_frames() {
        let cases = [
            ("00:00:00;00", 0),
            ("00:00:01;00", 30),
            ("00:00:59;29", 1799),
            ("00:01:00;02", 1800),
            ("00:02:00;02", 3598),
            ("00:10:00;00", 17_982),
            ("00:10:00;01", 17_983),
            ("01:00:00;00", 107_892),
        ];
        for (text, expected) in cases {
            let fields = parse_fields(text).unwrap();
            assert_eq!(
                frame_from_fields(&fields, FPS_29_97, true).unwrap(),
                expected,
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_drop_frame_rejects() {
        for text in ["00:01:00;00", "00:01:00;01", "12:34:00;01", "00:10:00:00"] {
            let fields = parse_fields(text).unwrap();
            assert_eq!(
                frame_from_fields(&fields, FPS_29_97, true).unwrap_err(),
                TimecodeError::invalid_timecode(text),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_non_drop_accepts_semicolon() {
        let fields = parse_fields("00:00:01;05").unwrap();
        assert_eq!(frame_from_fields(&fields, 25.0, false).unwrap(), 30);
    }

    #[test]
    fn test_all_zero_short_circuits() {
        let fields = parse_fields("00:00:00:00").unwrap();
        assert_eq!(frame_from_fields(&fields, FPS_29_97, true).unwrap(), 0);
    }

    #[test]
    fn test_huge_rate_saturates() {
        let tc = Timecode::from_string(1e20, "00:00:01:05").unwrap();
        assert_eq!(tc.frame(), u64::MAX);

        let fields = parse_fields("23:59:59;29").unwrap();
        assert_eq!(frame_from_fields(&fields, 1e20, false).unwrap(), u64::MAX);
        assert_eq!(
            frame_from_fields(&fields, f64::MAX, true).unwrap(),
            u64::MAX - 2 * (1439 - 143)
        );
    }

    #[test]
    fn test_parse_leaves_receiver_on_error() {
        let mut tc = Timecode::from_frame(25.0, 42).unwrap();
        assert!(tc.parse("12:34:56:25").is_err());
        assert!(tc.parse("garbage").is_err());
        assert_eq!(tc.frame(), 42);

        tc.parse("00:00:02:00").unwrap();
        assert_eq!(tc.frame(), 50);
    }
}
