//! Constants for SMPTE timecode rates and clock arithmetic

/// NTSC video rate, 30000/1001 (≈29.97 fps). The only rate drop-frame timecode applies to.
pub const FPS_29_97: f64 = 30000.0 / 1001.0;

/// NTSC film rate, 24000/1001 (≈23.976 fps)
pub const FPS_23_976: f64 = 24000.0 / 1001.0;

/// Highest frame rate the engine is designed for. Not enforced.
pub const MAX_SUPPORTED_FPS: f64 = 30.0;

/// Seconds in a minute, also minutes in an hour
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Seconds in an hour
pub const SECONDS_PER_HOUR: u64 = SECONDS_PER_MINUTE * 60;

/// Hours in a day
pub const HOURS_PER_DAY: u64 = 24;

/// Seconds in the 24-hour timecode day
pub const SECONDS_PER_DAY: u64 = HOURS_PER_DAY * SECONDS_PER_HOUR;

/// Frame numbers skipped at the start of each non-tenth minute in drop-frame mode
pub const DROP_FRAMES_PER_MINUTE: u64 = 2;

/// Minutes per drop-frame cycle; the first minute of each cycle keeps all frame numbers
pub const DROP_FRAME_CYCLE_MINUTES: u64 = 10;

/// Milliseconds per second
pub const MILLIS_PER_SECOND: u64 = 1000;

/// Upper bound of the random timecode generator, in seconds (12 hours)
pub const RANDOM_RANGE_SECONDS: u64 = 12 * SECONDS_PER_HOUR;

/// Delimiter before the frame field in non-drop timecode
pub const NON_DROP_DELIMITER: char = ':';

/// Delimiter before the frame field in drop-frame timecode
pub const DROP_FRAME_DELIMITER: char = ';';

/// Length in bytes of a well-formed timecode string (`HH:MM:SS:FF`)
pub const TIMECODE_LEN: usize = 11;

/// Integer frames per second used for display at `fps`.
///
/// Rounds half to even. Rates that round to zero display as one frame per second
/// so that field decomposition never divides by zero.
pub fn nominal_fps(fps: f64) -> u64 {
    let rounded = fps.round_ties_even();
    if rounded >= 1.0 {
        rounded as u64
    } else {
        1
    }
}

/// Number of frames in a 24-hour day at `fps`, truncating the real product
pub fn frames_per_day(fps: f64) -> u64 {
    (SECONDS_PER_DAY as f64 * fps).trunc() as u64
}
