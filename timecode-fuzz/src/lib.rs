//! Fuzz entry points for timecode-core
//!
//! Each function takes raw fuzzer input and must never panic. They can be wired to
//! cargo-fuzz targets or driven from any other harness.

use timecode_core::{Timecode, FPS_29_97};

/// Parse arbitrary bytes as a timecode at a few representative rates
pub fn fuzz_parse(data: &[u8]) {
    let text = String::from_utf8_lossy(data);

    let _ = timecode_core::parse::parse_fields(&text);
    let _ = Timecode::from_string(25.0, &text);
    let _ = Timecode::from_string(FPS_29_97, &text);
    let _ = Timecode::drop_frame_from_string(&text);
}

/// Build a timecode from arbitrary bytes and run every operation on it.
///
/// Layout: 8 bytes rate (`f64` bits), 8 bytes frame (`i64`), 1 byte drop-frame flag.
/// Short input is zero padded.
pub fn fuzz_format(data: &[u8]) {
    let mut buf = [0u8; 17];
    let len = data.len().min(buf.len());
    buf[..len].copy_from_slice(&data[..len]);

    let mut word = [0u8; 8];
    word.copy_from_slice(&buf[0..8]);
    let fps = f64::from_le_bytes(word);
    word.copy_from_slice(&buf[8..16]);
    let frame = i64::from_le_bytes(word);
    let drop_frame = buf[16] & 1 == 1;

    let tc = if drop_frame {
        Timecode::drop_frame_from_frame(frame)
    } else {
        Timecode::from_frame(fps, frame)
    };
    let Ok(mut tc) = tc else {
        return;
    };

    let text = tc.to_string();
    let _ = tc.as_milliseconds();
    let _ = tc.milliseconds();

    let mut reparsed = tc;
    let _ = reparsed.parse(&text);

    let other = tc;
    let _ = tc.add(&other);
    let _ = tc.subtract(&other);
    tc.offset(frame);
    let _ = tc.frame_count(&other);
    let _ = tc.at_offset_from(&other, frame);
}

/// Build a timecode from seconds given as arbitrary bytes
pub fn fuzz_seconds(data: &[u8]) {
    for chunk in data.chunks_exact(16) {
        let mut word = [0u8; 8];
        word.copy_from_slice(&chunk[0..8]);
        let fps = f64::from_le_bytes(word);
        word.copy_from_slice(&chunk[8..16]);
        let seconds = f64::from_le_bytes(word);

        if let Ok(tc) = Timecode::from_seconds(fps, seconds) {
            let _ = tc.to_string();
        }
    }
}
