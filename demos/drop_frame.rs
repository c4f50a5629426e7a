//! Drop-frame timecode walkthrough

use timecode_core::{Timecode, FPS_29_97};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("29.97 fps Drop-Frame Example\n");

    // Frame numbers 0 and 1 are skipped at the start of every minute except each tenth
    for frame in [1798, 1799, 1800, 1801, 17_981, 17_982] {
        let tc = Timecode::drop_frame_from_frame(frame)?;
        println!("frame {:>6} -> {} ({})", frame, tc, tc.as_milliseconds());
    }

    // Dropped numbers are rejected when parsing
    match Timecode::drop_frame_from_string("00:01:00;00") {
        Ok(tc) => println!("\nunexpected: {}", tc),
        Err(e) => println!("\n00:01:00;00 rejected: {}", e),
    }

    // The same frame count labelled at non-drop 29.97
    let df = Timecode::drop_frame_from_string("01:00:00;00")?;
    let mut ndf = Timecode::from_frame(FPS_29_97, 0)?;
    ndf.convert(&df);
    println!("\n{} drop-frame is {} non-drop ({} frames)", df, ndf, df.frame());

    // One real hour in drop-frame
    let mut tc = Timecode::drop_frame_from_frame(44_970)?;
    let hour = Timecode::drop_frame_from_seconds(3599.0)?;
    tc.add(&hour)?;
    println!("{} + 3599 s = {}", Timecode::drop_frame_from_frame(44_970)?, tc);

    Ok(())
}
