//! Edit list durations at 23.976 fps

use timecode_core::{Timecode, FPS_23_976};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Edit List Example\n");

    let events = [
        ("01:00:00:00", "01:00:04:12"),
        ("01:00:04:12", "01:00:31:07"),
        ("01:00:31:07", "01:01:02:23"),
    ];

    let mut total = Timecode::from_frame(FPS_23_976, 0)?;
    for (i, (src_in, src_out)) in events.iter().enumerate() {
        let start = Timecode::from_string(FPS_23_976, src_in)?;
        let end = Timecode::from_string(FPS_23_976, src_out)?;

        let mut duration = end;
        duration.subtract(&start)?;
        total.add(&duration)?;

        println!(
            "Event {}: {} -> {}  duration {} ({} frames)",
            i + 1,
            start,
            end,
            duration,
            start.frame_count(&end)
        );
    }

    println!("\nTotal: {} ({} ms)", total, total.milliseconds());

    Ok(())
}
