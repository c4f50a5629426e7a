use anyhow::{Context, Result};
use tracing::info;

use super::Report;
use crate::rate::RateArgs;

/// Render frame `frame` as timecode, either as text or as a JSON `Report`
pub fn run(rate: &RateArgs, frame: i64, json: bool) -> Result<String> {
    rate.check()?;

    let tc = rate
        .from_frame(frame)
        .with_context(|| format!("Failed to build timecode for frame {}", frame))?;

    info!("Formatting frame {} at {} fps", frame, rate.fps);

    if json {
        serde_json::to_string_pretty(&Report::from(&tc))
            .with_context(|| "Failed to serialize timecode")
    } else {
        Ok(format!("{}  ({})", tc, tc.as_milliseconds()))
    }
}

pub fn execute(rate: &RateArgs, frame: i64, json: bool) -> Result<()> {
    println!("{}", run(rate, frame, json)?);
    Ok(())
}
