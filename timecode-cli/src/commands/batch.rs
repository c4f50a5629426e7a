use anyhow::{Context, Result};
use std::fs;
use tracing::info;

use super::Report;
use crate::rate::RateArgs;

/// Convert a JSON array of frame numbers into an array of `Report`s
pub fn execute(input: &str, output: &str, rate: &RateArgs) -> Result<()> {
    info!("Converting frames from {} to {}", input, output);
    rate.check()?;

    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input))?;

    let frames: Vec<i64> =
        serde_json::from_str(&content).with_context(|| "Failed to parse JSON input")?;

    info!("Found {} frames to convert", frames.len());

    let reports = frames
        .iter()
        .map(|&frame| {
            rate.from_frame(frame)
                .map(|tc| Report::from(&tc))
                .with_context(|| format!("Failed to convert frame {}", frame))
        })
        .collect::<Result<Vec<_>>>()?;

    let json = serde_json::to_string_pretty(&reports)
        .with_context(|| "Failed to serialize timecodes")?;

    fs::write(output, json)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!("Successfully converted {} frames", reports.len());

    Ok(())
}
