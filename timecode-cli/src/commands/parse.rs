use anyhow::{Context, Result};
use tracing::info;

use super::Report;
use crate::rate::RateArgs;

/// Parse `timecode` and report its absolute frame
pub fn run(rate: &RateArgs, timecode: &str, json: bool) -> Result<String> {
    rate.check()?;

    let tc = rate
        .from_string(timecode)
        .with_context(|| format!("Failed to parse timecode {:?} at {} fps", timecode, rate.fps))?;

    info!("Parsed {} as frame {}", timecode, tc.frame());

    if json {
        serde_json::to_string_pretty(&Report::from(&tc))
            .with_context(|| "Failed to serialize timecode")
    } else {
        Ok(tc.frame().to_string())
    }
}

pub fn execute(rate: &RateArgs, timecode: &str, json: bool) -> Result<()> {
    println!("{}", run(rate, timecode, json)?);
    Ok(())
}
