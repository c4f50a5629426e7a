use anyhow::{Context, Result};
use tracing::info;

use super::Report;
use crate::rate::RateArgs;

/// Arithmetic operation between two timecodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// `a + b`, wrapping at 24 hours
    Add,
    /// `a - b`, wrapping below zero
    Subtract,
}

/// Apply `op` to two timecodes at the same rate
pub fn run(rate: &RateArgs, op: Operation, a: &str, b: &str, json: bool) -> Result<String> {
    rate.check()?;

    let mut tc = rate
        .from_string(a)
        .with_context(|| format!("Failed to parse timecode {:?}", a))?;
    let other = rate
        .from_string(b)
        .with_context(|| format!("Failed to parse timecode {:?}", b))?;

    let result = match op {
        Operation::Add => tc.add(&other),
        Operation::Subtract => tc.subtract(&other),
    };
    result.with_context(|| format!("Failed to {:?} {} and {}", op, a, b))?;

    info!("{:?} {} {} = {}", op, a, b, tc);

    if json {
        serde_json::to_string_pretty(&Report::from(&tc))
            .with_context(|| "Failed to serialize timecode")
    } else {
        Ok(tc.to_string())
    }
}

pub fn execute(rate: &RateArgs, op: Operation, a: &str, b: &str, json: bool) -> Result<()> {
    println!("{}", run(rate, op, a, b, json)?);
    Ok(())
}
