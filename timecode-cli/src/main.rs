use anyhow::Result;
use clap::{Parser, Subcommand};
use timecode_cli::commands::{self, arith::Operation};
use timecode_cli::RateArgs;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "timecode")]
#[command(about = "timecode - SMPTE timecode conversion and arithmetic", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format an absolute frame number as timecode
    Format {
        #[command(flatten)]
        rate: RateArgs,

        /// Frame number
        #[arg(long, allow_negative_numbers = true)]
        frame: i64,
    },

    /// Parse a timecode into an absolute frame number
    Parse {
        #[command(flatten)]
        rate: RateArgs,

        /// Timecode (HH:MM:SS:FF or HH:MM:SS;FF)
        timecode: String,
    },

    /// Add two timecodes, wrapping at 24 hours
    Add {
        #[command(flatten)]
        rate: RateArgs,

        a: String,
        b: String,
    },

    /// Subtract the second timecode from the first, wrapping below zero
    Subtract {
        #[command(flatten)]
        rate: RateArgs,

        a: String,
        b: String,
    },

    /// Convert a JSON array of frame numbers to timecodes
    Batch {
        #[command(flatten)]
        rate: RateArgs,

        /// Input JSON file (array of frame numbers)
        #[arg(short, long)]
        input: String,

        /// Output JSON file
        #[arg(short, long)]
        output: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Format { rate, frame } => commands::format::execute(&rate, frame, cli.json),

        Commands::Parse { rate, timecode } => commands::parse::execute(&rate, &timecode, cli.json),

        Commands::Add { rate, a, b } => {
            commands::arith::execute(&rate, Operation::Add, &a, &b, cli.json)
        }

        Commands::Subtract { rate, a, b } => {
            commands::arith::execute(&rate, Operation::Subtract, &a, &b, cli.json)
        }

        Commands::Batch {
            rate,
            input,
            output,
        } => commands::batch::execute(&input, &output, &rate),
    }
}
