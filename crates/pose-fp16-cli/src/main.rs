//! pose-fp16 CLI entry point.
//!
//! ```bash
//! # Quantize a keypoint file (writes keypoints_fp16.json beside it)
//! pose-fp16 convert assets/keypoints.json
//!
//! # Choose the destination and emit a machine-readable summary
//! pose-fp16 convert assets/keypoints.json -o out/keypoints_fp16.json --json
//!
//! # Check that a file is already fully quantized
//! pose-fp16 verify out/keypoints_fp16.json
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cmd;
mod output;

#[derive(Parser, Debug)]
#[command(name = "pose-fp16")]
#[command(version, about = "Quantize pose keypoint JSON to half-precision decimal strings")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Quantize segment thresholds and landmark frames to fp16 strings
    Convert(cmd::convert::ConvertArgs),
    /// Check that every threshold and landmark component is a canonical fp16 string
    Verify(cmd::verify::VerifyArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Convert(args) => cmd::convert::run(args),
        Command::Verify(args) => cmd::verify::run(args),
    }
}
