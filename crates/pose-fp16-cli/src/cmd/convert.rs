//! `pose-fp16 convert` -- Quantize a keypoint document to fp16 strings.

use std::path::PathBuf;

use clap::Args;
use pose_fp16::PipelineConfig;
use tracing::debug;

use crate::output::{print_json, print_kv};

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Keypoint JSON file to read
    #[arg(env = "POSE_FP16_INPUT")]
    pub input: PathBuf,
    /// Destination file (default: <input-stem>_fp16.json beside the input)
    #[arg(short, long, env = "POSE_FP16_OUTPUT")]
    pub output: Option<PathBuf>,
    /// Output summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl ConvertArgs {
    fn config(&self) -> PipelineConfig {
        let config = PipelineConfig::new(&self.input);
        match &self.output {
            Some(output) => config.with_output(output),
            None => config,
        }
    }
}

pub fn run(args: ConvertArgs) -> anyhow::Result<()> {
    let config = args.config();
    debug!(input = %config.input.display(), output = %config.output.display(), "starting conversion");
    let report = pose_fp16::run(&config)?;

    if args.json {
        print_json(&serde_json::to_value(&report)?);
        return Ok(());
    }

    let stats = &report.stats;
    println!("Done! Wrote FP16-quantized data to {}", report.output.display());
    print_kv("Segments:", &stats.segments.to_string());
    print_kv("Thresholds:", &stats.thresholds.to_string());
    print_kv("Frames:", &stats.frames.to_string());
    print_kv("Landmarks:", &stats.landmarks.to_string());
    print_kv("Components:", &stats.components.to_string());
    print_kv("Max abs error:", &format!("{:.3e}", stats.max_abs_error));
    if stats.non_finite > 0 {
        print_kv("Non-finite values:", &stats.non_finite.to_string());
    }
    if stats.inconsistent_arity {
        println!("  WARNING: landmarks do not all have the same number of components.");
    }
    Ok(())
}
