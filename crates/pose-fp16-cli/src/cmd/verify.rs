//! `pose-fp16 verify` -- Check that a document is fully quantized.

use std::path::PathBuf;

use clap::Args;

use crate::output::{print_json, print_kv};

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Quantized keypoint JSON to check
    pub file: PathBuf,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let doc = pose_fp16::load_document(&args.file)?;
    let report = pose_fp16::verify_document(&doc);

    if args.json {
        print_json(&serde_json::json!({
            "status": if report.is_clean() { "valid" } else { "invalid" },
            "thresholds_checked": report.thresholds_checked,
            "components_checked": report.components_checked,
            "invalid": report.invalid,
            "samples": report.samples,
        }));
    } else {
        println!("FP16 verification:");
        print_kv("Thresholds checked:", &report.thresholds_checked.to_string());
        print_kv("Components checked:", &report.components_checked.to_string());
        print_kv("Invalid:", &report.invalid.to_string());
        if report.is_clean() {
            println!("  All values are canonical fp16 strings.");
        } else {
            for location in &report.samples {
                println!("    {location}");
            }
        }
    }

    if !report.is_clean() {
        anyhow::bail!(
            "{} value(s) in {} are not canonical fp16 strings",
            report.invalid,
            args.file.display()
        );
    }
    Ok(())
}
