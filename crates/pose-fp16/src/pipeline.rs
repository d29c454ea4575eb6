/// Pipeline driver: read -> quantize segments -> quantize frames -> write.
///
/// Both file operations block and run once. Writing is not atomic, so a
/// failure mid-write can leave a truncated output file behind.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::config::PipelineConfig;
use crate::document;
use crate::error::Result;
use crate::metrics::ConversionStats;

/// Outcome of a successful [`run`].
#[derive(Clone, Debug, Serialize)]
pub struct ConversionReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: ConversionStats,
}

/// Run the whole conversion described by `config`.
pub fn run(config: &PipelineConfig) -> Result<ConversionReport> {
    config.validate()?;

    let doc = document::load_document(&config.input)?;
    let (doc, stats) = document::convert_document(doc)?;
    document::save_document(&config.output, &doc)?;

    info!(
        output = %config.output.display(),
        segments = stats.segments,
        frames = stats.frames,
        values = stats.values(),
        max_abs_error = stats.max_abs_error,
        "fp16 quantization complete"
    );

    Ok(ConversionReport {
        input: config.input.clone(),
        output: config.output.clone(),
        stats,
    })
}
