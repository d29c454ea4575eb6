//! Pipeline configuration: where to read from and where to write to.

use std::path::{Path, PathBuf};

use crate::error::{Fp16Error, Result};

/// Suffix appended to the input file stem when no output path is given.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_fp16";

/// Input and output locations for one conversion run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Keypoint JSON to read.
    pub input: PathBuf,
    /// Destination for the quantized JSON. Overwritten if present.
    pub output: PathBuf,
}

impl PipelineConfig {
    /// Configure a run whose output sits beside the input as `<stem>_fp16.json`.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = default_output_path(&input);
        Self { input, output }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(Fp16Error::invalid_config("input path is empty"));
        }
        if self.output.as_os_str().is_empty() {
            return Err(Fp16Error::invalid_config("output path is empty"));
        }
        if self.input == self.output {
            return Err(Fp16Error::invalid_config(format!(
                "output would overwrite input {}",
                self.input.display()
            )));
        }
        Ok(())
    }
}

/// `dir/name.json` -> `dir/name_fp16.json`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{DEFAULT_OUTPUT_SUFFIX}.json"))
}
