//! Conversion statistics for a quantization run.
//!
//! [`ConversionStats`] is filled in while segments and frames are converted
//! and is returned alongside the output document so callers can report how
//! much data was touched and how much precision was lost.
//!
//! # Usage
//!
//! ```
//! use pose_fp16::metrics::ConversionStats;
//!
//! let mut stats = ConversionStats::default();
//! stats.record_value(0.1);
//! stats.record_value(1e6);
//! assert_eq!(stats.non_finite, 1);
//! assert!(stats.max_abs_error > 0.0);
//! ```

use serde::Serialize;

use crate::quantizer;

// ---------------------------------------------------------------------------
// ConversionStats
// ---------------------------------------------------------------------------

/// Counters gathered over one document conversion.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ConversionStats {
    /// Segments converted.
    pub segments: usize,
    /// Threshold values quantized across all segments.
    pub thresholds: usize,
    /// Frames converted.
    pub frames: usize,
    /// Landmark strings converted across all frames.
    pub landmarks: usize,
    /// Numeric landmark components quantized.
    pub components: usize,
    /// Values whose binary16 image is `inf`, `-inf` or `nan`.
    pub non_finite: usize,
    /// Largest absolute error introduced by the binary16 step over finite values.
    pub max_abs_error: f64,
    /// Whether landmarks disagreed on their component count.
    pub inconsistent_arity: bool,
}

impl ConversionStats {
    /// Account for one value passing through the quantizer.
    pub fn record_value(&mut self, x: f64) {
        match quantizer::quantization_error(x) {
            Some(err) => {
                if err > self.max_abs_error {
                    self.max_abs_error = err;
                }
            }
            None => self.non_finite += 1,
        }
    }

    /// Total number of numeric values quantized.
    pub fn values(&self) -> usize {
        self.thresholds + self.components
    }
}
