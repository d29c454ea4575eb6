/// Segment conversion: quantize the thresholds of each pose segment.
///
/// Layout of one segment:
///   [start, end, phase, thresholds, facing]
///
/// Only `thresholds` (index 3) is rewritten; the other four fields are
/// copied through untouched.

use serde_json::Value;
use tracing::debug;

use crate::coerce::coerce_number;
use crate::error::{Fp16Error, Result};
use crate::metrics::ConversionStats;
use crate::quantizer;

pub const SEGMENT_ARITY: usize = 5;
pub const THRESHOLDS_INDEX: usize = 3;

/// Convert a sequence of segments, replacing thresholds with fp16 strings.
pub fn convert_segments(segments: &[Value]) -> Result<Vec<Value>> {
    let mut stats = ConversionStats::default();
    convert_segments_tracked(segments, &mut stats)
}

/// Like [`convert_segments`], accumulating counters into `stats`.
pub fn convert_segments_tracked(
    segments: &[Value],
    stats: &mut ConversionStats,
) -> Result<Vec<Value>> {
    let mut out = Vec::with_capacity(segments.len());
    for (idx, seg) in segments.iter().enumerate() {
        out.push(convert_segment(seg, idx, stats)?);
    }
    stats.segments += out.len();
    debug!(segments = out.len(), thresholds = stats.thresholds, "segments quantized");
    Ok(out)
}

fn convert_segment(seg: &Value, idx: usize, stats: &mut ConversionStats) -> Result<Value> {
    let fields = seg
        .as_array()
        .ok_or_else(|| Fp16Error::shape(format!("segments[{idx}]"), "expected an array"))?;
    if fields.len() != SEGMENT_ARITY {
        return Err(Fp16Error::shape(
            format!("segments[{idx}]"),
            format!("expected {SEGMENT_ARITY} fields, found {}", fields.len()),
        ));
    }

    let thresholds = fields[THRESHOLDS_INDEX].as_array().ok_or_else(|| {
        Fp16Error::shape(format!("segments[{idx}].thresholds"), "expected an array")
    })?;

    let mut quantized = Vec::with_capacity(thresholds.len());
    for (t_idx, t) in thresholds.iter().enumerate() {
        let x = coerce_number(t, &format!("segments[{idx}].thresholds[{t_idx}]"))?;
        stats.record_value(x);
        quantized.push(Value::String(quantizer::quantize(x)));
    }
    stats.thresholds += quantized.len();

    let mut new_fields = fields.clone();
    new_fields[THRESHOLDS_INDEX] = Value::Array(quantized);
    Ok(Value::Array(new_fields))
}
