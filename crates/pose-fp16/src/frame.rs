/// Frame conversion: quantize every component of every landmark string.
///
/// A landmark is `"x,y,z,visibility"`; each comma-separated component is
/// parsed, quantized, and the pieces are rejoined in order. The component
/// count is taken as-is. A mismatch between landmarks is logged and recorded
/// in the stats but never rejected.

use serde_json::Value;
use tracing::{debug, warn};

use crate::coerce::parse_component;
use crate::error::{Fp16Error, Result};
use crate::metrics::ConversionStats;
use crate::quantizer;

pub const COMPONENT_DELIMITER: &str = ",";

/// Convert a sequence of frames, quantizing every landmark component.
pub fn convert_frames(frames: &[Value]) -> Result<Vec<Value>> {
    let mut stats = ConversionStats::default();
    convert_frames_tracked(frames, &mut stats)
}

/// Like [`convert_frames`], accumulating counters into `stats`.
pub fn convert_frames_tracked(frames: &[Value], stats: &mut ConversionStats) -> Result<Vec<Value>> {
    let mut arity: Option<usize> = None;
    let mut out = Vec::with_capacity(frames.len());

    for (f_idx, frame) in frames.iter().enumerate() {
        let landmarks = frame
            .as_array()
            .ok_or_else(|| Fp16Error::shape(format!("frames[{f_idx}]"), "expected an array"))?;

        let mut new_frame = Vec::with_capacity(landmarks.len());
        for (l_idx, landmark) in landmarks.iter().enumerate() {
            let location = format!("frames[{f_idx}][{l_idx}]");
            let text = landmark
                .as_str()
                .ok_or_else(|| Fp16Error::shape(location.as_str(), "expected a landmark string"))?;

            let (converted, count) = convert_landmark_counted(text, &location, stats)?;
            match arity {
                None => arity = Some(count),
                Some(expected) if expected != count && !stats.inconsistent_arity => {
                    warn!(
                        location = %location,
                        expected,
                        found = count,
                        "landmark component count differs from first landmark"
                    );
                    stats.inconsistent_arity = true;
                }
                Some(_) => {}
            }
            new_frame.push(Value::String(converted));
        }

        stats.landmarks += new_frame.len();
        out.push(Value::Array(new_frame));
    }

    stats.frames += out.len();
    debug!(frames = out.len(), landmarks = stats.landmarks, "frames quantized");
    Ok(out)
}

/// Quantize a single `"x,y,z,visibility"` landmark string.
pub fn convert_landmark(text: &str) -> Result<String> {
    let mut stats = ConversionStats::default();
    convert_landmark_counted(text, "landmark", &mut stats).map(|(s, _)| s)
}

fn convert_landmark_counted(
    text: &str,
    location: &str,
    stats: &mut ConversionStats,
) -> Result<(String, usize)> {
    let mut parts = Vec::new();
    for (c_idx, component) in text.split(COMPONENT_DELIMITER).enumerate() {
        let x = parse_component(component, &format!("{location}#{c_idx}"))?;
        stats.record_value(x);
        parts.push(quantizer::quantize(x));
    }
    stats.components += parts.len();

    let count = parts.len();
    Ok((parts.join(COMPONENT_DELIMITER), count))
}
