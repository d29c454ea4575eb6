//! Check that a document is already in quantized form.
//!
//! A value passes when it is a string that [`quantizer::quantize`] would
//! reproduce exactly from the number it denotes. Structural problems are
//! counted as failures rather than raised, so one pass reports everything.

use serde::Serialize;
use serde_json::Value;

use crate::document::{FRAMES_KEY, SEGMENTS_KEY};
use crate::frame::COMPONENT_DELIMITER;
use crate::quantizer;
use crate::segment::{SEGMENT_ARITY, THRESHOLDS_INDEX};

/// How many offending locations are kept for display.
pub const MAX_SAMPLES: usize = 8;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VerifyReport {
    pub thresholds_checked: usize,
    pub components_checked: usize,
    pub invalid: usize,
    /// First [`MAX_SAMPLES`] offending locations.
    pub samples: Vec<String>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.invalid == 0
    }

    fn fail(&mut self, location: String) {
        self.invalid += 1;
        if self.samples.len() < MAX_SAMPLES {
            self.samples.push(location);
        }
    }
}

pub fn verify_document(doc: &Value) -> VerifyReport {
    let mut report = VerifyReport::default();
    let Some(map) = doc.as_object() else {
        report.fail("$".to_string());
        return report;
    };

    match map.get(SEGMENTS_KEY) {
        None => {}
        Some(Value::Array(segments)) => verify_segments(segments, &mut report),
        Some(_) => report.fail(SEGMENTS_KEY.to_string()),
    }
    match map.get(FRAMES_KEY) {
        None => {}
        Some(Value::Array(frames)) => verify_frames(frames, &mut report),
        Some(_) => report.fail(FRAMES_KEY.to_string()),
    }
    report
}

fn verify_segments(segments: &[Value], report: &mut VerifyReport) {
    for (idx, seg) in segments.iter().enumerate() {
        let thresholds = seg
            .as_array()
            .filter(|fields| fields.len() == SEGMENT_ARITY)
            .and_then(|fields| fields[THRESHOLDS_INDEX].as_array());
        let Some(thresholds) = thresholds else {
            report.fail(format!("segments[{idx}]"));
            continue;
        };
        for (t_idx, t) in thresholds.iter().enumerate() {
            report.thresholds_checked += 1;
            if !t.as_str().is_some_and(quantizer::is_canonical) {
                report.fail(format!("segments[{idx}].thresholds[{t_idx}]"));
            }
        }
    }
}

fn verify_frames(frames: &[Value], report: &mut VerifyReport) {
    for (f_idx, frame) in frames.iter().enumerate() {
        let Some(landmarks) = frame.as_array() else {
            report.fail(format!("frames[{f_idx}]"));
            continue;
        };
        for (l_idx, landmark) in landmarks.iter().enumerate() {
            let Some(text) = landmark.as_str() else {
                report.fail(format!("frames[{f_idx}][{l_idx}]"));
                continue;
            };
            for (c_idx, component) in text.split(COMPONENT_DELIMITER).enumerate() {
                report.components_checked += 1;
                if !quantizer::is_canonical(component) {
                    report.fail(format!("frames[{f_idx}][{l_idx}]#{c_idx}"));
                }
            }
        }
    }
}
