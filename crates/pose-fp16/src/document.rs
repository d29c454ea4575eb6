//! Keypoint document model: load, convert in memory, and save.
//!
//! The document is kept as a [`serde_json::Value`] object so that keys other
//! than `segments` and `frames` round-trip untouched and in their original
//! order.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde_json::{Map, Value};
use tracing::info;

use crate::error::{Fp16Error, Result};
use crate::frame;
use crate::metrics::ConversionStats;
use crate::segment;

pub const SEGMENTS_KEY: &str = "segments";
pub const FRAMES_KEY: &str = "frames";

/// Read and parse a keypoint document.
pub fn load_document(path: &Path) -> Result<Value> {
    let file = File::open(path).map_err(|source| Fp16Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| Fp16Error::Json {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), "loaded keypoint document");
    Ok(doc)
}

/// Write `doc` as JSON indented by two spaces, replacing any existing file.
pub fn save_document(path: &Path, doc: &Value) -> Result<()> {
    let write_err = |source| Fp16Error::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    // Serializing a `Value` only fails on the underlying writer.
    serde_json::to_writer_pretty(&mut writer, doc)
        .map_err(|e| write_err(std::io::Error::from(e)))?;
    writer.flush().map_err(write_err)?;
    info!(path = %path.display(), "wrote quantized document");
    Ok(())
}

/// Quantize `segments` and `frames` of a parsed document.
///
/// Missing keys become empty arrays. The document must be a JSON object.
pub fn convert_document(mut doc: Value) -> Result<(Value, ConversionStats)> {
    let map = doc
        .as_object_mut()
        .ok_or_else(|| Fp16Error::shape("$", "top-level value must be an object"))?;

    let mut stats = ConversionStats::default();

    let segments = take_sequence(map, SEGMENTS_KEY)?;
    let segments = segment::convert_segments_tracked(&segments, &mut stats)?;
    map.insert(SEGMENTS_KEY.to_string(), Value::Array(segments));

    let frames = take_sequence(map, FRAMES_KEY)?;
    let frames = frame::convert_frames_tracked(&frames, &mut stats)?;
    map.insert(FRAMES_KEY.to_string(), Value::Array(frames));

    Ok((doc, stats))
}

// Takes the array out in place; `Map::remove` would reorder keys.
fn take_sequence(map: &mut Map<String, Value>, key: &str) -> Result<Vec<Value>> {
    match map.get_mut(key) {
        None => Ok(Vec::new()),
        Some(Value::Array(items)) => Ok(std::mem::take(items)),
        Some(_) => Err(Fp16Error::shape(key, "expected an array")),
    }
}
