//! Half-Precision Quantization of Pose Keypoint Documents
//!
//! Rewrites a keypoint JSON document so that every segment threshold and
//! every landmark component is replaced by the fixed eight-place decimal
//! string of its nearest IEEE-754 binary16 value.
//!
//! # Architecture
//!
//! ```text
//! input.json → load → segments → quantizer → frames → quantizer → save → output.json
//! ```
//!
//! # Document Shape
//!
//! | Key        | Input                                  | Output                          |
//! |------------|----------------------------------------|---------------------------------|
//! | `segments` | `[start, end, phase, [0.5, ...], facing]` | thresholds become `"0.50000000"` |
//! | `frames`   | `["x,y,z,visibility", ...]`            | `"1.00000000,...,0.89990234"`   |
//! | other keys | any                                    | unchanged, same position        |
//!
//! # Example
//!
//! ```
//! assert_eq!(pose_fp16::quantize(0.1), "0.09997559");
//! ```

pub mod binary16;
pub mod coerce;
pub mod config;
pub mod document;
pub mod error;
pub mod frame;
pub mod metrics;
pub mod pipeline;
pub mod quantizer;
pub mod segment;
pub mod verify;

pub use config::PipelineConfig;
pub use document::{convert_document, load_document, save_document};
pub use error::{Fp16Error, Result};
pub use frame::{convert_frames, convert_landmark};
pub use metrics::ConversionStats;
pub use pipeline::{run, ConversionReport};
pub use quantizer::quantize;
pub use segment::convert_segments;
pub use verify::{verify_document, VerifyReport};
