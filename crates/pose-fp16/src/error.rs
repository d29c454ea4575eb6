use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Fp16Error {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot coerce {value} to a number at {location}")]
    Coercion { location: String, value: String },

    #[error("Unexpected shape at {location}: {reason}")]
    Shape { location: String, reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl Fp16Error {
    pub fn coercion(location: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Coercion {
            location: location.into(),
            value: value.into(),
        }
    }

    pub fn shape(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Shape {
            location: location.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Fp16Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Fp16Error::coercion("segments[2].thresholds[1]", "\"abc\"");
        assert!(err.to_string().contains("segments[2].thresholds[1]"));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_error_variants() {
        let err = Fp16Error::Read {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.json"));

        let err = Fp16Error::shape("frames[0]", "expected an array");
        assert!(err.to_string().contains("expected an array"));

        let err = Fp16Error::invalid_config("bad value");
        assert!(err.to_string().contains("bad value"));
    }
}
