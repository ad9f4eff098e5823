//! Errors raised while reading and normalizing manifests.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type ManifestResult<T> = Result<T, ManifestError>;

/// Failures that abort a manifest read.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest file {manifest} has an invalid json line: {line}")]
    Parse {
        manifest: String,
        line: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("manifest file {manifest} has invalid json line structure: {line} ({reason})")]
    Schema {
        manifest: String,
        line: String,
        reason: String,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to fetch {location}: {reason}")]
    Fetch { location: String, reason: String },
}

impl ManifestError {
    pub fn schema(manifest: &str, line: &str, reason: impl Into<String>) -> Self {
        Self::Schema {
            manifest: manifest.to_string(),
            line: line.trim_end().to_string(),
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn fetch(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Fetch {
            location: location.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_message_names_manifest_and_line() {
        let err = ManifestError::schema(
            "/data/train.json",
            "{\"duration\": 1.0}\n",
            "missing audio file key",
        );
        let message = err.to_string();

        assert!(message.contains("/data/train.json"));
        assert!(message.contains("{\"duration\": 1.0}"));
        assert!(message.contains("missing audio file key"));
    }
}
