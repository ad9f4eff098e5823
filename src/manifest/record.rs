use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical shape of one manifest line.
///
/// Every field is always serialized; optional values come out as `null`
/// rather than being omitted, so consumers can index them unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestRecord {
    /// Position of the line across all manifests of one read, starting at 0.
    /// Normalizers leave this at 0; the reader assigns it.
    pub id: u64,
    pub audio_file: String,
    /// Seconds, passed through as found in the manifest.
    pub duration: Value,
    pub text: String,
    pub rttm_file: Option<String>,
    pub feature_file: Option<String>,
    pub offset: Option<Value>,
    pub speaker: Option<Value>,
    pub orig_sr: Option<Value>,
    pub token_labels: Option<Value>,
    pub lang: Option<Value>,
    pub is_valid: Option<Value>,
}

impl ManifestRecord {
    pub fn new(audio_file: impl Into<String>, duration: Value) -> Self {
        Self {
            id: 0,
            audio_file: audio_file.into(),
            duration,
            text: String::new(),
            rttm_file: None,
            feature_file: None,
            offset: None,
            speaker: None,
            orig_sr: None,
            token_labels: None,
            lang: None,
            is_valid: None,
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let record = ManifestRecord::new("/data/a.wav", json!(1.5)).with_id(7);
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 12);
        assert_eq!(object["id"], json!(7));
        assert_eq!(object["text"], json!(""));
        for key in [
            "rttm_file",
            "feature_file",
            "offset",
            "speaker",
            "orig_sr",
            "token_labels",
            "lang",
            "is_valid",
        ] {
            assert_eq!(object[key], Value::Null, "{key} should be null");
        }
    }
}
