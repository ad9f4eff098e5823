use serde_json::{Map, Value};
use tracing::debug;

use crate::manifest::aliases::{self, AliasGroup, TEXT_FILEPATH_KEY};
use crate::manifest::{ManifestError, ManifestRecord, ManifestResult, PathResolver};
use crate::normalizer::RecordNormalizer;

/// Normalizer for the common speech manifest layout.
///
/// Resolves key aliases, reads `text_filepath` contents, and resolves the
/// audio, rttm and feature paths against the manifest location.
#[derive(Clone, Default)]
pub struct DefaultNormalizer {
    resolver: PathResolver,
}

impl DefaultNormalizer {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    fn resolve_optional_path(
        &self,
        group: &AliasGroup,
        entry: &mut Map<String, Value>,
        manifest_location: &str,
    ) -> Option<String> {
        match group.take(entry) {
            Some((_, Value::String(path))) => Some(self.resolver.resolve(&path, manifest_location)),
            _ => None,
        }
    }
}

impl RecordNormalizer for DefaultNormalizer {
    fn normalize(&self, line: &str, manifest_location: &str) -> ManifestResult<ManifestRecord> {
        let value: Value = serde_json::from_str(line).map_err(|source| ManifestError::Parse {
            manifest: manifest_location.to_string(),
            line: line.trim_end().to_string(),
            source,
        })?;
        let mut entry = match value {
            Value::Object(entry) => entry,
            _ => {
                return Err(ManifestError::schema(
                    manifest_location,
                    line,
                    "line is not a json object",
                ))
            }
        };

        let audio_file = match aliases::AUDIO_FILE.take(&mut entry) {
            Some((_, Value::String(path))) => path,
            Some((key, _)) => {
                return Err(ManifestError::schema(
                    manifest_location,
                    line,
                    format!("audio file key `{}` is not a string", key),
                ))
            }
            None => {
                return Err(ManifestError::schema(
                    manifest_location,
                    line,
                    "without proper audio file key",
                ))
            }
        };
        let audio_file = self.resolver.resolve(&audio_file, manifest_location);

        let duration = entry.remove("duration").ok_or_else(|| {
            ManifestError::schema(manifest_location, line, "without proper duration key")
        })?;

        let text = match aliases::TEXT.take(&mut entry) {
            Some((TEXT_FILEPATH_KEY, Value::String(path))) => read_text_file(&path)?,
            Some((TEXT_FILEPATH_KEY, _)) => {
                return Err(ManifestError::schema(
                    manifest_location,
                    line,
                    "text_filepath is not a string",
                ))
            }
            Some((_, value)) => text_from_value(value),
            None => String::new(),
        };

        let rttm_file = self.resolve_optional_path(&aliases::RTTM_FILE, &mut entry, manifest_location);
        let feature_file =
            self.resolve_optional_path(&aliases::FEATURE_FILE, &mut entry, manifest_location);

        Ok(ManifestRecord {
            id: 0,
            audio_file,
            duration,
            text,
            rttm_file,
            feature_file,
            offset: take_optional(&mut entry, "offset"),
            speaker: take_optional(&mut entry, "speaker"),
            orig_sr: take_optional(&mut entry, "orig_sample_rate"),
            token_labels: take_optional(&mut entry, "token_labels"),
            lang: take_optional(&mut entry, "lang"),
            is_valid: take_optional(&mut entry, "is_valid"),
        })
    }

    fn name(&self) -> &'static str {
        "DefaultNormalizer"
    }
}

/// Normalize one line with the default normalizer and object store.
pub fn normalize_default(line: &str, manifest_location: &str) -> ManifestResult<ManifestRecord> {
    DefaultNormalizer::default().normalize(line, manifest_location)
}

fn read_text_file(path: &str) -> ManifestResult<String> {
    debug!("Reading transcript from {}", path);
    let content = std::fs::read_to_string(path).map_err(|e| ManifestError::io(path, e))?;
    Ok(content.chars().filter(|c| !matches!(c, '\n' | '\r')).collect())
}

fn text_from_value(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn take_optional(entry: &mut Map<String, Value>, key: &str) -> Option<Value> {
    entry.remove(key).filter(|value| !value.is_null())
}
