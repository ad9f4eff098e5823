//! Accepted source keys for each canonical field.
//!
//! Dataset producers spell the same field several ways. Each alias group
//! lists the keys in priority order; the first key present in a raw entry
//! wins and is removed from it.

use serde_json::{Map, Value};

/// Where a canonical field may be read from, highest priority first.
#[derive(Debug, Clone, Copy)]
pub struct AliasGroup {
    pub keys: &'static [&'static str],
}

pub const AUDIO_FILE: AliasGroup = AliasGroup {
    keys: &["audio_filename", "audio_filepath", "audio_file"],
};

/// `text_filepath` names a file whose contents become the text.
pub const TEXT: AliasGroup = AliasGroup {
    keys: &["text", "text_filepath", "normalized_text"],
};

pub const RTTM_FILE: AliasGroup = AliasGroup {
    keys: &["rttm_file", "rttm_filename", "rttm_filepath"],
};

pub const FEATURE_FILE: AliasGroup = AliasGroup {
    keys: &["feature_file", "feature_filename", "feature_filepath"],
};

pub const TEXT_FILEPATH_KEY: &str = "text_filepath";

impl AliasGroup {
    /// Remove and return the first present key of this group.
    ///
    /// A key counts as present even when its value is `null`.
    pub fn take(&self, entry: &mut Map<String, Value>) -> Option<(&'static str, Value)> {
        take_first(entry, self.keys)
    }
}

/// Generic "first present wins" lookup over an ordered key list.
pub fn take_first(
    entry: &mut Map<String, Value>,
    keys: &[&'static str],
) -> Option<(&'static str, Value)> {
    keys.iter()
        .find(|key| entry.contains_key(**key))
        .and_then(|key| entry.remove(*key).map(|value| (*key, value)))
}
