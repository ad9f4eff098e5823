use crate::manifest::{ManifestRecord, ManifestResult};

/// Turns one raw manifest line into a canonical record.
///
/// `manifest_location` is the location the caller asked to read, which may
/// be an object-store reference rather than the cached local copy.
/// Implementations leave `id` at 0; the reader assigns it.
pub trait RecordNormalizer: Send + Sync {
    fn normalize(&self, line: &str, manifest_location: &str) -> ManifestResult<ManifestRecord>;

    /// Get the name of this normalizer for logging
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<F> RecordNormalizer for F
where
    F: Fn(&str, &str) -> ManifestResult<ManifestRecord> + Send + Sync,
{
    fn normalize(&self, line: &str, manifest_location: &str) -> ManifestResult<ManifestRecord> {
        self(line, manifest_location)
    }
}
