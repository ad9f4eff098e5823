//! Resolution of audio and auxiliary file paths found in manifests.
//!
//! Manifests are often shipped with paths relative to the manifest itself
//! (`wavs/x.wav`), while other datasets use absolute or `~`-relative paths.

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::datastore::{DatastoreCache, ObjectStore};
use crate::global::expand_home;

/// Candidates at least this long are never treated as manifest-relative.
pub const DEFAULT_LENGTH_LIMIT: usize = 255;

#[derive(Clone)]
pub struct PathResolver {
    store: Arc<dyn ObjectStore>,
    length_limit: usize,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new(Arc::new(DatastoreCache::default()))
    }
}

impl PathResolver {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            store,
            length_limit: DEFAULT_LENGTH_LIMIT,
        }
    }

    pub fn with_length_limit(mut self, length_limit: usize) -> Self {
        self.length_limit = length_limit;
        self
    }

    pub fn length_limit(&self) -> usize {
        self.length_limit
    }

    pub fn store(&self) -> &Arc<dyn ObjectStore> {
        &self.store
    }

    /// Directory containing `manifest_location`.
    ///
    /// Object-store references are split as strings since they are not
    /// filesystem paths.
    pub fn manifest_dir(&self, manifest_location: &str) -> String {
        if self.store.is_remote(manifest_location) {
            return string_dirname(manifest_location);
        }

        let manifest = expand_home(manifest_location);
        match Path::new(&manifest).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().into_owned(),
            _ => ".".to_string(),
        }
    }

    /// Resolve `candidate` against the directory of `manifest_location`.
    ///
    /// Short, non-absolute candidates that do not exist as given are joined
    /// onto the manifest directory; the joined path is used only if a file
    /// exists there. Every other outcome is `candidate` with `~` expanded.
    pub fn resolve(&self, candidate: &str, manifest_location: &str) -> String {
        let candidate_path = Path::new(candidate);
        let relative = candidate.chars().count() < self.length_limit
            && !candidate_path.is_file()
            && !candidate_path.is_absolute();

        if !relative {
            return expand_home(candidate);
        }

        let mut joined = join(&self.manifest_dir(manifest_location), candidate);
        if self.store.is_remote(&joined) {
            let cached = self.store.local_path(&joined);
            debug!("Using cached path {:?} for {}", cached, joined);
            joined = cached.to_string_lossy().into_owned();
        }

        let joined = Path::new(&joined);
        if joined.is_file() {
            std::path::absolute(joined)
                .unwrap_or_else(|_| joined.to_path_buf())
                .to_string_lossy()
                .into_owned()
        } else {
            expand_home(candidate)
        }
    }
}

/// Resolve `candidate` with the default object store.
pub fn resolve(candidate: &str, manifest_location: &str, length_limit: usize) -> String {
    PathResolver::default()
        .with_length_limit(length_limit)
        .resolve(candidate, manifest_location)
}

fn string_dirname(location: &str) -> String {
    let head = match location.rfind('/') {
        Some(idx) => &location[..=idx],
        None => return String::new(),
    };
    if head.chars().all(|c| c == '/') {
        head.to_string()
    } else {
        head.trim_end_matches('/').to_string()
    }
}

fn join(dir: &str, candidate: &str) -> String {
    if dir.is_empty() || dir.ends_with('/') {
        format!("{}{}", dir, candidate)
    } else {
        format!("{}/{}", dir, candidate)
    }
}
