//! Lazy iteration over the lines of one or more manifests.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::Arc;
use std::vec;

use tracing::debug;

use crate::datastore::{DatastoreCache, ObjectStore};
use crate::manifest::{ManifestError, ManifestRecord, ManifestResult};
use crate::normalizer::{DefaultNormalizer, RecordNormalizer};

/// Ordered manifest locations for one read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestLocations(pub Vec<String>);

impl From<&str> for ManifestLocations {
    fn from(location: &str) -> Self {
        Self(vec![location.to_string()])
    }
}

impl From<String> for ManifestLocations {
    fn from(location: String) -> Self {
        Self(vec![location])
    }
}

impl From<Vec<String>> for ManifestLocations {
    fn from(locations: Vec<String>) -> Self {
        Self(locations)
    }
}

impl From<Vec<&str>> for ManifestLocations {
    fn from(locations: Vec<&str>) -> Self {
        Self(locations.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for ManifestLocations {
    fn from(locations: &[&str]) -> Self {
        Self(locations.iter().map(|l| l.to_string()).collect())
    }
}

impl From<&[String]> for ManifestLocations {
    fn from(locations: &[String]) -> Self {
        Self(locations.to_vec())
    }
}

struct OpenManifest {
    location: String,
    reader: BufReader<File>,
}

impl OpenManifest {
    /// Next line without its `\n`. A `\r` before it is left in place.
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
        }
        Ok(Some(line))
    }
}

/// Single-pass iterator of canonical records.
///
/// Manifests are opened one at a time in the order given and closed before
/// the next one is opened. Ids count lines across all manifests starting
/// at 0. The first error is yielded once and ends the iteration; the open
/// manifest is closed at that point.
pub struct ManifestReader<N = DefaultNormalizer> {
    pending: vec::IntoIter<String>,
    current: Option<OpenManifest>,
    normalizer: N,
    store: Arc<dyn ObjectStore>,
    next_id: u64,
    finished: bool,
}

impl<N: RecordNormalizer> ManifestReader<N> {
    pub fn new(
        locations: impl Into<ManifestLocations>,
        normalizer: N,
        store: Arc<dyn ObjectStore>,
    ) -> Self {
        let ManifestLocations(locations) = locations.into();
        debug!("Manifest files: {:?}", locations);
        debug!("Normalizing with {}", normalizer.name());
        Self {
            pending: locations.into_iter(),
            current: None,
            normalizer,
            store,
            next_id: 0,
            finished: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> u64 {
        self.next_id
    }

    fn open(&self, location: String) -> ManifestResult<OpenManifest> {
        debug!("Using manifest file: {}", location);
        let local = self.store.fetch(&location)?;
        debug!("Cached at: {:?}", local);

        let file = File::open(&local).map_err(|e| ManifestError::io(&local, e))?;
        Ok(OpenManifest {
            location,
            reader: BufReader::new(file),
        })
    }

    fn next_record(&mut self) -> Option<ManifestResult<ManifestRecord>> {
        loop {
            if self.current.is_none() {
                let location = self.pending.next()?;
                match self.open(location) {
                    Ok(manifest) => self.current = Some(manifest),
                    Err(e) => return Some(Err(e)),
                }
            }

            let manifest = self.current.as_mut()?;
            let line = match manifest.next_line() {
                Ok(Some(line)) => line,
                Err(e) => {
                    return Some(Err(ManifestError::io(
                        self.store.local_path(&manifest.location),
                        e,
                    )))
                }
                Ok(None) => {
                    self.current = None;
                    continue;
                }
            };

            let id = self.next_id;
            self.next_id += 1;
            let result = self
                .normalizer
                .normalize(&line, &manifest.location)
                .map(|record| record.with_id(id));
            return Some(result);
        }
    }
}

impl<N: RecordNormalizer> Iterator for ManifestReader<N> {
    type Item = ManifestResult<ManifestRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let item = self.next_record();
        match item {
            Some(Ok(_)) => {}
            Some(Err(_)) | None => {
                self.finished = true;
                self.current = None;
            }
        }
        item
    }
}

impl<N: RecordNormalizer> std::iter::FusedIterator for ManifestReader<N> {}

/// Read manifests with the default normalizer and object store.
pub fn read(locations: impl Into<ManifestLocations>) -> ManifestReader<DefaultNormalizer> {
    let normalizer = DefaultNormalizer::default();
    let store = Arc::clone(normalizer.resolver().store());
    ManifestReader::new(locations, normalizer, store)
}

/// Read manifests with a caller-supplied normalizer and the default object store.
pub fn read_with<N: RecordNormalizer>(
    locations: impl Into<ManifestLocations>,
    normalizer: N,
) -> ManifestReader<N> {
    let store: Arc<dyn ObjectStore> = Arc::new(DatastoreCache::default());
    ManifestReader::new(locations, normalizer, store)
}
