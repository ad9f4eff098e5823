//! Normalization of speech dataset manifests.
//!
//! Reads line-delimited JSON manifests whose entries spell the same fields
//! in different ways and yields one canonical [`ManifestRecord`] per line,
//! with audio and auxiliary paths resolved against the manifest location.

pub mod cli;
pub mod config;
pub mod datastore;
pub mod global;
pub mod manifest;
pub mod normalizer;

pub use config::Config;
pub use datastore::{DatastoreCache, ObjectStore};
pub use manifest::{
    read, read_with, resolve, ManifestError, ManifestLocations, ManifestReader, ManifestRecord,
    ManifestResult, PathResolver,
};
pub use normalizer::{normalize_default, DefaultNormalizer, RecordNormalizer};
