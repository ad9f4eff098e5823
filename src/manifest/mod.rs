//! Manifest ingestion: canonical records, path resolution and lazy reading.
//!
//! A manifest is a line-delimited JSON file with one sample per line. Lines
//! are normalized into [`ManifestRecord`]s by a
//! [`RecordNormalizer`](crate::normalizer::RecordNormalizer).

pub mod aliases;
mod error;
mod reader;
mod record;
mod resolver;

pub use error::{ManifestError, ManifestResult};
pub use reader::{read, read_with, ManifestLocations, ManifestReader};
pub use record::ManifestRecord;
pub use resolver::{resolve, PathResolver, DEFAULT_LENGTH_LIMIT};
