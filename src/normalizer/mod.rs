mod default_normalizer;
mod record_normalizer;

pub use default_normalizer::{normalize_default, DefaultNormalizer};
pub use record_normalizer::RecordNormalizer;
