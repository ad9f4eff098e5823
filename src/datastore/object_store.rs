//! Object-store abstraction used while resolving manifest locations.

use std::path::PathBuf;

use crate::manifest::ManifestResult;

/// Access to remote object-store references such as `ais://bucket/key`.
///
/// Implementations decide which locations are remote, where their local
/// copies live, and how to bring a copy into the local cache.
pub trait ObjectStore: Send + Sync {
    /// Whether `location` names an object in a remote store.
    fn is_remote(&self, location: &str) -> bool;

    /// Local cache path for a remote reference. Performs no I/O.
    fn local_path(&self, location: &str) -> PathBuf;

    /// Make `location` available locally and return the local path.
    ///
    /// Must be idempotent. Local locations are returned with `~` expanded.
    fn fetch(&self, location: &str) -> ManifestResult<PathBuf>;
}
