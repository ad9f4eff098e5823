use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};
use which::which;

use crate::config::DatastoreConfig;
use crate::datastore::ObjectStore;
use crate::global;
use crate::manifest::{ManifestError, ManifestResult};

pub const DEFAULT_SCHEMES: &[&str] = &["ais"];
pub const DEFAULT_FETCH_COMMAND: &str = "ais";

/// Object store backed by a local cache directory.
///
/// `scheme://bucket/key` is cached at `<cache_dir>/<scheme>/bucket/key`.
/// Missing objects are downloaded by running
/// `<fetch_command> object get <reference> <cache path>`.
#[derive(Debug, Clone)]
pub struct DatastoreCache {
    cache_dir: PathBuf,
    schemes: Vec<String>,
    fetch_command: Option<String>,
}

impl Default for DatastoreCache {
    fn default() -> Self {
        let cache_dir = global::datastore_cache_dir()
            .unwrap_or_else(|_| std::env::temp_dir().join("speech-manifest").join("datastore"));
        Self::new(cache_dir)
    }
}

impl DatastoreCache {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            schemes: DEFAULT_SCHEMES.iter().map(|s| s.to_string()).collect(),
            fetch_command: Some(DEFAULT_FETCH_COMMAND.to_string()),
        }
    }

    pub fn from_config(config: &DatastoreConfig) -> Self {
        let mut cache = match config.cache_dir.as_deref() {
            Some(dir) => Self::new(global::expand_home_path(dir)),
            None => Self::default(),
        };
        cache.schemes = config.schemes.clone();
        cache.fetch_command = Some(config.fetch_command.trim().to_string()).filter(|c| !c.is_empty());
        cache
    }

    pub fn with_schemes<I, S>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schemes = schemes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fetch_command(mut self, command: Option<String>) -> Self {
        self.fetch_command = command;
        self
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn split_reference<'a>(&self, location: &'a str) -> Option<(&'a str, &'a str)> {
        let (scheme, rest) = location.split_once("://")?;
        self.schemes
            .iter()
            .any(|s| s.eq_ignore_ascii_case(scheme))
            .then_some((scheme, rest))
    }

    fn cache_key(rest: &str) -> (PathBuf, bool) {
        let mut parts: Vec<&str> = Vec::new();
        let mut escaped = false;
        for part in rest.split('/') {
            match part {
                "" | "." => {}
                ".." => escaped |= parts.pop().is_none(),
                part => parts.push(part),
            }
        }
        (parts.into_iter().collect(), escaped)
    }

    fn download(&self, location: &str, destination: &Path) -> ManifestResult<()> {
        let command = self.fetch_command.as_deref().ok_or_else(|| {
            ManifestError::fetch(location, "object is not cached and no fetch command is configured")
        })?;
        let program = which(command).map_err(|_| {
            ManifestError::fetch(location, format!("`{}` not found on PATH", command))
        })?;

        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ManifestError::io(parent, e))?;
        }

        info!("Fetching {} into {:?}", location, destination);
        let output = Command::new(program)
            .args(["object", "get", location])
            .arg(destination)
            .output()
            .map_err(|e| ManifestError::fetch(location, format!("failed to run `{}`: {}", command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ManifestError::fetch(
                location,
                format!("`{}` exited with {}: {}", command, output.status, stderr.trim()),
            ));
        }

        if !destination.is_file() {
            return Err(ManifestError::fetch(
                location,
                format!("`{}` did not produce {:?}", command, destination),
            ));
        }

        Ok(())
    }
}

impl ObjectStore for DatastoreCache {
    fn is_remote(&self, location: &str) -> bool {
        self.split_reference(location).is_some()
    }

    fn local_path(&self, location: &str) -> PathBuf {
        match self.split_reference(location) {
            // `..` is applied lexically; steps above the scheme root are dropped
            Some((scheme, rest)) => self
                .cache_dir
                .join(scheme.to_ascii_lowercase())
                .join(Self::cache_key(rest).0),
            None => global::expand_home_path(location),
        }
    }

    fn fetch(&self, location: &str) -> ManifestResult<PathBuf> {
        let rest = match self.split_reference(location) {
            Some((_, rest)) => rest,
            None => return Ok(global::expand_home_path(location)),
        };
        if Self::cache_key(rest).1 {
            return Err(ManifestError::fetch(
                location,
                "reference escapes the cache directory",
            ));
        }

        let local = self.local_path(location);
        if local.is_file() {
            debug!("Using cached copy of {} at {:?}", location, local);
            return Ok(local);
        }

        self.download(location, &local)?;
        Ok(local)
    }
}
