use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "speech-manifest";

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .context("Unable to determine config directory")
}

pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

pub fn cache_dir() -> Result<PathBuf> {
    if let Some(dir) = dirs::cache_dir() {
        return Ok(dir.join(APP_DIR));
    }
    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".cache").join(APP_DIR));
    }
    Err(anyhow!("Unable to determine cache directory"))
}

pub fn datastore_cache_dir() -> Result<PathBuf> {
    Ok(cache_dir()?.join("datastore"))
}

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// `~user` forms and paths without a leading tilde come back unchanged, as
/// does everything when the home directory cannot be determined.
pub fn expand_home(path: &str) -> String {
    let rest = match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return path.to_string(),
    };

    match dirs::home_dir() {
        Some(home) if rest.is_empty() => home.to_string_lossy().into_owned(),
        Some(home) => format!("{}{}", home.to_string_lossy().trim_end_matches('/'), rest),
        None => path.to_string(),
    }
}

pub fn expand_home_path(path: &str) -> PathBuf {
    PathBuf::from(expand_home(path))
}
