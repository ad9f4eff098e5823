use crate::config::Config;
use anyhow::{Context, Result};
use std::path::Path;

pub mod args;
pub mod normalize;

pub use args::{Cli, CliCommand, ConfigCliArgs, ConfigCommand, NormalizeCliArgs, ResolveCliArgs};
pub use normalize::handle_normalize_command;

/// Load the configuration from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

pub fn handle_resolve_command(args: ResolveCliArgs, config: &Config) -> Result<()> {
    let length_limit = args.length_limit.unwrap_or(config.resolver.length_limit);
    let resolver = config.path_resolver().with_length_limit(length_limit);
    println!("{}", resolver.resolve(&args.path, &args.manifest));
    Ok(())
}

pub fn handle_config_command(args: ConfigCliArgs, config: &Config, path: Option<&Path>) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
            print!("{}", content);
        }
        ConfigCommand::Path => {
            let path = match path {
                Some(path) => path.to_path_buf(),
                None => Config::config_path()?,
            };
            println!("{}", path.display());
        }
    }
    Ok(())
}
