use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "speech-manifest")]
#[command(about = "Normalize speech dataset manifests", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Normalize manifests into canonical JSON lines
    Normalize(NormalizeCliArgs),
    /// Resolve a single path against a manifest location
    Resolve(ResolveCliArgs),
    /// Inspect the configuration
    Config(ConfigCliArgs),
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct NormalizeCliArgs {
    /// Manifest files or object-store references, read in order
    #[arg(required = true)]
    pub manifests: Vec<String>,
    /// Write records to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Override the configured path length limit
    #[arg(long)]
    pub length_limit: Option<usize>,
    /// Disable the progress spinner
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(ClapArgs, Debug)]
pub struct ResolveCliArgs {
    /// Path as written in the manifest
    pub path: String,
    /// Manifest the path was read from
    #[arg(short, long)]
    pub manifest: String,
    /// Override the configured path length limit
    #[arg(long)]
    pub length_limit: Option<usize>,
}

#[derive(ClapArgs, Debug)]
pub struct ConfigCliArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the configuration file location
    Path,
}
