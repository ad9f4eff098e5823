use anyhow::Result;
use clap::Parser;
use speech_manifest::cli::{
    handle_config_command, handle_normalize_command, handle_resolve_command, load_config, Cli,
    CliCommand,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    // stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let CliCommand::Version = cli.command {
        println!("speech-manifest {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config_path = cli.config.as_deref();
    let config = load_config(config_path)?;

    match cli.command {
        CliCommand::Normalize(args) => handle_normalize_command(args, &config),
        CliCommand::Resolve(args) => handle_resolve_command(args, &config),
        CliCommand::Config(args) => handle_config_command(args, &config, config_path),
        CliCommand::Version => Ok(()),
    }
}
