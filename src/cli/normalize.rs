//! CLI handler for normalizing manifests into canonical JSON lines.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::cli::args::NormalizeCliArgs;
use crate::config::Config;
use crate::manifest::{ManifestReader, PathResolver};
use crate::normalizer::DefaultNormalizer;

/// Handle the normalize CLI command.
pub fn handle_normalize_command(args: NormalizeCliArgs, config: &Config) -> Result<()> {
    let length_limit = args.length_limit.unwrap_or(config.resolver.length_limit);
    let store = config.object_store();
    let resolver = PathResolver::new(Arc::clone(&store)).with_length_limit(length_limit);
    let manifest_count = args.manifests.len();
    let reader = ManifestReader::new(args.manifests, DefaultNormalizer::new(resolver), store);

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create {:?}", path))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    // stdout carries the records, so only show progress when writing to a file
    let pb = if args.output.is_some() && !args.no_progress {
        Some(create_spinner())
    } else {
        None
    };

    let mut count: u64 = 0;
    for record in reader {
        let record = record.context("Failed to normalize manifest")?;
        serde_json::to_writer(&mut out, &record).context("Failed to serialize record")?;
        out.write_all(b"\n").context("Failed to write record")?;
        count += 1;
        if let Some(pb) = &pb {
            pb.set_position(count);
        }
    }
    out.flush().context("Failed to flush output")?;

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    info!(
        "Normalized {} records from {} manifest(s)",
        count, manifest_count
    );
    Ok(())
}

fn create_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.green} {pos} records {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
