//! seedgen - derive reproducible per-subsystem seeds from one master seed
//!
//! Prints one `name<TAB>seed` line per requested name.

mod config;

use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use config::{SeedgenConfig, DEFAULT_CONFIG_PATH};
use seedgen_core::{parse_seed, MasterSeedStore};
use seedgen_testkit::{DerivationRecord, JsonlSink};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Deterministic named seed derivation", long_about = None)]
struct Args {
    /// Master seed (decimal or 0x hex); 0 or omitted uses the config value, then a runtime seed
    #[arg(short, long, value_parser = parse_seed)]
    master_seed: Option<u32>,

    /// Path to the TOML config file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Also write derivations as JSON lines to this path
    #[arg(long)]
    jsonl: Option<PathBuf>,

    /// Write the effective master seed and names back to the config file
    #[arg(long)]
    save_config: bool,

    /// Names to derive seeds for; defaults to `names` from the config file
    names: Vec<String>,
}

fn main() -> Result<()> {
    // Start at WARN so config loading can log; the config may relax the filter afterwards.
    let (filter, filter_handle) = reload::Layer::new(EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let config = SeedgenConfig::load_from_path(&args.config);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;
    filter_handle
        .reload(env_filter)
        .context("failed to apply log filter")?;

    info!("Starting seedgen v{}", env!("CARGO_PKG_VERSION"));

    let names = if args.names.is_empty() {
        config.names.clone()
    } else {
        args.names.clone()
    };
    if names.is_empty() {
        bail!(
            "no names to derive: pass NAME arguments or set `names` in {}",
            args.config.display()
        );
    }

    let requested = match args.master_seed {
        Some(seed) if seed != 0 => seed,
        _ => config.master_seed,
    };
    let store = MasterSeedStore::new(requested);
    if requested == 0 {
        info!(master_seed = store.master_seed(), "using runtime master seed");
    }

    let records: Vec<DerivationRecord> = names
        .iter()
        .map(|name| DerivationRecord::derive(&store, name))
        .collect();

    write_table(&mut io::stdout().lock(), store.master_seed(), &records)?;

    if let Some(path) = &args.jsonl {
        let mut sink = JsonlSink::create(path)?;
        for record in &records {
            sink.write(record)?;
        }
        sink.finish()?;
        info!(path = %path.display(), records = records.len(), "wrote derivation log");
    }

    if args.save_config {
        let saved = SeedgenConfig {
            master_seed: store.master_seed(),
            names,
            log_filter: config.log_filter,
        };
        saved
            .save_to_path(&args.config)
            .with_context(|| format!("failed to save {}", args.config.display()))?;
        info!(path = %args.config.display(), "saved config");
    }

    Ok(())
}

fn write_table<W: Write>(
    out: &mut W,
    master_seed: u32,
    records: &[DerivationRecord],
) -> Result<()> {
    writeln!(out, "# master_seed={master_seed}")?;
    for record in records {
        writeln!(out, "{}\t{}", record.name, record.seed)?;
    }
    out.flush()?;
    Ok(())
}
