#![warn(missing_docs)]
//! Deterministic testing surfaces for seed derivation (sample sets, sinks, snapshots).

mod collisions;
mod samples;
mod snapshot;

use anyhow::{Context, Result};
use seedgen_core::MasterSeedStore;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub use collisions::*;
pub use samples::*;
pub use snapshot::*;

/// One derived seed, as written to JSONL logs and fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationRecord {
    /// Master seed the derivation used.
    pub master_seed: u32,
    /// Name the seed was derived for.
    pub name: String,
    /// Derived seed.
    pub seed: u32,
}

impl DerivationRecord {
    /// Derive `name` from `store` and capture the result.
    pub fn derive<S>(store: &MasterSeedStore<S>, name: &str) -> Self {
        Self {
            master_seed: store.master_seed(),
            name: name.to_string(),
            seed: store.derive(name),
        }
    }
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    writer: BufWriter<File>,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let file =
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Append a record to the log.
    pub fn write(&mut self, record: &DerivationRecord) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    /// Flush buffered records to disk.
    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        tracing::debug!("flushed derivation log");
        Ok(())
    }
}

/// Read records written by a [`JsonlSink`].
pub fn read_jsonl<P: AsRef<Path>>(path: P) -> Result<Vec<DerivationRecord>> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(idx, line)| {
            serde_json::from_str(line)
                .with_context(|| format!("{}: bad record on line {}", path.display(), idx + 1))
        })
        .collect()
}
