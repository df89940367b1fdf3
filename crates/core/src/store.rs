//! Master seed ownership and named seed derivation.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::hash::hash_name;
use crate::mix::mix_seed;
use crate::runtime::{ClockSeedSource, RuntimeSeedSource};

/// Serializable view of a store's master seed history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSnapshot {
    /// Current master seed.
    pub master_seed: u32,
    /// Master seed before the most recent regeneration.
    pub last_master_seed: u32,
}

/// Owns a master seed and derives named sub-seeds from it.
///
/// The master seed is never zero: passing 0 to [`MasterSeedStore::new`] or
/// [`MasterSeedStore::regenerate`] draws a fresh value from the store's
/// [`RuntimeSeedSource`] instead.
#[derive(Debug)]
pub struct MasterSeedStore<S = ClockSeedSource> {
    master_seed: u32,
    last_master_seed: u32,
    source: S,
}

impl MasterSeedStore<ClockSeedSource> {
    /// Create a store using `master_seed`, or a clock-derived seed when it is 0.
    pub fn new(master_seed: u32) -> Self {
        Self::with_source(master_seed, ClockSeedSource::new())
    }

    /// Restore a store from a snapshot.
    pub fn from_snapshot(snapshot: SeedSnapshot) -> Self {
        Self::from_snapshot_with_source(snapshot, ClockSeedSource::new())
    }
}

impl Default for MasterSeedStore<ClockSeedSource> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<S: RuntimeSeedSource> MasterSeedStore<S> {
    /// Create a store that falls back to `source` when `master_seed` is 0.
    pub fn with_source(master_seed: u32, source: S) -> Self {
        let master_seed = resolve(master_seed, &source);
        Self {
            master_seed,
            last_master_seed: master_seed,
            source,
        }
    }

    /// Restore a store from a snapshot, falling back to `source` if the
    /// snapshot's master seed is 0. The previous seed is kept verbatim.
    pub fn from_snapshot_with_source(snapshot: SeedSnapshot, source: S) -> Self {
        Self {
            master_seed: resolve(snapshot.master_seed, &source),
            last_master_seed: snapshot.last_master_seed,
            source,
        }
    }

    /// Replace the master seed, remembering the current one as the previous seed.
    pub fn regenerate(&mut self, master_seed: u32) {
        self.last_master_seed = self.master_seed;
        self.master_seed = resolve(master_seed, &self.source);
        info!(
            master_seed = self.master_seed,
            "Generated new master seed: {}", self.master_seed
        );
    }

    /// Runtime seed source backing this store.
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S> MasterSeedStore<S> {
    /// Derive the non-zero seed for `name` from the current master seed.
    pub fn derive(&self, name: &str) -> u32 {
        let seed = mix_seed(self.master_seed, hash_name(name));
        debug!(%name, seed, "derived seed");
        seed
    }

    /// Derive a seed for an optional name; `None` behaves like `""`.
    pub fn derive_opt(&self, name: Option<&str>) -> u32 {
        self.derive(name.unwrap_or_default())
    }

    /// Current master seed.
    pub fn master_seed(&self) -> u32 {
        self.master_seed
    }

    /// Master seed in effect before the last [`regenerate`](Self::regenerate).
    pub fn last_master_seed(&self) -> u32 {
        self.last_master_seed
    }

    /// Capture the master seed history.
    pub fn snapshot(&self) -> SeedSnapshot {
        SeedSnapshot {
            master_seed: self.master_seed,
            last_master_seed: self.last_master_seed,
        }
    }
}

fn resolve<S: RuntimeSeedSource + ?Sized>(master_seed: u32, source: &S) -> u32 {
    if master_seed != 0 {
        master_seed
    } else {
        source.runtime_seed()
    }
}
