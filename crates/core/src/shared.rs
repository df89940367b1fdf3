//! Thread-safe handle around a [`MasterSeedStore`].

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::runtime::{ClockSeedSource, RuntimeSeedSource};
use crate::store::{MasterSeedStore, SeedSnapshot};

/// Cloneable handle sharing one store between threads.
///
/// Derivations take a read lock. Regeneration takes the write lock so the
/// current/previous seed pair is always observed together.
#[derive(Debug)]
pub struct SharedSeedStore<S = ClockSeedSource> {
    inner: Arc<RwLock<MasterSeedStore<S>>>,
}

impl<S> Clone for SharedSeedStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedSeedStore<ClockSeedSource> {
    /// Create a shared store; see [`MasterSeedStore::new`].
    pub fn new(master_seed: u32) -> Self {
        Self::from_store(MasterSeedStore::new(master_seed))
    }
}

impl<S> SharedSeedStore<S> {
    /// Wrap an existing store.
    pub fn from_store(store: MasterSeedStore<S>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// See [`MasterSeedStore::derive`].
    pub fn derive(&self, name: &str) -> u32 {
        self.read().derive(name)
    }

    /// See [`MasterSeedStore::derive_opt`].
    pub fn derive_opt(&self, name: Option<&str>) -> u32 {
        self.read().derive_opt(name)
    }

    /// Current master seed.
    pub fn master_seed(&self) -> u32 {
        self.read().master_seed()
    }

    /// Previous master seed.
    pub fn last_master_seed(&self) -> u32 {
        self.read().last_master_seed()
    }

    /// Capture both seeds under one lock.
    pub fn snapshot(&self) -> SeedSnapshot {
        self.read().snapshot()
    }

    // Both fields are plain integers, so a poisoned lock still holds valid data.
    fn read(&self) -> RwLockReadGuard<'_, MasterSeedStore<S>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, MasterSeedStore<S>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: RuntimeSeedSource> SharedSeedStore<S> {
    /// See [`MasterSeedStore::regenerate`].
    pub fn regenerate(&self, master_seed: u32) {
        self.write().regenerate(master_seed);
    }
}
