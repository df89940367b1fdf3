#![warn(missing_docs)]
//! Deterministic seed derivation primitives.
//!
//! A [`MasterSeedStore`] holds one master seed and derives stable, non-zero
//! 32-bit sub-seeds from it, one per string name. The same master seed and
//! name always produce the same sub-seed on every platform and run.

mod hash;
mod mix;
mod parse;
mod runtime;
mod shared;
mod store;

pub use hash::{hash_name, hash_name_opt};
pub use mix::{hash_words, mix_seed, INDEX_SALT, SEED_SALT};
pub use parse::{parse_seed, SeedParseError};
pub use runtime::{ClockSeedSource, FixedSeedSource, RuntimeSeedSource};
pub use shared::SharedSeedStore;
pub use store::{MasterSeedStore, SeedSnapshot};
