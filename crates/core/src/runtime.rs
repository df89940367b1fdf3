//! Non-deterministic seed sources used when no master seed is supplied.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::debug;

/// Produces a master seed when the caller did not supply one.
///
/// Implementations only promise a non-zero value; the output is not
/// expected to be reproducible.
pub trait RuntimeSeedSource {
    /// Return a non-zero seed.
    fn runtime_seed(&self) -> u32;
}

/// Process-wide anchor shared by every clock source.
fn process_start() -> Instant {
    static START: OnceLock<Instant> = OnceLock::new();
    *START.get_or_init(Instant::now)
}

/// Seed source mixing process uptime, a host frame counter and the wall clock.
///
/// Uptime is measured from the first clock source created in the process,
/// not from this instance.
#[derive(Debug)]
pub struct ClockSeedSource {
    frames: AtomicU64,
}

impl ClockSeedSource {
    /// Create a source with its frame counter at zero.
    pub fn new() -> Self {
        process_start();
        Self {
            frames: AtomicU64::new(0),
        }
    }

    /// Time elapsed since the process-wide anchor.
    pub fn uptime(&self) -> Duration {
        process_start().elapsed()
    }

    /// Advance the frame counter. Hosts with a main loop call this once per frame.
    pub fn advance_frame(&self) {
        self.frames.fetch_add(1, Ordering::Relaxed);
    }

    /// Frames counted so far.
    pub fn frame_count(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }
}

impl Default for ClockSeedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeSeedSource for ClockSeedSource {
    fn runtime_seed(&self) -> u32 {
        let uptime_ns = self.uptime().as_nanos() as u64;
        let frames = self.frame_count();
        // 100 ns ticks since the Unix epoch.
        let wall_ticks = Utc::now()
            .timestamp_nanos_opt()
            .map(|nanos| (nanos / 100) as u64)
            .unwrap_or_else(|| Utc::now().timestamp_micros() as u64);

        let seed = non_zero((uptime_ns ^ frames ^ wall_ticks) as u32);
        debug!(seed, frames, "generated runtime seed");
        seed
    }
}

/// Seed source that always returns the same value.
///
/// Useful for replays and tests where "runtime" seeds must be reproducible.
/// A zero value is reported as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeedSource(pub u32);

impl RuntimeSeedSource for FixedSeedSource {
    fn runtime_seed(&self) -> u32 {
        non_zero(self.0)
    }
}

impl<S: RuntimeSeedSource + ?Sized> RuntimeSeedSource for &S {
    fn runtime_seed(&self) -> u32 {
        (**self).runtime_seed()
    }
}

fn non_zero(seed: u32) -> u32 {
    if seed == 0 {
        1
    } else {
        seed
    }
}
