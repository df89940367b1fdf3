//! Fixed sample sets for sensitivity tests.

/// Names commonly handed to the deriver by game subsystems.
pub const SUBSYSTEM_NAMES: &[&str] = &[
    "player",
    "enemy-spawner",
    "terrain",
    "terrain-chunk-12",
    "loot",
    "weather",
    "dungeon",
    "village",
    "ambient-audio",
    "particles",
];

/// `count` distinct names: the subsystem names followed by `name-N` entries.
pub fn sample_names(count: usize) -> Vec<String> {
    SUBSYSTEM_NAMES
        .iter()
        .map(|name| name.to_string())
        .chain((0..).map(|i| format!("name-{i}")))
        .take(count)
        .collect()
}

/// `count` distinct, non-zero master seeds spread over the `u32` range.
///
/// Multiplying by an odd constant is a bijection on `u32`, so the seeds are
/// distinct for any `count` below 2^32.
pub fn sample_master_seeds(count: usize) -> Vec<u32> {
    (1..=count as u32)
        .map(|i| i.wrapping_mul(2_654_435_761))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sample_names_are_distinct_and_non_empty() {
        let names = sample_names(500);
        assert_eq!(names.len(), 500);
        assert_eq!(names[0], "player");
        assert_eq!(names[SUBSYSTEM_NAMES.len()], "name-0");
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        assert!(names.iter().all(|n| !n.is_empty()));
    }

    #[test]
    fn sample_seeds_are_distinct_and_non_zero() {
        let seeds = sample_master_seeds(1000);
        let unique: HashSet<_> = seeds.iter().collect();
        assert_eq!(unique.len(), 1000);
        assert!(seeds.iter().all(|&s| s != 0));
    }
}
