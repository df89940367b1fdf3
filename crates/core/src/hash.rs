//! Stable name hashing.

use crate::mix::hash_words;

/// Digest of the empty (or absent) name.
const EMPTY_NAME_DIGEST: u32 = 0;

/// Map a name to a stable 32-bit digest.
///
/// The empty string maps to 0. Any other name is hashed with unkeyed BLAKE3;
/// the first 128 bits of the digest are split into four little-endian words
/// and folded with [`hash_words`]. The result depends only on the UTF-8 bytes
/// of `name`.
pub fn hash_name(name: &str) -> u32 {
    if name.is_empty() {
        return EMPTY_NAME_DIGEST;
    }

    let digest = blake3::hash(name.as_bytes());
    let bytes = digest.as_bytes();
    let mut words = [0u32; 4];
    for (word, chunk) in words.iter_mut().zip(bytes[..16].chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    hash_words(&words)
}

/// Same as [`hash_name`], treating `None` as the empty name.
pub fn hash_name_opt(name: Option<&str>) -> u32 {
    hash_name(name.unwrap_or_default())
}
