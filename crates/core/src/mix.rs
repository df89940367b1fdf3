//! Integer mixing used by both name hashing and seed derivation.

/// Golden-ratio constant XORed into the base seed before mixing.
pub const SEED_SALT: u32 = 0x9E37_79B9;

/// Constant added to the index/digest before mixing.
pub const INDEX_SALT: u32 = 0x85EB_CA6B;

const C1: u32 = 0xCC9E_2D51;
const C2: u32 = 0x1B87_3593;

/// Hash a slice of 32-bit words into one word.
///
/// This is the MurmurHash3 x86_32 block loop and finalizer applied to the
/// words directly (seed 0), so it matches Murmur3 over the little-endian bytes
/// of `words`.
pub fn hash_words(words: &[u32]) -> u32 {
    let mut h = 0u32;
    for &word in words {
        let k = word.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2);
        h ^= k;
        h = h.rotate_left(13).wrapping_mul(5).wrapping_add(0xE654_6B64);
    }
    h ^= (words.len() as u32).wrapping_mul(4);
    fmix32(h)
}

#[inline]
fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^ (h >> 16)
}

/// Combine a base seed and an index into a non-zero seed.
///
/// Both inputs are salted first so that neighbouring bases or indices do not
/// produce correlated outputs. A zero result is returned as 1.
pub fn mix_seed(base: u32, index: u32) -> u32 {
    let mixed = hash_words(&[base ^ SEED_SALT, index.wrapping_add(INDEX_SALT)]);
    if mixed == 0 {
        1
    } else {
        mixed
    }
}
