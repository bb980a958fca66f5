//! Portable implementations.
//!
//! Both loops visit only the set bits of the mask, isolating the lowest one on
//! each iteration, so they run in `popcount(mask)` steps.

/// Gathers the bits of `source` selected by `mask` into the low bits of the
/// result.
#[inline]
pub fn extract(source: u64, mut mask: u64) -> u64 {
    let mut result = 0;
    let mut bit = 1u64;

    while mask != 0 {
        let lowest = mask & mask.wrapping_neg();
        if source & lowest != 0 {
            result |= bit;
        }
        mask ^= lowest;
        bit <<= 1;
    }

    result
}

/// Scatters the low bits of `source` to the positions selected by `mask`.
#[inline]
pub fn deposit(mut source: u64, mut mask: u64) -> u64 {
    let mut result = 0;

    while mask != 0 {
        let lowest = mask & mask.wrapping_neg();
        if source & 1 != 0 {
            result |= lowest;
        }
        mask ^= lowest;
        source >>= 1;
    }

    result
}
