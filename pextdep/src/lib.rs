//! Parallel bit extract and deposit on `u64`.
//!
//! Uses the BMI2 `pext`/`pdep` instructions when the processor has them and a
//! portable implementation with identical results otherwise. Support is
//! detected once, on first use. Building with `-C target-feature=+bmi2` skips
//! detection entirely.

pub mod backend;
mod bitops;
pub mod error;
#[cfg(target_arch = "x86_64")]
pub mod hw;
pub mod ops;
pub mod soft;

pub use crate::{
    backend::Backend,
    bitops::{
        BitDeposit,
        BitExtract,
    },
    error::{
        Error,
        Result,
    },
    ops::Ops,
};

/// Gathers the bits of `source` at the set positions of `mask`, lowest
/// position first, into the low bits of the result.
#[inline]
pub fn extract(source: u64, mask: u64) -> u64 {
    source.extract(mask)
}

/// Scatters the low bits of `source`, lowest first, to the set positions of
/// `mask`. Result bits outside `mask` are 0.
#[inline]
pub fn deposit(source: u64, mask: u64) -> u64 {
    source.deposit(mask)
}

#[cfg(test)]
mod tests {
    use crate::{
        BitDeposit,
        BitExtract,
    };

    #[test]
    fn test_extract() {
        assert_eq!(crate::extract(0b1011, 0b1010), 0b11);
        assert_eq!(0x1234_5678u64.extract(0xff00_fff0), 0x12567);
    }

    #[test]
    fn test_deposit() {
        assert_eq!(crate::deposit(0b11, 0b1010), 0b1010);
        assert_eq!(0x12567u64.deposit(0xff00_fff0), 0x1200_5670);
    }

    #[test]
    fn test_masks_at_bit_positions() {
        // mask bits at 1, 3, 5: result bit i is source bit 2i + 1
        let mask = 0b10_1010;

        for source in 0..64u64 {
            let expected =
                ((source >> 1) & 1) | (((source >> 3) & 1) << 1) | (((source >> 5) & 1) << 2);
            assert_eq!(crate::extract(source, mask), expected);
            assert_eq!(crate::deposit(expected, mask), source & mask);
        }
    }
}
