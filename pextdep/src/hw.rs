//! BMI2 instructions.

use core::arch::x86_64::{
    _pdep_u64,
    _pext_u64,
};

/// # Safety
///
/// The processor must support `bmi2`.
#[inline]
#[target_feature(enable = "bmi2")]
#[allow(unused_unsafe)]
pub unsafe fn extract_unchecked(source: u64, mask: u64) -> u64 {
    unsafe { _pext_u64(source, mask) }
}

/// # Safety
///
/// The processor must support `bmi2`.
#[inline]
#[target_feature(enable = "bmi2")]
#[allow(unused_unsafe)]
pub unsafe fn deposit_unchecked(source: u64, mask: u64) -> u64 {
    unsafe { _pdep_u64(source, mask) }
}

// These two are only ever handed out by `Ops` after `Backend::Bmi2` was found
// to be supported.

pub(crate) fn extract(source: u64, mask: u64) -> u64 {
    unsafe { extract_unchecked(source, mask) }
}

pub(crate) fn deposit(source: u64, mask: u64) -> u64 {
    unsafe { deposit_unchecked(source, mask) }
}
