//! C ABI for [`pextdep`].
//!
//! Build as a shared library and load it from any runtime with a C FFI, e.g.
//! from Python:
//!
//! ```python
//! bmi2 = ctypes.CDLL("./bmi2_bitops.so")
//! bmi2.pext_native.argtypes = [ctypes.c_uint64, ctypes.c_uint64]
//! bmi2.pext_native.restype = ctypes.c_uint64
//! ```

use pextdep::{
    Backend,
    Ops,
};

/// Parallel bit extract.
#[unsafe(no_mangle)]
pub extern "C" fn pext_native(source: u64, mask: u64) -> u64 {
    pextdep::extract(source, mask)
}

/// Parallel bit deposit.
#[unsafe(no_mangle)]
pub extern "C" fn pdep_native(source: u64, mask: u64) -> u64 {
    pextdep::deposit(source, mask)
}

/// Whether the calls above run on the BMI2 instructions rather than the
/// portable implementation.
#[unsafe(no_mangle)]
pub extern "C" fn bmi2_bitops_has_hardware() -> bool {
    Ops::global().backend() == Backend::Bmi2
}
