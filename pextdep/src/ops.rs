use std::sync::OnceLock;

use crate::{
    backend::Backend,
    error::{
        Error,
        Result,
    },
    soft,
};

type BinaryOp = fn(u64, u64) -> u64;

/// Extract and deposit, bound to one backend.
///
/// The backend is checked when the handle is created, so calling the
/// operations never needs to check again.
#[derive(Clone, Copy, Debug)]
pub struct Ops {
    backend: Backend,
    extract: BinaryOp,
    deposit: BinaryOp,
}

impl Ops {
    /// Binds to [`Backend::detect`].
    pub fn detect() -> Self {
        Self::new_unchecked(Backend::detect())
    }

    /// Binds to `backend`, failing if the processor doesn't support it.
    pub fn with_backend(backend: Backend) -> Result<Self> {
        if !backend.is_supported() {
            tracing::warn!(%backend, "requested backend is not supported");
            return Err(Error::Unsupported { backend });
        }

        Ok(Self::new_unchecked(backend))
    }

    /// The process-wide instance used by [`crate::extract`] and
    /// [`crate::deposit`]. Detected on first use.
    pub fn global() -> Self {
        static GLOBAL: OnceLock<Ops> = OnceLock::new();

        *GLOBAL.get_or_init(|| {
            let ops = Self::detect();
            tracing::debug!(backend = %ops.backend, "selected extract/deposit backend");
            ops
        })
    }

    fn new_unchecked(backend: Backend) -> Self {
        match backend {
            #[cfg(target_arch = "x86_64")]
            Backend::Bmi2 => {
                Self {
                    backend,
                    extract: crate::hw::extract,
                    deposit: crate::hw::deposit,
                }
            }
            #[cfg(not(target_arch = "x86_64"))]
            Backend::Bmi2 => unreachable!("bmi2 is only supported on x86_64"),
            Backend::Software => {
                Self {
                    backend,
                    extract: soft::extract,
                    deposit: soft::deposit,
                }
            }
        }
    }

    #[inline]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// Parallel bit extract: packs the bits of `source` at the set positions of
    /// `mask` into the low bits of the result, lowest position first.
    #[inline]
    pub fn extract(&self, source: u64, mask: u64) -> u64 {
        (self.extract)(source, mask)
    }

    /// Parallel bit deposit: places the low bits of `source`, lowest first,
    /// at the set positions of `mask`. All other result bits are 0.
    #[inline]
    pub fn deposit(&self, source: u64, mask: u64) -> u64 {
        (self.deposit)(source, mask)
    }
}

impl Default for Ops {
    fn default() -> Self {
        Self::global()
    }
}
