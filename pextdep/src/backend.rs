use std::str::FromStr;

use crate::error::Error;

/// An implementation of the extract and deposit operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Backend {
    /// The `pext` and `pdep` instructions of the x86_64 BMI2 extension.
    #[display("bmi2")]
    Bmi2,

    /// Portable implementation, available everywhere.
    #[display("software")]
    Software,
}

impl Backend {
    /// All backends, in order of preference.
    pub const ALL: [Self; 2] = [Self::Bmi2, Self::Software];

    /// Whether this backend can run on the current processor.
    pub fn is_supported(self) -> bool {
        match self {
            Self::Bmi2 => has_bmi2(),
            Self::Software => true,
        }
    }

    /// The preferred supported backend.
    ///
    /// This is always [`Backend::Software`] if the `software-only` feature is
    /// enabled.
    pub fn detect() -> Self {
        if cfg!(feature = "software-only") {
            return Self::Software;
        }

        Self::supported()
            .next()
            .unwrap_or(Self::Software)
    }

    pub fn supported() -> impl Iterator<Item = Self> {
        Self::ALL
            .into_iter()
            .filter(|backend| backend.is_supported())
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|backend| s.eq_ignore_ascii_case(&backend.to_string()))
            .ok_or_else(|| Error::UnknownBackend(s.to_owned()))
    }
}

#[cfg(all(target_arch = "x86_64", target_feature = "bmi2"))]
fn has_bmi2() -> bool {
    true
}

#[cfg(all(target_arch = "x86_64", not(target_feature = "bmi2")))]
fn has_bmi2() -> bool {
    std::arch::is_x86_feature_detected!("bmi2")
}

#[cfg(not(target_arch = "x86_64"))]
fn has_bmi2() -> bool {
    false
}
