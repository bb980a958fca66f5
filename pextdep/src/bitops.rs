pub trait BitDeposit {
    fn deposit(self, mask: Self) -> Self;
}

pub trait BitExtract {
    fn extract(self, mask: Self) -> Self;
}

#[cfg(all(
    target_arch = "x86_64",
    target_feature = "bmi2",
    not(feature = "software-only")
))]
const _: () = {
    impl BitDeposit for u64 {
        #[inline(always)]
        fn deposit(self, mask: u64) -> u64 {
            unsafe { core::arch::x86_64::_pdep_u64(self, mask) }
        }
    }

    impl BitExtract for u64 {
        #[inline(always)]
        fn extract(self, mask: u64) -> u64 {
            unsafe { core::arch::x86_64::_pext_u64(self, mask) }
        }
    }
};

#[cfg(not(all(
    target_arch = "x86_64",
    target_feature = "bmi2",
    not(feature = "software-only")
)))]
const _: () = {
    use crate::ops::Ops;

    impl BitDeposit for u64 {
        #[inline]
        fn deposit(self, mask: u64) -> u64 {
            Ops::global().deposit(self, mask)
        }
    }

    impl BitExtract for u64 {
        #[inline]
        fn extract(self, mask: u64) -> u64 {
            Ops::global().extract(self, mask)
        }
    }
};
