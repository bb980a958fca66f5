//! Bit-by-bit versions of extract and deposit, written straight from the
//! definitions and used as the oracle when verifying backends.

pub fn extract(source: u64, mask: u64) -> u64 {
    let mut result = 0;
    let mut packed = 0;

    for position in 0..u64::BITS {
        if (mask >> position) & 1 == 1 {
            result |= ((source >> position) & 1) << packed;
            packed += 1;
        }
    }

    result
}

pub fn deposit(source: u64, mask: u64) -> u64 {
    let mut result = 0;
    let mut consumed = 0;

    for position in 0..u64::BITS {
        if (mask >> position) & 1 == 1 {
            result |= ((source >> consumed) & 1) << position;
            consumed += 1;
        }
    }

    result
}
