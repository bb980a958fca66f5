use color_eyre::eyre::{
    Error,
    bail,
};
use pextdep::{
    Backend,
    Ops,
};
use rand::{
    Rng,
    SeedableRng,
};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::iter::{
    IntoParallelIterator,
    ParallelIterator,
};

use crate::reference;

const CHUNK_SIZE: u64 = 1 << 16;

const SOURCES: [u64; 6] = [
    0,
    u64::MAX,
    0x5555_5555_5555_5555,
    0xaaaa_aaaa_aaaa_aaaa,
    0x0123_4567_89ab_cdef,
    0x8000_0000_0000_0001,
];

fn edge_masks() -> impl Iterator<Item = u64> {
    [
        0,
        u64::MAX,
        0x0000_0000_ffff_ffff,
        0xffff_ffff_0000_0000,
        0x5555_5555_5555_5555,
        0xaaaa_aaaa_aaaa_aaaa,
        0x8000_0000_0000_0001,
    ]
    .into_iter()
    .chain((0..u64::BITS).map(|bit| 1u64 << bit))
    .chain((0..u64::BITS).map(|bit| !(1u64 << bit)))
}

fn random_mask(rng: &mut impl Rng) -> u64 {
    match rng.random_range(0..3) {
        0 => rng.random::<u64>() & rng.random::<u64>() & rng.random::<u64>(),
        1 => rng.random::<u64>() | rng.random::<u64>() | rng.random::<u64>(),
        _ => rng.random(),
    }
}

/// Checks every backend, and the process-wide dispatch, against the reference.
fn check(backends: &[Ops], source: u64, mask: u64) -> Result<(), Error> {
    let extracted = reference::extract(source, mask);
    let deposited = reference::deposit(source, mask);

    let results = backends
        .iter()
        .map(|ops| {
            (
                ops.backend().to_string(),
                ops.extract(source, mask),
                ops.deposit(source, mask),
            )
        })
        .chain([(
            "global".to_owned(),
            pextdep::extract(source, mask),
            pextdep::deposit(source, mask),
        )]);

    for (name, actual_extracted, actual_deposited) in results {
        if actual_extracted != extracted {
            bail!(
                "{name}: extract({source:#018x}, {mask:#018x}) = {actual_extracted:#018x}, expected {extracted:#018x}"
            );
        }
        if actual_deposited != deposited {
            bail!(
                "{name}: deposit({source:#018x}, {mask:#018x}) = {actual_deposited:#018x}, expected {deposited:#018x}"
            );
        }
    }

    Ok(())
}

pub fn verify(samples: u64, seed: u64) -> Result<(), Error> {
    let backends = Backend::supported()
        .map(Ops::with_backend)
        .collect::<Result<Vec<_>, _>>()?;

    for ops in &backends {
        tracing::info!(backend = %ops.backend(), "verifying backend");
    }

    let mut edge_cases = 0;
    for mask in edge_masks() {
        for source in SOURCES {
            check(&backends, source, mask)?;
            edge_cases += 1;
        }
    }
    tracing::info!(edge_cases, "edge cases passed");

    let num_chunks = samples.div_ceil(CHUNK_SIZE);
    (0..num_chunks).into_par_iter().try_for_each(|chunk| {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed.wrapping_add(chunk));
        let chunk_samples = CHUNK_SIZE.min(samples - chunk * CHUNK_SIZE);

        for _ in 0..chunk_samples {
            let source = rng.random();
            let mask = random_mask(&mut rng);
            check(&backends, source, mask)?;
        }

        tracing::trace!(chunk, chunk_samples, "chunk passed");
        Ok::<_, Error>(())
    })?;
    tracing::info!(samples, seed, "random samples passed");

    Ok(())
}
