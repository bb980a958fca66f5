use std::hint::black_box;

use criterion::{
    Criterion,
    criterion_group,
    criterion_main,
};
use pextdep::{
    Backend,
    Ops,
};

const MASKS: [(&str, u64); 3] = [
    ("sparse", 0x8000_0100_0010_0001),
    ("half", 0x5555_5555_5555_5555),
    ("dense", 0xffff_ffff_ffff_fff0),
];

fn bench_backends(c: &mut Criterion) {
    let source = 0x0123_4567_89ab_cdef;

    for (name, mask) in MASKS {
        let mut group = c.benchmark_group(format!("extract/{name}"));

        for backend in Backend::supported() {
            let ops = Ops::with_backend(backend).unwrap();
            group.bench_function(backend.to_string(), |b| {
                b.iter(|| ops.extract(black_box(source), black_box(mask)))
            });
        }

        group.bench_function("global", |b| {
            b.iter(|| pextdep::extract(black_box(source), black_box(mask)))
        });

        group.finish();
    }

    for (name, mask) in MASKS {
        let mut group = c.benchmark_group(format!("deposit/{name}"));

        for backend in Backend::supported() {
            let ops = Ops::with_backend(backend).unwrap();
            group.bench_function(backend.to_string(), |b| {
                b.iter(|| ops.deposit(black_box(source), black_box(mask)))
            });
        }

        group.bench_function("global", |b| {
            b.iter(|| pextdep::deposit(black_box(source), black_box(mask)))
        });

        group.finish();
    }
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
