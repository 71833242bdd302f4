//! Unit Algebra Benchmark
//!
//! Measures unit combination and measure arithmetic across backends.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use arms_measure::{rational, MeasureType, SiUnits, Unit};

fn benchmark_unit_algebra(c: &mut Criterion) {
    let force = Unit::from_exponents([("mass", 1), ("length", 1), ("time", -2)]).unwrap();
    let area = Unit::from_exponents([("length", 2)]).unwrap();

    c.bench_function("unit_divide", |b| {
        b.iter(|| {
            let result = black_box(&force).divide(black_box(&area));
            black_box(result);
        });
    });

    c.bench_function("unit_power_root", |b| {
        b.iter(|| {
            let squared = black_box(&area).power(2).unwrap();
            black_box(squared.root(2));
        });
    });

    c.bench_function("unit_allowed_powers", |b| {
        b.iter(|| black_box(black_box(&force).allowed_powers()));
    });
}

fn benchmark_measure_arithmetic(c: &mut Criterion) {
    let floats = MeasureType::<f64>::new();
    let si = SiUnits::new(&floats).unwrap();

    c.bench_function("f64_kinetic_energy", |b| {
        let mass = floats.of(2.0, &si.kilograms, None).unwrap();
        let velocity = floats.of(3.0, &si.meters.per(&si.seconds).unwrap(), None).unwrap();
        let half = floats.dimensionless(0.5);
        b.iter(|| {
            let energy = half
                .times(black_box(&mass))
                .and_then(|m| m.times(&black_box(&velocity).squared()?));
            black_box(energy);
        });
    });

    c.bench_function("f64_sum_1000", |b| {
        let lengths: Vec<_> = (0..1000)
            .map(|i| floats.of(i as f64, &si.meters, None).unwrap())
            .collect();
        b.iter(|| black_box(floats.sum(black_box(&lengths))));
    });

    let exact = MeasureType::new();
    let meters = exact.dimension("length", Some("m"));
    let feet = exact.of(rational(3048, 10000).unwrap(), &meters, Some("ft")).unwrap();

    c.bench_function("rational_value_in", |b| {
        let length = exact.of(rational(9144, 10000).unwrap(), &meters, None).unwrap();
        b.iter(|| black_box(black_box(&length).value_in(&feet)));
    });
}

criterion_group!(benches, benchmark_unit_algebra, benchmark_measure_arithmetic);
criterion_main!(benches);
