use complex::Complex;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::Rng;

fn setup(count: usize) -> Vec<Complex> {
    let mut rng = rand::rng();

    let mut values = Vec::with_capacity(count);
    values.resize_with(count, || {
        Complex::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0))
    });
    values
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const COUNT: usize = 5000;

    let values = black_box(setup(COUNT));

    c.bench_function("mul_accumulate", |b| {
        b.iter(|| {
            let mut acc = Complex::ONE;
            for value in black_box(values.iter()) {
                acc *= *value;
                acc /= acc.magnitude().max(f64::MIN_POSITIVE);
            }
            black_box(acc)
        });
    });

    c.bench_function("magnitude", |b| {
        b.iter(|| {
            black_box(values.iter())
                .map(Complex::magnitude)
                .sum::<f64>()
        });
    });

    let text = values
        .iter()
        .map(Complex::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    c.bench_function("read_from", |b| {
        b.iter(|| {
            let mut input = black_box(text.as_bytes());
            for _ in 0..COUNT {
                let _ = black_box(Complex::read_from(&mut input));
            }
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
