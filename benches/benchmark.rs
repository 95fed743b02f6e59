use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rational::{DivBy, Rational};
use rand;

// exact values never converge, so run a fixed number of newton steps
fn sqrt_rational(n: &Rational, steps: usize) -> Option<Rational> {
    if n.is_negative() {
        return None;
    } else if n.is_zero() {
        return Some(Rational::from(0));
    }

    let mut curr = (n.clone() + 1) / 2;
    for _ in 0..steps {
        curr = (n.clone() / &curr + &curr) / 2;
    }
    Some(curr)
}

fn sqrt_f64(n: f64, steps: usize) -> Option<f64> {
    if n.is_sign_negative() {
        return None;
    }

    let mut curr = (n + 1.0) / 2.0;
    for _ in 0..steps {
        curr = (n / curr + curr) / 2.0;
    }
    Some(curr)
}

fn random_rational() -> Rational {
    let (nume, deno): (i64, i64) = (rand::random_range(0..i64::MAX), rand::random_range(1..i64::MAX));
    nume.div_by(deno).unwrap()
}

fn benchmark_rational(c: &mut Criterion) {
    c.bench_function(
        "sqrt(rational)",
        |b| b.iter(
            || sqrt_rational(black_box(&random_rational()), 6)));

    c.bench_function(
        "parse(rational)",
        |b| b.iter(
            || black_box("1234567890123456789012345678901234567890/2469135780246913578024691357802469135780").parse::<Rational>()));

    c.bench_function(
        "harmonic(rational)",
        |b| b.iter(
            || (1..=black_box(64i64)).map(|d| 1i64.div_by(d).unwrap()).sum::<Rational>()));
}

fn benchmark_f64(c: &mut Criterion) {
    c.bench_function(
        "sqrt(f64)",
        |b| b.iter(
            || sqrt_f64(black_box(rand::random_range(0..i64::MAX) as f64 / rand::random_range(1..i64::MAX) as f64), 6)
        )
    );
}

criterion_group!(benches, benchmark_rational, benchmark_f64);
criterion_main!(benches);
