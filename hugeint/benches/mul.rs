use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hugeint::{BigInt, RandomBigInt};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn operands(bits: u64) -> (BigInt, BigInt) {
    let mut rng = StdRng::seed_from_u64(bits);
    (rng.gen_bigint(bits, true), rng.gen_bigint(bits, true))
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    // 16 words sits under the Karatsuba threshold, the rest above it
    for words in [16u64, 64, 256, 1024] {
        let (a, b) = operands(words * 32);
        group.bench_with_input(BenchmarkId::from_parameter(words), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a) * black_box(b))
        });
    }
    group.finish();
}

fn bench_skewed_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let small = rng.gen_bigint(8 * 32, false);
    let large = rng.gen_bigint(4096 * 32, false);
    c.bench_function("mul/skewed_8x4096", |bench| {
        bench.iter(|| black_box(&small) * black_box(&large))
    });
}

fn bench_div(c: &mut Criterion) {
    let mut group = c.benchmark_group("div_rem");
    for words in [8u64, 64, 256] {
        let (a, _) = operands(words * 64);
        let (b, _) = operands(words * 32);
        group.bench_with_input(BenchmarkId::from_parameter(words), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(a).div_rem(black_box(b)))
        });
    }
    group.finish();
}

fn bench_to_string(c: &mut Criterion) {
    let (a, _) = operands(4096);
    c.bench_function("to_string/4096_bits", |bench| bench.iter(|| black_box(&a).to_string()));
    c.bench_function("to_hex/4096_bits", |bench| bench.iter(|| format!("{:x}", black_box(&a))));
}

criterion_group!(benches, bench_mul, bench_skewed_mul, bench_div, bench_to_string);
criterion_main!(benches);
