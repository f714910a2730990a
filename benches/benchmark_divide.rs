use widenum::UInt256;

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_divide(c: &mut Criterion) {
    let a = UInt256::MAX;
    let b = UInt256::from_str_radix("deadbeefcafebabe", 16).unwrap();

    c.bench_function("uint256 div_rem", |bench| {
        bench.iter(|| black_box(a).div_rem(black_box(&b)).unwrap())
    });
}

criterion_group!(benches, bench_divide);
criterion_main!(benches);
