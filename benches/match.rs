use criterion::{criterion_group, criterion_main, Criterion};
use propescape::Resolver;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let resolver = Resolver::unicode();
    let positive = resolver.compile(r"\p{Script=Gurmukhi}").unwrap();
    let negative = resolver.compile(r"\P{sc=Guru}").unwrap();
    let text: Vec<u16> = "ਪੰਜਾਬੀ ਭਾਸ਼ਾ".repeat(64).encode_utf16().collect();

    c.bench_function("matches", |b| {
        b.iter(|| {
            for cp in 0x0A00..0x0A80 {
                let _result = positive.matches(black_box(cp));
            }
        })
    });

    c.bench_function("find_mismatch_utf16", |b| {
        b.iter(|| negative.find_mismatch_utf16(black_box(&text)))
    });

    c.bench_function("compile negated", |b| {
        b.iter(|| resolver.compile(black_box(r"\P{Script=Gurmukhi}")).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
