use criterion::{black_box, criterion_group, criterion_main, Criterion};
use orderbook_core::{Book, Side};

fn submit_non_crossing_orders(c: &mut Criterion) {
    c.bench_function("submit_limit non-crossing", |b| {
        b.iter(|| {
            let mut book = Book::new(2).unwrap();
            for i in 0..1_000u64 {
                let price = 100.0 + (i % 50) as f64;
                book.submit_limit(black_box(Side::Bid), black_box(price), black_box(1))
                    .unwrap();
            }
            black_box(book.size())
        });
    });
}

fn submit_crossing_orders(c: &mut Criterion) {
    c.bench_function("submit_limit fully crossing", |b| {
        b.iter(|| {
            let mut book = Book::new(2).unwrap();
            for _ in 0..1_000u64 {
                book.submit_limit(Side::Ask, 100.0, 1).unwrap();
            }
            for _ in 0..1_000u64 {
                black_box(book.submit_limit(Side::Bid, 100.0, 1).unwrap());
            }
            black_box(book.size())
        });
    });
}

criterion_group!(benches, submit_non_crossing_orders, submit_crossing_orders);
criterion_main!(benches);
