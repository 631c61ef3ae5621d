use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ticker_table::{string_hash, StockTable};

fn sample_stocks(count: usize) -> Vec<(String, String, String)> {
    (0..count)
        .map(|i| {
            (
                format!("Company Number {}", i),
                format!("WKN{:06}", i),
                format!("SYM{}", i),
            )
        })
        .collect()
}

fn benchmark_insert(c: &mut Criterion) {
    let stocks = sample_stocks(1000);

    c.bench_function("insert_1000", |b| {
        b.iter(|| {
            let mut table = StockTable::new(2003).unwrap();
            for (name, wkn, symbol) in &stocks {
                table.insert(name, wkn, symbol).unwrap();
            }
            black_box(table)
        })
    });
}

fn benchmark_find(c: &mut Criterion) {
    let stocks = sample_stocks(1000);
    let mut table = StockTable::new(2003).unwrap();
    for (name, wkn, symbol) in &stocks {
        table.insert(name, wkn, symbol).unwrap();
    }

    c.bench_function("find_by_symbol", |b| {
        b.iter(|| table.find(black_box("SYM500")))
    });
    c.bench_function("find_by_name", |b| {
        b.iter(|| table.find(black_box("Company Number 500")))
    });
    c.bench_function("find_missing", |b| {
        b.iter(|| table.find(black_box("NOT-LISTED")))
    });
}

fn benchmark_string_hash(c: &mut Criterion) {
    c.bench_function("string_hash", |b| {
        b.iter(|| string_hash(black_box("Microsoft Corporation")))
    });
}

criterion_group!(benches, benchmark_insert, benchmark_find, benchmark_string_hash);
criterion_main!(benches);
