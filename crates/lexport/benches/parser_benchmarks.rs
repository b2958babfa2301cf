//! Parser performance benchmarks.
//!
//! Measures sniffing, parsing, and mapping throughput across input sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lexport::{
    map_rows, parse_delimited, sniff_delimiter, ColumnRole, MapOptions, RoleAssignment,
    DEFAULT_CANDIDATES,
};

/// Generate synthetic CSV data with the specified number of rows.
fn generate_csv_data(rows: usize, quoted: bool) -> String {
    let mut data = String::from("term,definition,tags\n");
    for row in 0..rows {
        if quoted {
            data.push_str(&format!(
                "term_{row:06},\"definition with, a comma {row}\",\"tag1, tag2; tag3\"\n"
            ));
        } else {
            data.push_str(&format!(
                "term_{row:06},plain definition {row},tag1; tag2\n"
            ));
        }
    }
    data
}

/// Benchmark delimiter sniffing (bounded by the 10-line sample window).
fn bench_sniff(c: &mut Criterion) {
    let data = generate_csv_data(10_000, false);
    c.bench_function("sniff_delimiter", |b| {
        b.iter(|| black_box(sniff_delimiter(black_box(&data), DEFAULT_CANDIDATES)))
    });
}

/// Benchmark parsing inputs of various sizes.
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_delimited");

    for rows in [100, 1_000, 10_000] {
        for (label, quoted) in [("plain", false), ("quoted", true)] {
            let data = generate_csv_data(rows, quoted);
            group.throughput(Throughput::Bytes(data.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(label, rows),
                &data,
                |b, data| b.iter(|| black_box(parse_delimited(black_box(data), ','))),
            );
        }
    }

    group.finish();
}

/// Benchmark the full parse-and-map pipeline.
fn bench_map(c: &mut Criterion) {
    let data = generate_csv_data(10_000, true);
    let table = parse_delimited(&data, ',');
    let roles = RoleAssignment::new()
        .with(0, ColumnRole::Term)
        .with(1, ColumnRole::Definition)
        .with(2, ColumnRole::Tags);
    let options = MapOptions {
        has_header: true,
        ..Default::default()
    };

    c.bench_function("map_rows_10k", |b| {
        b.iter(|| black_box(map_rows(black_box(&table), &roles, &options)))
    });
}

criterion_group!(benches, bench_sniff, bench_parse, bench_map);
criterion_main!(benches);
