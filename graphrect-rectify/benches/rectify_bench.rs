//! Throughput of identifier rectification for the common ingestion shapes:
//! narrowing `Int64` endpoints and parsing `Utf8` identifiers.

#![forbid(unsafe_code)]

use std::hint::black_box;
use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use criterion::{Criterion, criterion_group, criterion_main};
use graphrect_rectify::{CANONICAL_ID_TYPE, rectify_column, rectify_edge_table};
use graphrect_test_utils::table_from_columns;
use rand::{Rng, SeedableRng, rngs::SmallRng};

const N: usize = 1_000_000;

fn random_ids(n: usize) -> Vec<i64> {
    let mut rng = SmallRng::seed_from_u64(0xC0FF_EE00_DADA_BEEF);
    (0..n)
        .map(|_| rng.random_range(0..i64::from(i32::MAX)))
        .collect()
}

fn bench_rectify(c: &mut Criterion) {
    let ids = random_ids(N);
    let int_table = table_from_columns([(
        "id",
        Arc::new(Int64Array::from(ids.clone())) as ArrayRef,
    )])
    .unwrap();
    let text: StringArray = ids.iter().map(|v| Some(v.to_string())).collect();
    let text_table = table_from_columns([("id", Arc::new(text) as ArrayRef)]).unwrap();

    let mut shifted = ids.clone();
    shifted.rotate_left(1);
    let edge_table = table_from_columns([
        ("src", Arc::new(Int64Array::from(ids)) as ArrayRef),
        ("dst", Arc::new(Int64Array::from(shifted)) as ArrayRef),
    ])
    .unwrap();

    c.bench_function("rectify/int64_to_int32", |b| {
        b.iter(|| rectify_column(black_box(&int_table), "id", CANONICAL_ID_TYPE).unwrap())
    });

    c.bench_function("rectify/utf8_to_int32", |b| {
        b.iter(|| rectify_column(black_box(&text_table), "id", CANONICAL_ID_TYPE).unwrap())
    });

    c.bench_function("rectify/edge_table", |b| {
        b.iter(|| rectify_edge_table(black_box(&edge_table), "src", "dst").unwrap())
    });
}

criterion_group!(benches, bench_rectify);
criterion_main!(benches);
