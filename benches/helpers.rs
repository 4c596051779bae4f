use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use datautils::collections::{flatten, unique};
use datautils::convert::{str_to_int, str_to_value};
use datautils::identify::identify_in_str;
use datautils::{deserialize, serialize, value, Value};

fn benchmark_identify_in_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("identify_in_str");

    let inputs = [
        ("int", "123456"),
        ("float", "3.14159"),
        ("date", "2025-09-15"),
        ("uuid", "550e8400-e29b-41d4-a716-446655440000"),
        ("text", "plain words that match nothing"),
    ];
    for (name, input) in inputs {
        group.bench_function(name, |b| b.iter(|| identify_in_str(black_box(input))));
    }
    group.finish();
}

fn benchmark_parsing(c: &mut Criterion) {
    c.bench_function("str_to_int", |b| b.iter(|| str_to_int(black_box("-1_234_567"))));
    c.bench_function("str_to_value_set", |b| {
        b.iter(|| str_to_value(black_box("{1, 2, 'three', 4.5}")))
    });
}

fn records(size: i64) -> Value {
    Value::Array(
        (0..size)
            .map(|i| {
                value!({
                    "id": i,
                    "sku": (format!("SKU{}", i)),
                    "price": (9.99 + i as f64),
                    "tags": ["a", "b"]
                })
            })
            .collect(),
    )
}

fn benchmark_serialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize");

    for size in [10, 100, 500].iter() {
        let data = records(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| serialize(black_box(data)))
        });
    }
    group.finish();
}

fn benchmark_deserialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize");

    for size in [10, 100, 500].iter() {
        let text = serialize(&records(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| deserialize(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_collections(c: &mut Criterion) {
    let numbers: Vec<u32> = (0..1_000).map(|i| i % 97).collect();
    c.bench_function("unique_u32", |b| b.iter(|| unique(black_box(&numbers))));

    let nested = value!([1, [2, [3, [4, [5]]]], [6, 7], 8]);
    let items = nested.as_slice().unwrap_or_default().to_vec();
    c.bench_function("flatten_nested", |b| b.iter(|| flatten(black_box(&items))));
}

criterion_group!(
    benches,
    benchmark_identify_in_str,
    benchmark_parsing,
    benchmark_serialize,
    benchmark_deserialize,
    benchmark_collections
);
criterion_main!(benches);
