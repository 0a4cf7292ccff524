use criterion::{Criterion, criterion_group, criterion_main};
use enumbase::prelude::*;
use std::hint::black_box;

#[enumeration]
enum HttpMethod {
    #[default]
    GET = "GET",
    HEAD = "HEAD",
    POST = "POST",
    PUT = "PUT",
    DELETE = "DELETE",
    CONNECT = "CONNECT",
    OPTIONS = "OPTIONS",
    TRACE = "TRACE",
    PATCH = "PATCH",
}

#[enumeration]
enum StatusCode {
    #[default]
    OK = 200,
    CREATED = 201,
    NO_CONTENT = 204,
    BAD_REQUEST = 400,
    NOT_FOUND = 404,
    INTERNAL_SERVER_ERROR = 500,
}

// ============================================================================
// Benchmark: Name lookups
// ============================================================================

fn bench_from_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_name");

    group.bench_function("first", |b| {
        b.iter(|| black_box(HttpMethod::from_name(black_box("GET")).unwrap()));
    });

    group.bench_function("last_mixed_case", |b| {
        b.iter(|| black_box(HttpMethod::from_name(black_box("Patch")).unwrap()));
    });

    group.bench_function("undefined", |b| {
        b.iter(|| black_box(HttpMethod::from_name(black_box("BREW")).is_err()));
    });

    group.finish();
}

// ============================================================================
// Benchmark: Value lookups
// ============================================================================

fn bench_from_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_value");

    group.bench_function("string", |b| {
        b.iter(|| black_box(HttpMethod::from_value(black_box("OPTIONS")).unwrap()));
    });

    group.bench_function("integer", |b| {
        b.iter(|| black_box(StatusCode::from_value(black_box(404)).unwrap()));
    });

    group.bench_function("strict_match", |b| {
        b.iter(|| black_box(StatusCode::matches(black_box("500"), black_box(500), true)));
    });

    group.finish();
}

criterion_group!(benches, bench_from_name, bench_from_value);
criterion_main!(benches);
