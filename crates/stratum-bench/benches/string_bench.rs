//! String primitive benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use stratum_bench::terminated_ascii;
use stratum_core::string::{mem_move_within, str_cmp, str_len, str_str};

fn bench_str_len(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 64, 256, 1024, 4096];
    let mut group = c.benchmark_group("str_len");

    for &size in sizes {
        let s = terminated_ascii(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(str_len(black_box(&s))));
        });
    }
    group.finish();
}

fn bench_str_cmp_equal(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 256, 4096];
    let mut group = c.benchmark_group("str_cmp_equal");

    for &size in sizes {
        let a = terminated_ascii(size);
        let b_input = terminated_ascii(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(str_cmp(black_box(&a), black_box(&b_input))));
        });
    }
    group.finish();
}

fn bench_str_str_worst_case(c: &mut Criterion) {
    // Needle almost matches at every window.
    let mut haystack = vec![b'a'; 4096];
    haystack.push(0);
    let needle = b"aaaab\0";

    c.bench_function("str_str_near_miss_4k", |b| {
        b.iter(|| black_box(str_str(black_box(&haystack), black_box(needle))));
    });
}

fn bench_mem_move_within(c: &mut Criterion) {
    let sizes: &[usize] = &[64, 1024, 65536];
    let mut group = c.benchmark_group("mem_move_within_overlap");

    for &size in sizes {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &sz| {
            let mut buf = vec![0xABu8; sz + 8];
            b.iter(|| {
                mem_move_within(black_box(&mut buf), 0, 8, sz);
                black_box(&buf);
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_str_len,
    bench_str_cmp_equal,
    bench_str_str_worst_case,
    bench_mem_move_within
);
criterion_main!(benches);
