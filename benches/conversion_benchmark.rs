use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use dconv::{format_decimal, format_float, format_int, parse_float, parse_int};

macro_rules! create_int_benchmark {
    ($c:expr, $type:ty, $text:expr) => {
        let mut group = $c.benchmark_group(stringify!($type));

        group.bench_function("parse", |b| {
            b.iter(|| black_box(parse_int::<$type>(black_box($text))))
        });
        group.bench_function("format", |b| {
            b.iter(|| black_box(format_int(black_box(<$type>::MAX))))
        });
        group.bench_function("format_decimal", |b| {
            b.iter(|| black_box(format_decimal(black_box(<$type>::MAX))))
        });
        group.finish();
    };
}

macro_rules! create_float_benchmark {
    ($c:expr, $type:ty, $text:expr) => {
        let mut group = $c.benchmark_group(stringify!($type));

        group.bench_function("parse", |b| {
            b.iter(|| black_box(parse_float::<$type>(black_box($text))))
        });
        group.bench_function("format", |b| {
            b.iter(|| black_box(format_float(black_box(<$type>::MAX))))
        });
        group.bench_function("format_tiny", |b| {
            b.iter(|| black_box(format_float(black_box(<$type>::MIN_POSITIVE))))
        });
        group.finish();
    };
}

fn benchmark_conversions(c: &mut Criterion) {
    create_int_benchmark!(c, i8, "-128");
    create_int_benchmark!(c, i16, "-32768");
    create_int_benchmark!(c, i32, "2147483647");
    create_int_benchmark!(c, i64, "-9223372036854775808");
    create_int_benchmark!(c, isize, "123456789");
    create_float_benchmark!(c, f32, "1234.56789");
    create_float_benchmark!(c, f64, "12345678.9e-3");
}

criterion_group!(benches, benchmark_conversions);
criterion_main!(benches);
