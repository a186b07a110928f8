use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use puid::{
    BasicUuidV7Generator, MonotonicClock, RandSource, ThreadRandom, TimeSource, UuidSource,
    decode, derive_prefixes, encode, new_id_with, validate,
};

struct FixedMockTime {
    millis: u64,
}

impl TimeSource<u64> for FixedMockTime {
    fn current_millis(&self) -> u64 {
        self.millis
    }
}

struct FixedMockRand;

impl RandSource<u128> for FixedMockRand {
    fn rand(&self) -> u128 {
        0x0123_4567_89ab_cdef_0123_4567_89ab_cdef
    }
}

const UUID: &str = "01960ec0-c6cf-74d3-ae14-50c20e035fe6";
const ID: &str = "tst06b0xg66sxtd7bgma310w0tzwr";

// Number of operations per benchmark iteration.
const TOTAL_OPS: usize = 4096;

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Elements(TOTAL_OPS as u64));

    group.bench_function(format!("encode/elems/{TOTAL_OPS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_OPS {
                black_box(encode(black_box(UUID), "tst").unwrap());
            }
        });
    });

    group.bench_function(format!("decode/elems/{TOTAL_OPS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_OPS {
                black_box(decode(black_box(ID), "tst").unwrap());
            }
        });
    });

    group.bench_function(format!("validate/elems/{TOTAL_OPS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_OPS {
                black_box(validate(black_box(ID), "tst").unwrap());
            }
        });
    });

    group.finish();
}

fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");
    group.throughput(Throughput::Elements(TOTAL_OPS as u64));

    let fixed = BasicUuidV7Generator::new(FixedMockTime { millis: 1 }, FixedMockRand);
    group.bench_function(format!("mock/elems/{TOTAL_OPS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_OPS {
                black_box(fixed.next_uuid());
            }
        });
    });

    let real = BasicUuidV7Generator::new(MonotonicClock::default(), ThreadRandom);
    group.bench_function(format!("new_id/elems/{TOTAL_OPS}"), |b| {
        b.iter(|| {
            for _ in 0..TOTAL_OPS {
                black_box(new_id_with(&real, "tst").unwrap());
            }
        });
    });

    group.finish();
}

fn bench_deriver(c: &mut Criterion) {
    let names: Vec<String> = (0..26_u8)
        .flat_map(|a| (0..26_u8).map(move |b| [b'a' + a, b'x', b'a' + b, b'z']))
        .map(|bytes| bytes.iter().copied().map(char::from).collect())
        .take(128)
        .collect();

    let mut group = c.benchmark_group("deriver");
    group.throughput(Throughput::Elements(names.len() as u64));
    group.bench_function(format!("derive_prefixes/models/{}", names.len()), |b| {
        b.iter(|| black_box(derive_prefixes(black_box(names.as_slice()))));
    });
    group.finish();
}

criterion_group!(benches, bench_codec, bench_generator, bench_deriver);
criterion_main!(benches);
