use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use ringbyte::ring::{ReadMode, RingBuffer, WriteMode};

const CAPACITY: usize = 64 * 1024;
const CHUNK: usize = 4096;

fn bench_write(c: &mut Criterion) {
    let payload = [0x11u8; CHUNK];
    let mut group = c.benchmark_group("write");
    group.throughput(Throughput::Bytes(CHUNK as u64));

    let mut ring = RingBuffer::new(CAPACITY).expect("failed to create ring");
    group.bench_function("no_cover_then_skip", |b| {
        b.iter(|| {
            let n = ring.write(black_box(&payload), WriteMode::NoCover);
            ring.skip(n)
        })
    });

    let mut ring = RingBuffer::new(CAPACITY).expect("failed to create ring");
    ring.write(&[0u8; CAPACITY], WriteMode::NoCover);
    group.bench_function("cover_full", |b| {
        b.iter(|| ring.write(black_box(&payload), WriteMode::Cover))
    });

    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut out = [0u8; CHUNK];
    let mut group = c.benchmark_group("read");
    group.throughput(Throughput::Bytes(CHUNK as u64));

    let mut ring = RingBuffer::new(CAPACITY).expect("failed to create ring");
    ring.write(&[0x22u8; CAPACITY], WriteMode::NoCover);
    group.bench_function("peek", |b| {
        b.iter(|| ring.read_into(black_box(&mut out), ReadMode::Peek))
    });

    let mut ring = RingBuffer::new(CAPACITY).expect("failed to create ring");
    let payload = [0x33u8; CHUNK];
    group.bench_function("write_then_consume", |b| {
        b.iter(|| {
            ring.write(&payload, WriteMode::NoCover);
            ring.read_into(black_box(&mut out), ReadMode::Consume)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_write, bench_read);
criterion_main!(benches);
