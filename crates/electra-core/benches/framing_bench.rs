//! Criterion benchmarks for packet framing.
//!
//! Packets are built on the calling thread right before transmission, so the
//! cost of `full_packet` adds directly to the button-press latency.
//!
//! Run with:
//! ```bash
//! cargo bench --package electra-core --bench framing_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use electra_core::protocol::{green, orange};
use electra_core::{AcSettings, BitEncoder, Fan, Manchester, Mode, PulseDistance, Remote};

fn reference_settings() -> AcSettings {
    AcSettings::new(true, Mode::Cool, Fan::Low, 24, false, false)
}

/// Benchmarks the complete packet for each remote.
fn bench_full_packet(c: &mut Criterion) {
    let settings = reference_settings();
    let mut group = c.benchmark_group("full_packet");
    for remote in Remote::ALL {
        group.bench_with_input(BenchmarkId::new("remote", remote), &settings, |b, settings| {
            b.iter(|| remote.full_packet(black_box(settings)))
        });
    }
    group.finish();
}

/// Benchmarks the payload packing alone, without pulse generation.
fn bench_payload(c: &mut Criterion) {
    let settings = reference_settings();
    let mut group = c.benchmark_group("payload");

    group.bench_function("orange_encode_code", |b| {
        b.iter(|| orange::encode_code(black_box(&settings)))
    });

    group.bench_function("green_wire_bytes", |b| {
        b.iter(|| green::wire_bytes(black_box(&settings)))
    });

    group.finish();
}

/// Benchmarks the two bit encoders on their protocol's payload size.
fn bench_encoders(c: &mut Criterion) {
    let settings = reference_settings();
    let mut group = c.benchmark_group("bit_encoder");

    let code = orange::encode_code(&settings);
    let manchester = Manchester::new(orange::UNIT_LENGTH);
    group.bench_function("manchester_34", |b| {
        b.iter(|| manchester.encode_number(black_box(code), orange::CODE_BITS))
    });

    let bytes = green::wire_bytes(&settings);
    let pulse_distance = PulseDistance::new(green::UNIT_LENGTH);
    group.bench_function("pulse_distance_104", |b| {
        b.iter(|| pulse_distance.encode_buffer(black_box(&bytes), green::CODE_BITS))
    });

    group.finish();
}

criterion_group!(benches, bench_full_packet, bench_payload, bench_encoders);
criterion_main!(benches);
