//! Benchmarks for UTF-8 validation.
//!
//! Each content type is validated by every backend available on the host,
//! by the scalar fallback alone, and by `core::str::from_utf8` as a baseline.
//!
//! ## Content Types
//!
//! - **ASCII**: Pure 7-bit ASCII content (takes the ASCII chunk path)
//! - **Mixed**: Seeded random mix of 1-4 byte characters
//! - **CJK Text**: Chinese/Japanese/Korean characters (3-byte sequences)
//! - **Emoji Heavy**: 4-byte sequences
//!
//! ## Sizes
//!
//! 64B, 1KB, 64KB, 1MB

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use utf8_range::utf8::{validate_utf8_scalar, Utf8Validator};
use utf8_range::{Backend, Config};

const SIZES: [usize; 4] = [64, 1024, 64 * 1024, 1024 * 1024];

/// Repeat `pattern` up to `size` bytes, padding with ASCII so no sequence is split.
fn repeat_pattern(pattern: &str, size: usize, pad: u8) -> Vec<u8> {
    let bytes = pattern.as_bytes();
    let mut result = Vec::with_capacity(size);
    while result.len() + bytes.len() <= size {
        result.extend_from_slice(bytes);
    }
    result.resize(size, pad);
    result
}

fn generate_ascii(size: usize) -> Vec<u8> {
    repeat_pattern(
        "The quick brown fox jumps over the lazy dog. 0123456789!@#$%^&*()_+-=[]{}|;':\",./<>?\n",
        size,
        b'.',
    )
}

/// Seeded random characters: roughly 70% ASCII, 15% 2-byte, 10% 3-byte, 5% 4-byte.
fn generate_mixed(size: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut result = Vec::with_capacity(size);
    let mut buf = [0u8; 4];
    loop {
        let ch = match rng.gen_range(0..100) {
            0..=69 => rng.gen_range(0x20u32..0x7F),
            70..=84 => rng.gen_range(0x80u32..0x800),
            85..=94 => rng.gen_range(0x800u32..0xD800),
            _ => rng.gen_range(0x10000u32..0x110000),
        };
        let Some(ch) = char::from_u32(ch) else {
            continue;
        };
        let encoded = ch.encode_utf8(&mut buf).as_bytes();
        if result.len() + encoded.len() > size {
            break;
        }
        result.extend_from_slice(encoded);
    }
    result.resize(size, b'm');
    result
}

fn generate_cjk(size: usize) -> Vec<u8> {
    repeat_pattern("日本語中文韓國語漢字假名平仮名片仮名ひらがなカタカナ한글조선어", size, b'X')
}

fn generate_emoji(size: usize) -> Vec<u8> {
    repeat_pattern("🎉🚀💻🔥🌍😀🎯💡🌟🎨🎭🎪🎢🎡🎠🎰🎲🎳🎱🎾🏀🏈🏐🏉🎿🏂", size, b'E')
}

fn validators() -> Vec<(Backend, Utf8Validator)> {
    [Backend::Portable, Backend::Ssse3, Backend::Neon]
        .into_iter()
        .filter(|b| b.is_available())
        .map(|backend| (backend, Utf8Validator::with_config(Config { backend })))
        .collect()
}

fn bench_content(c: &mut Criterion, name: &str, generate: fn(usize) -> Vec<u8>) {
    let mut group = c.benchmark_group(format!("utf8_{}", name));
    let validators = validators();

    for size in SIZES {
        let data = generate(size);
        assert!(core::str::from_utf8(&data).is_ok());
        let size_name = format_size(size);

        group.throughput(Throughput::Bytes(size as u64));
        for (backend, validator) in &validators {
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", backend).to_lowercase(), &size_name),
                &data,
                |b, data| b.iter(|| validator.validate(black_box(data))),
            );
        }
        group.bench_with_input(BenchmarkId::new("scalar", &size_name), &data, |b, data| {
            b.iter(|| validate_utf8_scalar(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("std", &size_name), &data, |b, data| {
            b.iter(|| core::str::from_utf8(black_box(data)).is_ok())
        });
    }

    group.finish();
}

fn bench_ascii(c: &mut Criterion) {
    bench_content(c, "ascii", generate_ascii);
}

fn bench_mixed(c: &mut Criterion) {
    bench_content(c, "mixed", generate_mixed);
}

fn bench_cjk(c: &mut Criterion) {
    bench_content(c, "cjk", generate_cjk);
}

fn bench_emoji(c: &mut Criterion) {
    bench_content(c, "emoji", generate_emoji);
}

/// Invalid byte in the last full chunk: the whole input is scanned, the
/// fallback is never reached.
fn bench_error_at_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("utf8_error_at_end");
    let validator = Utf8Validator::new();

    for size in SIZES {
        let mut data = generate_ascii(size);
        let last_chunk = (size / 16) * 16 - 1;
        data[last_chunk] = 0x80;
        let size_name = format_size(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(&size_name), &data, |b, data| {
            b.iter(|| black_box(validator.validate(black_box(data))))
        });
    }

    group.finish();
}

fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{}mb", bytes / (1024 * 1024))
    } else if bytes >= 1024 {
        format!("{}kb", bytes / 1024)
    } else {
        format!("{}b", bytes)
    }
}

criterion_group!(
    benches,
    bench_ascii,
    bench_mixed,
    bench_cjk,
    bench_emoji,
    bench_error_at_end,
);

criterion_main!(benches);
