//! # Signature Benchmarks
//!
//! Covers the hot paths a service hits per request:
//! - Canonicalization and hashing of field lists
//! - Facade sign/verify including key decoding
//! - Engine sign/verify with keys already parsed
//! - ECIES round trip for small payloads

use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use norsh_crypto::{
    fields, sha256, sha3_256, signature, CanonicalMessage, CryptographyEngine, Field,
};
use rand::Rng;
use std::time::Duration;

/// Generate random message
fn generate_message(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen()).collect()
}

/// A record of `n` alternating text and integer fields
fn record(n: usize) -> Vec<Field> {
    (0..n)
        .map(|i| {
            if i % 2 == 0 {
                Field::from(format!("field-{i}"))
            } else {
                Field::from(i as u64)
            }
        })
        .collect()
}

pub fn bench_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("norsh/hashing");

    for size in [32, 256, 4096] {
        let data = generate_message(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("sha256", size), &data, |b, data| {
            b.iter(|| black_box(sha256(data)))
        });
        group.bench_with_input(BenchmarkId::new("sha3_256", size), &data, |b, data| {
            b.iter(|| black_box(sha3_256(data)))
        });
    }

    for n in [4, 16, 64] {
        let fields = record(n);
        group.bench_with_input(BenchmarkId::new("canonical_digest", n), &fields, |b, f| {
            b.iter(|| black_box(CanonicalMessage::new(f).digest_hex()))
        });
    }

    group.finish();
}

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("norsh/engine");
    group.measurement_time(Duration::from_secs(10));

    let engine = CryptographyEngine::generate().expect("keygen");
    let message = b"transfer alice bob 100";
    let sig = engine.sign(message).expect("sign");

    group.bench_function("generate", |b| {
        b.iter(|| black_box(CryptographyEngine::generate().expect("keygen")))
    });
    group.bench_function("sign", |b| b.iter(|| black_box(engine.sign(message))));
    group.bench_function("verify", |b| {
        b.iter(|| black_box(engine.verify(message, &sig)))
    });
    group.bench_function("verify_invalid", |b| {
        b.iter(|| black_box(engine.verify(b"tampered", &sig)))
    });

    let ciphertext = engine.encrypt(&generate_message(256)).expect("encrypt");
    group.bench_function("ecies_encrypt_256", |b| {
        let payload = generate_message(256);
        b.iter(|| black_box(engine.encrypt(&payload)))
    });
    group.bench_function("ecies_decrypt_256", |b| {
        b.iter(|| black_box(engine.decrypt(&ciphertext)))
    });

    group.finish();
}

pub fn bench_facade(c: &mut Criterion) {
    let mut group = c.benchmark_group("norsh/facade");
    group.measurement_time(Duration::from_secs(10));

    let engine = CryptographyEngine::generate().expect("keygen");
    let private_pem = engine.export_private_pem().expect("export").to_string();
    let public_pem = engine.export_public_pem().expect("export");
    let fields = fields!["alice", "bob", 100u64, 7u64, true];
    let sig = signature::sign(&private_pem, &fields).expect("sign");

    group.bench_function("sign_pem", |b| {
        b.iter(|| black_box(signature::sign(&private_pem, &fields)))
    });
    group.bench_function("verify_pem", |b| {
        b.iter(|| black_box(signature::verify(&public_pem, &sig, &fields)))
    });
    group.bench_function("verify_garbage", |b| {
        b.iter(|| black_box(signature::verify(&public_pem, "not-a-signature", &fields)))
    });

    // Batch of independent records, as a block of transfers
    for size in [10, 100] {
        let batch: Vec<(Vec<Field>, String)> = (0..size)
            .map(|i| {
                let fields = fields!["alice", "bob", i as u64].to_vec();
                let sig = signature::sign(&private_pem, &fields).expect("sign");
                (fields, sig)
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("verify_batch", size), &batch, |b, batch| {
            b.iter(|| {
                let valid = batch
                    .iter()
                    .filter(|(f, s)| signature::verify(&public_pem, s, f))
                    .count();
                black_box(valid)
            })
        });
    }

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_hashing(c);
    bench_engine(c);
    bench_facade(c);
}
