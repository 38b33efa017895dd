//! # Registry Benchmarks
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `derive_transfer_id` | one Keccak-256 over 72 + recipient bytes |
//! | `find_index` | linear scan, one derivation per record |
//! | `complete` | load + scan + hash check + save + emit |

use bridge_htlc::domain::{find_index, TransferParams};
use bridge_htlc::{
    create_hash_lock, derive_transfer_id, BridgeApi, BridgeService, HashAlgorithm,
    InMemoryEventLog, InMemoryRegistryStore, ManualClock, TransferRecord,
};
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

const OWNER: [u8; 32] = [0xA1; 32];
const RECIPIENT: &[u8] = b"0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

fn records(count: u64) -> Vec<TransferRecord> {
    let hash_lock = create_hash_lock(b"bench", HashAlgorithm::Keccak256);
    (1..=count)
        .map(|nonce| {
            TransferRecord::new(TransferParams {
                amount: nonce,
                originator: OWNER,
                recipient: RECIPIENT.to_vec(),
                hash_lock,
                time_lock: 3_600,
                nonce,
                created_at: 0,
            })
        })
        .collect()
}

fn bench_derive_transfer_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("identifier");
    let hash_lock: [u8; 32] = rand::thread_rng().gen();

    group.bench_function("derive_transfer_id", |b| {
        b.iter(|| {
            black_box(derive_transfer_id(
                black_box(&OWNER),
                black_box(RECIPIENT),
                black_box(&hash_lock),
                black_box(42),
            ))
        })
    });
    group.finish();
}

fn bench_find_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_index");
    group.measurement_time(Duration::from_secs(5));

    for size in [10u64, 100, 1_000, 5_000] {
        let records = records(size);
        // Worst case: the newest transfer sits at the end
        let last_id = records[records.len() - 1].transfer_id();

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("last", size), &records, |b, records| {
            b.iter(|| black_box(find_index(records, &last_id)))
        });
        group.bench_with_input(BenchmarkId::new("missing", size), &records, |b, records| {
            b.iter(|| black_box(find_index(records, &[0xFF; 32])))
        });
    }
    group.finish();
}

fn bench_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("lifecycle");
    let hash_lock = create_hash_lock(b"secret", HashAlgorithm::Keccak256);

    // Fresh registry per iteration
    group.bench_function("initiate_complete", |b| {
        b.iter_batched(
            || {
                let bridge = BridgeService::new(
                    InMemoryRegistryStore::new(),
                    Arc::new(InMemoryEventLog::new()),
                    ManualClock::new(0),
                );
                bridge.initialize(OWNER).expect("initialize");
                bridge
            },
            |bridge| {
                let id = bridge
                    .initiate(OWNER, RECIPIENT.to_vec(), hash_lock, 3_600, 1)
                    .expect("initiate");
                bridge.complete(OWNER, id, b"secret").expect("complete");
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_derive_transfer_id,
    bench_find_index,
    bench_lifecycle
);
criterion_main!(benches);
