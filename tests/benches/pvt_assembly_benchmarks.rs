//! # Private Data Assembly Benchmarks
//!
//! | Path | Claim | Target |
//! |------|-------|--------|
//! | Trimming | Linear in deployed collections | < 50µs at 256 collections |
//! | Assembly | One lookup per namespace | < 1ms at 16 namespaces |

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pc_01_endorser::prelude::*;
use pc_tests::fixtures::{deploy, node_with_channels, pvt_write_set, static_package};
use shared_types::{CollectionConfigPackage, InMemoryLedger};

fn collection_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("col{i:03}")).collect()
}

// ============================================================================
// TRIMMING
// ============================================================================

fn bench_trimming(c: &mut Criterion) {
    let mut group = c.benchmark_group("pc-01-trimming");
    group.measurement_time(Duration::from_secs(5));

    for size in [8usize, 64, 256] {
        let names = collection_names(size);
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let package = static_package(&refs);
        // Every fourth collection written.
        let written: Vec<&str> = refs.iter().step_by(4).copied().collect();
        let pvt = pvt_write_set(&[("cc1", written.as_slice())]);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("trim", size), &size, |b, _| {
            b.iter(|| {
                let deployed: BTreeMap<String, CollectionConfigPackage> =
                    BTreeMap::from([("cc1".to_string(), package.clone())]);
                black_box(trim_collection_configs(&pvt, deployed))
            })
        });
    }

    group.finish();
}

// ============================================================================
// ASSEMBLY
// ============================================================================

const WRITTEN: &[&str] = &["colB"];

fn bench_assembly(c: &mut Criterion) {
    let mut group = c.benchmark_group("pc-01-assembly");
    group.measurement_time(Duration::from_secs(5));

    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");

    for namespaces in [1usize, 4, 16] {
        let ledger = Arc::new(InMemoryLedger::new());
        let names: Vec<String> = (0..namespaces).map(|i| format!("cc{i}")).collect();
        for name in &names {
            deploy(&ledger, name, Some(&static_package(&["colA", "colB", "colC"])));
        }
        let entries: Vec<(&str, &[&str])> = names
            .iter()
            .map(|name| (name.as_str(), WRITTEN))
            .collect();
        let pvt = pvt_write_set(&entries);
        let node = node_with_channels(vec![("bench", ledger)]);

        group.throughput(Throughput::Elements(namespaces as u64));
        group.bench_with_input(
            BenchmarkId::new("assemble", namespaces),
            &namespaces,
            |b, _| {
                b.iter(|| {
                    runtime.block_on(async {
                        black_box(
                            node.assemble_private_data("bench", pvt.clone(), 0)
                                .await
                                .is_ok(),
                        )
                    })
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_trimming, bench_assembly);
criterion_main!(benches);
