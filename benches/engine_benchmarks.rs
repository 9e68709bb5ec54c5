//! Performance benchmarks for the Bill Settlement Engine.
//!
//! This benchmark suite tracks the cost of one full settle computation
//! through the HTTP layer and the cost of the raw solver as the party
//! grows.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use bill_engine::api::{AppState, create_router};
use bill_engine::calculation::{SettlementUnit, solve_settlements};
use bill_engine::config::ConfigLoader;
use rust_decimal::Decimal;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/gst_pst").expect("Failed to load config");
    AppState::new(config)
}

/// Creates a settle request where `party_size` people share one item
/// each and the first person paid the whole bill.
fn create_request_body(party_size: usize) -> String {
    let people: Vec<serde_json::Value> = (0..party_size)
        .map(|i| {
            serde_json::json!({
                "id": format!("p_{:03}", i),
                "name": format!("Person {:03}", i)
            })
        })
        .collect();

    let all_ids: Vec<String> = (0..party_size).map(|i| format!("p_{:03}", i)).collect();

    let items: Vec<serde_json::Value> = (0..party_size)
        .map(|i| {
            serde_json::json!({
                "id": format!("i_{:03}", i),
                "name": format!("Item {:03}", i),
                "price": format!("{}.75", 8 + (i % 17)),
                "tax_category": if i % 3 == 0 { "container" } else { "standard" },
                "shared_with": all_ids
            })
        })
        .collect();

    let request = serde_json::json!({
        "people": people,
        "items": items,
        "payments": { "p_000": "500" },
        "tip": { "mode": "percent", "value": "15" }
    });

    serde_json::to_string(&request).expect("Failed to create request")
}

/// Benchmark: one settle computation for a four-person dinner.
fn bench_single_settle(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();
    let router = create_router(state);
    let body = create_request_body(4);

    c.bench_function("single_settle", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/settle")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: party sizes from 2 to 32 to understand scaling behavior.
fn bench_party_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let mut group = c.benchmark_group("party_scaling");

    for party_size in [2, 4, 8, 16, 32].iter() {
        let router = create_router(state.clone());
        let body = create_request_body(*party_size);

        group.throughput(Throughput::Elements(*party_size as u64));
        group.bench_with_input(
            BenchmarkId::new("people", party_size),
            party_size,
            |b, _| {
                b.to_async(&rt).iter(|| async {
                    let router = router.clone();
                    let response = router
                        .oneshot(
                            Request::builder()
                                .method("POST")
                                .uri("/settle")
                                .header("Content-Type", "application/json")
                                .body(Body::from(body.clone()))
                                .unwrap(),
                        )
                        .await
                        .unwrap();
                    black_box(response)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: the raw greedy solver without the HTTP layer.
fn bench_raw_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_solver");

    for unit_count in [4, 16, 64].iter() {
        // Alternate creditors and debtors so the books balance.
        let units: Vec<SettlementUnit> = (0..*unit_count)
            .map(|i| SettlementUnit {
                id: format!("u_{:03}", i),
                display_name: format!("Unit {:03}", i),
                balance: if i % 2 == 0 {
                    Decimal::new(1000 + i as i64 * 37, 2)
                } else {
                    -Decimal::new(1000 + (i as i64 - 1) * 37, 2)
                },
            })
            .collect();

        group.throughput(Throughput::Elements(*unit_count as u64));
        group.bench_with_input(BenchmarkId::new("units", unit_count), unit_count, |b, _| {
            b.iter(|| black_box(solve_settlements(&units)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_settle, bench_party_scaling, bench_raw_solver);
criterion_main!(benches);
