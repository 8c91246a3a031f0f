//! Performance benchmarks for the Shift Extraction Engine.
//!
//! Covers time-range normalization on its own, a full scan of month-sized
//! sheets of increasing size, and the `/extract` endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shift_extractor::api::{AppState, create_router};
use shift_extractor::config::{ConfigLoader, ScannerConfig};
use shift_extractor::extraction::{extract_shifts, normalize_shift};
use shift_extractor::models::{Cell, Grid};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const NAME: &str = "宇都宮美香";
const STAFF: [&str; 6] = ["宇都宮美香", "山田太郎", "佐藤花子", "鈴木一郎", "高橋誠", "田中優子"];
const TIMES: [&str; 5] = ["9-18", "22:30-6:00", "休み", "13:00-22:00", "8:30 - 17:30"];
const WEEKDAYS: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

/// Builds a month sheet laid out in weekly blocks: a row of day numbers,
/// a weekday row, a spacer, then one row per staff member with name/time
/// column pairs.
fn create_month_grid(weeks: usize) -> Grid {
    let mut rows = Vec::new();
    let mut day = 1;
    for week in 0..weeks {
        let mut days = Vec::new();
        let mut weekdays = Vec::new();
        for d in 0..7 {
            days.push(Cell::from(((day + d - 1) % 31 + 1).to_string()));
            days.push(Cell::Empty);
            weekdays.push(Cell::from(WEEKDAYS[d]));
            weekdays.push(Cell::Empty);
        }
        rows.push(days);
        rows.push(weekdays);
        rows.push(Vec::new());
        for (s, staff) in STAFF.iter().enumerate() {
            let mut row = Vec::new();
            for d in 0..7 {
                row.push(Cell::from(*staff));
                row.push(Cell::from(TIMES[(week + s + d) % TIMES.len()]));
            }
            rows.push(row);
        }
        day += 7;
    }
    Grid::new(rows)
}

fn bench_normalize_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_shift");
    for raw in ["9-18", "22:30-6:00", "早番 8:00 - 17:00", "休み"] {
        group.bench_with_input(BenchmarkId::from_parameter(raw), raw, |b, raw| {
            b.iter(|| normalize_shift(black_box(raw)))
        });
    }
    group.finish();
}

fn bench_extract_shifts(c: &mut Criterion) {
    let config = ScannerConfig::default();
    let mut group = c.benchmark_group("extract_shifts");
    for weeks in [1usize, 5, 52] {
        let grid = create_month_grid(weeks);
        group.throughput(Throughput::Elements(weeks as u64 * 7));
        group.bench_with_input(BenchmarkId::from_parameter(weeks), &grid, |b, grid| {
            b.iter(|| extract_shifts(black_box(grid), NAME, &config))
        });
    }
    group.finish();
}

fn bench_extract_endpoint(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/scanner.yaml").expect("Failed to load config");
    let router = create_router(AppState::new(config));
    let body = serde_json::json!({
        "name": NAME,
        "workbook": { "sheets": [ { "name": "1月", "rows": create_month_grid(5) } ] }
    })
    .to_string();

    let rt = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    c.bench_function("extract_endpoint_month", |b| {
        b.to_async(&rt).iter(|| {
            let router = router.clone();
            let body = body.clone();
            async move {
                router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/extract")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap()
            }
        })
    });
}

criterion_group!(
    benches,
    bench_normalize_shift,
    bench_extract_shifts,
    bench_extract_endpoint
);
criterion_main!(benches);
