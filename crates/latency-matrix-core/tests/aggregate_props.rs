//! Aggregator behaviour over small in-memory datasets.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use latency_matrix_core::{Aggregator, MalformedPolicy, RegionStats, TelemetryRecord, TelemetryStore};

fn aggregator(records: &[(&str, f64, f64)]) -> Aggregator {
    let records = records
        .iter()
        .map(|&(region, lat, up)| TelemetryRecord::new(region, lat, up).unwrap())
        .collect();
    Aggregator::new(Arc::new(TelemetryStore::from_records(records).unwrap()))
}

#[test]
fn two_record_example() {
    let agg = aggregator(&[("iad", 100.0, 99.9), ("iad", 200.0, 99.5)]);
    let report = agg.compute(&["iad"], 150);

    assert_eq!(report.len(), 1);
    assert_eq!(
        report.get("iad"),
        Some(&RegionStats { avg_latency: 150.0, p95_latency: 195.0, avg_uptime: 99.7, breach_count: 1 })
    );
}

#[test]
fn unknown_region_is_all_zero() {
    let agg = aggregator(&[("iad", 100.0, 99.9)]);
    let report = agg.compute(&["nowhere"], 100);
    assert_eq!(report.get("nowhere"), Some(&RegionStats::ZERO));
}

#[test]
fn empty_request_yields_empty_report() {
    let agg = aggregator(&[("iad", 100.0, 99.9)]);
    let none: [&str; 0] = [];
    assert!(agg.compute(&none, 100).is_empty());
}

#[test]
fn single_record_stats_equal_the_record() {
    let agg = aggregator(&[("fra", 123.456, 98.766)]);
    let s = agg.region_stats("fra", 200);
    assert_eq!(s.avg_latency, 123.46);
    assert_eq!(s.p95_latency, 123.46);
    assert_eq!(s.avg_uptime, 98.77);
    assert_eq!(s.breach_count, 0);
    assert_eq!(agg.region_stats("fra", 100).breach_count, 1);
}

#[test]
fn threshold_itself_is_not_a_breach() {
    let agg = aggregator(&[("iad", 150.0, 99.0), ("iad", 151.0, 99.0)]);
    assert_eq!(agg.region_stats("iad", 150).breach_count, 1);
}

#[test]
fn breaches_never_increase_with_threshold() {
    let agg = aggregator(&[
        ("iad", 90.0, 99.0),
        ("iad", 140.0, 99.0),
        ("iad", 150.0, 99.0),
        ("iad", 210.0, 99.0),
        ("iad", 333.3, 99.0),
    ]);
    let mut prev = u64::MAX;
    for threshold in (0..400).step_by(10) {
        let b = agg.region_stats("iad", threshold).breach_count;
        assert!(b <= prev, "threshold {threshold}: {b} > {prev}");
        prev = b;
    }
    assert_eq!(agg.region_stats("iad", -1).breach_count, 5);
    assert_eq!(prev, 0);
}

#[test]
fn averages_ignore_record_order() {
    let rows = [("lhr", 101.1, 99.1), ("lhr", 250.7, 97.3), ("lhr", 80.2, 99.9), ("lhr", 160.0, 98.4)];
    let mut reversed = rows;
    reversed.reverse();

    let a = aggregator(&rows).region_stats("lhr", 100);
    let b = aggregator(&reversed).region_stats("lhr", 100);
    assert_eq!(a, b);
}

#[test]
fn case_variants_each_get_an_entry() {
    let agg = aggregator(&[("us-east", 120.0, 99.0), ("US-East", 180.0, 98.0)]);
    let report = agg.compute(&["us-east", "US-EAST"], 150);

    assert_eq!(report.len(), 2);
    assert_eq!(report.get("us-east"), report.get("US-EAST"));
    assert_eq!(report.get("us-east").unwrap().breach_count, 1);
}

#[test]
fn exact_repeat_keeps_first_position() {
    let agg = aggregator(&[("iad", 100.0, 99.0)]);
    let report = agg.compute(&["iad", "sfo", "iad"], 50);
    let keys: Vec<&str> = report.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["iad", "sfo"]);
}

#[test]
fn report_serializes_with_wire_names() {
    let agg = aggregator(&[("iad", 100.0, 99.9), ("iad", 200.0, 99.5)]);
    let report = agg.compute(&["iad", "nowhere"], 150);
    let v = serde_json::to_value(&report).unwrap();

    assert_eq!(v["iad"]["avg_latency"], 150.0);
    assert_eq!(v["iad"]["p95_latency"], 195.0);
    assert_eq!(v["iad"]["avg_uptime"], 99.7);
    assert_eq!(v["iad"]["breaches"], 1);
    assert_eq!(v["nowhere"]["breaches"], 0);
    assert!(v["iad"].get("breach_count").is_none());
}

#[test]
fn aggregates_loaded_vectors() {
    let s = std::fs::read_to_string("tests/vectors/telemetry_small.json").unwrap();
    let store = TelemetryStore::from_json_str(&s, MalformedPolicy::Reject).unwrap();
    let agg = Aggregator::new(Arc::new(store));

    // 150.25, 180.5, 210 -> mean 180.25; p95 pos 1.9 -> 180.5 + 0.9 * 29.5 = 207.05
    let s = agg.region_stats("US-EAST", 175);
    assert_eq!(s.avg_latency, 180.25);
    assert_eq!(s.p95_latency, 207.05);
    assert_eq!(s.avg_uptime, 98.21);
    assert_eq!(s.breach_count, 2);
}

#[test]
fn single_record_uptime_rounds_like_the_stored_value() {
    let agg = aggregator(&[("a", 10.0, 97.365), ("b", 10.0, 98.595), ("c", 10.0, 97.345)]);
    assert_eq!(agg.region_stats("a", 0).avg_uptime, 97.36);
    assert_eq!(agg.region_stats("b", 0).avg_uptime, 98.59);
    assert_eq!(agg.region_stats("c", 0).avg_uptime, 97.34);
}

#[test]
fn mean_on_an_exact_tie_rounds_to_even() {
    // (100.25 + 100.0) / 2 = 100.125, exactly representable
    let agg = aggregator(&[("x", 100.25, 99.0), ("x", 100.0, 99.0)]);
    assert_eq!(agg.region_stats("x", 0).avg_latency, 100.12);
}

#[test]
fn aggregates_shipped_dataset() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/q-vercel-latency.json");
    let store = TelemetryStore::load(path, MalformedPolicy::Reject).unwrap();
    assert_eq!(store.len(), 36);

    let agg = Aggregator::new(Arc::new(store));
    let report = agg.compute(&["apac", "EMEA", "amer"], 180);

    // apac latency mean is 161.92499999999998 before rounding
    assert_eq!(
        report.get("apac"),
        Some(&RegionStats { avg_latency: 161.92, p95_latency: 224.57, avg_uptime: 98.65, breach_count: 5 })
    );
    assert_eq!(
        report.get("EMEA"),
        Some(&RegionStats { avg_latency: 174.37, p95_latency: 222.04, avg_uptime: 98.66, breach_count: 5 })
    );
    assert_eq!(
        report.get("amer"),
        Some(&RegionStats { avg_latency: 155.51, p95_latency: 211.54, avg_uptime: 98.4, breach_count: 3 })
    );
}
