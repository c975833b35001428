// File: crates/dcplot-core/tests/store.rs
// Purpose: Loading the name mapping and daily stats files, including gaps and malformed input.

use std::path::Path;

use chrono::NaiveDate;
use dcplot_core::{build_series, parse_start_date, DateRange, EntityId, ErrorKind, Mode, PlotError, SnapshotStore};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn write(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).expect("write fixture");
}

#[test]
fn missing_name_mapping_is_a_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = SnapshotStore::open(dir.path()).unwrap_err();
    assert!(matches!(err, PlotError::MissingNames(ref p) if p.ends_with("trans.json")));
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn names_fall_back_to_empty_and_skip_bad_ids() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "trans.json", r#"{"12": "Reading", "7": 3, "abc": "nope"}"#);
    let store = SnapshotStore::open(dir.path()).unwrap();
    let names = store.names().unwrap();
    assert_eq!(names.len(), 2);
    assert_eq!(names[&EntityId(12)], "Reading");
    assert_eq!(names[&EntityId(7)], "");
}

#[test]
fn malformed_name_mapping_reads_as_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "trans.json", "[1, 2");
    let store = SnapshotStore::open(dir.path()).unwrap();
    assert!(store.names().unwrap().is_empty());
}

#[test]
fn load_reads_counts_and_reports_missing_days() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "trans.json", "{}");
    write(dir.path(), "stats_2024-01-02.json", r#"{"1": 100, "2": 12.9, "3": "x"}"#);
    let store = SnapshotStore::open(dir.path()).unwrap();

    assert!(store.load(d("2024-01-01")).unwrap().is_none());

    let snap = store.load(d("2024-01-02")).unwrap().expect("present");
    assert_eq!(snap.date, d("2024-01-02"));
    assert_eq!(snap.values[&EntityId(1)], 100);
    assert_eq!(snap.values[&EntityId(2)], 12);
    assert_eq!(snap.values[&EntityId(3)], 0);
}

#[test]
fn malformed_day_is_an_empty_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "trans.json", "{}");
    write(dir.path(), "stats_2024-01-02.json", "not json");
    write(dir.path(), "stats_2024-01-03.json", "[1, 2, 3]");
    let store = SnapshotStore::open(dir.path()).unwrap();

    let a = store.load(d("2024-01-02")).unwrap().expect("present");
    assert!(a.values.is_empty());
    let b = store.load(d("2024-01-03")).unwrap().expect("present");
    assert!(b.values.is_empty());
}

#[test]
fn negative_and_oversized_counts_are_clamped() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "trans.json", "{}");
    write(
        dir.path(),
        "stats_2024-01-02.json",
        r#"{"1": -5, "2": -9223372036854775808, "3": 18446744073709551615, "4": -0.5}"#,
    );
    let store = SnapshotStore::open(dir.path()).unwrap();

    let snap = store.load(d("2024-01-02")).unwrap().expect("present");
    assert_eq!(snap.values[&EntityId(1)], 0);
    assert_eq!(snap.values[&EntityId(2)], 0);
    assert_eq!(snap.values[&EntityId(3)], i64::MAX);
    assert_eq!(snap.values[&EntityId(4)], 0);
    assert!(snap.values.values().all(|&v| v >= 0));
}

#[test]
fn extreme_counters_build_a_delta_series() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "trans.json", "{}");
    write(dir.path(), "stats_2024-01-02.json", r#"{"1": -9223372036854775808}"#);
    write(dir.path(), "stats_2024-01-03.json", r#"{"1": 9223372036854775807}"#);
    let store = SnapshotStore::open(dir.path()).unwrap();

    let set = build_series(&store, DateRange::new(d("2024-01-01"), d("2024-01-03")).unwrap(), Mode::Delta).unwrap();
    let s = set.get(EntityId(1)).unwrap();
    assert_eq!(s.samples.len(), 2);
    assert_eq!(s.samples[0].y, 0.0);
    assert!(s.samples[1].y.is_finite() && s.samples[1].y > 0.0);
}

#[test]
fn days_walks_every_date_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    write(dir.path(), "trans.json", "{}");
    write(dir.path(), "stats_2024-02-28.json", r#"{"1": 1}"#);
    write(dir.path(), "stats_2024-03-01.json", r#"{"1": 2}"#);
    let store = SnapshotStore::open(dir.path()).unwrap();

    let range = DateRange::new(d("2024-02-27"), d("2024-03-01")).unwrap();
    let days = store.days(range).collect::<Result<Vec<_>, _>>().unwrap();
    let dates = days.iter().map(|(date, _)| *date).collect::<Vec<_>>();
    assert_eq!(dates, vec![d("2024-02-27"), d("2024-02-28"), d("2024-02-29"), d("2024-03-01")]);
    let present = days.iter().map(|(_, s)| s.is_some()).collect::<Vec<_>>();
    assert_eq!(present, vec![false, true, false, true]);
}

#[test]
fn start_date_parsing() {
    assert_eq!(parse_start_date("2024-01-31").unwrap(), d("2024-01-31"));
    assert!(matches!(parse_start_date("2024-02-30"), Err(PlotError::InvalidStartDate(_))));
    assert!(matches!(parse_start_date("01/02/2024"), Err(PlotError::InvalidStartDate(_))));
    assert!(matches!(parse_start_date(""), Err(PlotError::InvalidStartDate(_))));
}

#[test]
fn inverted_range_is_a_range_error() {
    let err = DateRange::new(d("2024-01-05"), d("2024-01-01")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);

    let r = DateRange::new(d("2023-12-30"), d("2024-01-02")).unwrap();
    assert_eq!(r.span_days(), 3);
    assert_eq!(r.date_at(2), d("2024-01-01"));
}
