use std::path::Path;
use std::process::Command;

fn exe() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dcplot"))
}

fn fixture(dir: &Path) {
    std::fs::write(dir.join("trans.json"), r#"{"1": "Reading", "2": "Coding"}"#).unwrap();
    std::fs::write(dir.join("stats_2024-01-02.json"), r#"{"1": 3600, "2": 600}"#).unwrap();
    std::fs::write(dir.join("stats_2024-01-03.json"), r#"{"1": 5400, "2": 4200}"#).unwrap();
}

#[test]
fn renders_png_for_a_fixed_range() {
    let dir = tempfile::tempdir().expect("tempdir");
    fixture(dir.path());
    let out = dir.path().join("chart.png");

    let status = exe()
        .args(["-s", "2024-01-01", "--today", "2024-01-04", "-m", "400", "-n", "300", "-t"])
        .arg(dir.path())
        .arg(&out)
        .status()
        .expect("run dcplot");
    assert!(status.success());
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn invalid_start_date_exits_with_1() {
    let dir = tempfile::tempdir().expect("tempdir");
    fixture(dir.path());
    let out = dir.path().join("chart.png");
    let status = exe().args(["-s", "2024-13-01"]).arg(dir.path()).arg(&out).status().expect("run dcplot");
    assert_eq!(status.code(), Some(1));
    assert!(!out.exists());
}

#[test]
fn missing_mapping_exits_with_2() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("chart.png");
    let status = exe().args(["-s", "2024-01-01"]).arg(dir.path()).arg(&out).status().expect("run dcplot");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn zero_labels_exit_with_3() {
    let dir = tempfile::tempdir().expect("tempdir");
    fixture(dir.path());
    let status = exe()
        .args(["-s", "2024-01-01", "--today", "2024-01-04", "-x", "0"])
        .arg(dir.path())
        .arg(dir.path().join("chart.png"))
        .status()
        .expect("run dcplot");
    assert_eq!(status.code(), Some(3));
}

#[test]
fn missing_mapping_wins_over_bad_label_count() {
    let dir = tempfile::tempdir().expect("tempdir");
    let status = exe()
        .args(["-s", "2024-01-01", "--today", "2024-01-04", "-x", "0"])
        .arg(dir.path())
        .arg(dir.path().join("chart.png"))
        .status()
        .expect("run dcplot");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn one_day_delta_range_exits_with_4() {
    let dir = tempfile::tempdir().expect("tempdir");
    fixture(dir.path());
    let output = exe()
        .args(["-s", "2024-01-01", "--today", "2024-01-02"])
        .arg(dir.path())
        .arg(dir.path().join("chart.png"))
        .output()
        .expect("run dcplot");
    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too short for delta mode"), "stderr: {stderr}");
}
