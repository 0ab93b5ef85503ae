//! End-to-end evaluation against data sources on disk.

use std::fs;
use std::path::{Path, PathBuf};

use pt_app::{evaluate, AppError};

/// T(k) = k + 1, U(k) = 2k + 2 over [-10, 10].
const LINEAR_TRIPLES: &str = "-10 -9 -18\n-5 -4 -8\n0 1 2\n5 6 12\n10 11 22\n";

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pt-app-{}-{}", tag, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_sources(dir: &Path) {
    for name in ["X1_00.dat", "X_1_1.dat", "X00_1.dat"] {
        fs::write(dir.join(name), LINEAR_TRIPLES).unwrap();
    }
}

#[test]
fn evaluates_against_the_selected_source() {
    let dir = scratch_dir("select");
    write_sources(&dir);

    let report = evaluate(0.5, 0.1, 0.2, &dir).unwrap();
    assert_eq!(report.source, "X1_00");

    let report = evaluate(-0.5, 0.1, 0.2, &dir).unwrap();
    assert_eq!(report.source, "X_1_1");

    let report = evaluate(5.0, 0.1, 0.2, &dir).unwrap();
    assert_eq!(report.source, "X00_1");
    let expected_fun3 = 1.3498 * 0.2 + 2.2362 * 0.1 - 2.348 * 5.0 * 0.1;
    assert!((report.fun3 - expected_fun3).abs() < 1e-12);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn repeated_evaluations_are_identical() {
    let dir = scratch_dir("repeat");
    write_sources(&dir);

    let first = evaluate(0.4, -0.2, 0.3, &dir).unwrap();
    let second = evaluate(0.4, -0.2, 0.3, &dir).unwrap();
    assert_eq!(first.fun1.to_bits(), second.fun1.to_bits());
    assert_eq!(first.fun2.to_bits(), second.fun2.to_bits());
    assert_eq!(first.fun3.to_bits(), second.fun3.to_bits());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_data_directory_is_unavailable() {
    let dir = std::env::temp_dir().join("pt-app-definitely-not-created");
    let err = evaluate(0.5, 0.0, 0.0, &dir).unwrap_err();
    assert!(matches!(err, AppError::Table(_)));
}

#[test]
fn empty_source_is_unavailable() {
    let dir = scratch_dir("empty");
    write_sources(&dir);
    fs::write(dir.join("X00_1.dat"), "").unwrap();

    let err = evaluate(5.0, 0.0, 0.0, &dir).unwrap_err();
    assert!(err.to_string().contains("empty or invalid"));

    let _ = fs::remove_dir_all(&dir);
}
