//! Tests that drive the compiled `bytemap` binary.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn bytemap() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bytemap"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = bytemap().output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"));
    assert!(stderr.contains("--scale"));
}

#[test]
fn test_writes_png_and_progress() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("a.bin");
    fs::write(&file, [0x41u8; 100]).unwrap();

    let output = bytemap()
        .args(["--scale", "4"])
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let img = image::load_from_memory(&output.stdout).unwrap().to_luma8();
    assert_eq!(img.dimensions(), (64, 64));
    assert_eq!(img.get_pixel(4, 16).0[0], 0);
    assert_eq!(img.get_pixel(0, 0).0[0], 255);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!("reading {}", file.display())));
}

#[test]
fn test_zero_scale_fails() {
    let output = bytemap().args(["--scale", "0", "whatever"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn test_bad_pattern_fails() {
    let output = bytemap().args(["--exclude", "[", "x"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_no_matching_files_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let pattern = format!("{}/*.nothing", dir.path().display());
    let output = bytemap().arg(pattern).output().unwrap();
    assert!(output.status.success());
    let img = image::load_from_memory(&output.stdout).unwrap().to_luma8();
    assert!(img.pixels().all(|p| p.0[0] == 255));
}
