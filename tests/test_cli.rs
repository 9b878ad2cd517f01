//! End-to-end tests for the `templatize` binary
//!
//! These run the compiled binary and check exit status, stderr and the files left
//! behind for each combination of INPUT, OUTPUT and --in-place.

mod common;

use std::ffi::OsStr;
use std::process::{Command, Output};

use common::{Fixture, read_rgba};

fn templatize(args: &[&OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_templatize"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("run templatize")
}

#[test]
fn test_separate_output() {
    let fx = Fixture::new();
    let input = fx.png("in.png", 2, 1, &[[10, 20, 30, 255], [200, 200, 200, 255]]);
    let output = fx.path("out.png");

    let out = templatize(&[input.as_os_str(), output.as_os_str()]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let img = read_rgba(&output);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 237]);
    assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 55]);
}

#[test]
fn test_in_place_flag() {
    let fx = Fixture::new();
    let input = fx.png("foo.png", 1, 1, &[[0, 0, 0, 255]]);

    let out = templatize(&[OsStr::new("--in-place"), input.as_os_str()]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(read_rgba(&input).get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(std::fs::read_dir(fx.dir.path()).unwrap().count(), 1);
}

#[test]
fn test_sequential_flag_matches_default() {
    let fx = Fixture::new();
    let input = fx.pattern_png("in.png", 31, 17);
    let par = fx.path("par.png");
    let seq = fx.path("seq.png");

    assert!(templatize(&[input.as_os_str(), par.as_os_str()]).status.success());
    assert!(templatize(&[OsStr::new("--sequential"), input.as_os_str(), seq.as_os_str()]).status.success());
    assert_eq!(std::fs::read(&par).unwrap(), std::fs::read(&seq).unwrap());
}

#[test]
fn test_in_place_with_output_is_rejected() {
    let fx = Fixture::new();
    let input = fx.png("in.png", 1, 1, &[[9, 9, 9, 255]]);
    let before = std::fs::read(&input).unwrap();
    let output = fx.path("out.png");

    let out = templatize(&[OsStr::new("-i"), input.as_os_str(), output.as_os_str()]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("in-place"), "stderr: {}", stderr);
    assert!(!output.exists());
    assert_eq!(std::fs::read(&input).unwrap(), before);
}

#[test]
fn test_missing_output_is_rejected() {
    let fx = Fixture::new();
    let input = fx.png("in.png", 1, 1, &[[9, 9, 9, 255]]);
    let before = std::fs::read(&input).unwrap();

    let out = templatize(&[input.as_os_str()]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("output path is required"), "stderr: {}", stderr);
    assert_eq!(std::fs::read(&input).unwrap(), before);
    assert_eq!(std::fs::read_dir(fx.dir.path()).unwrap().count(), 1);
}

#[test]
fn test_unreadable_input_fails() {
    let fx = Fixture::new();
    let input = fx.path("missing.png");
    let output = fx.path("out.png");

    let out = templatize(&[input.as_os_str(), output.as_os_str()]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("missing.png"), "stderr: {}", stderr);
    assert!(!output.exists());
}
