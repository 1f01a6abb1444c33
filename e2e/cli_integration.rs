// e2e/cli_integration.rs — black-box tests of the `bcpack` binary via
// std::process::Command: argument parsing, compress/decompress dispatch,
// stdout mode, suffix stripping, and exit codes.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tempfile::TempDir;

fn bcpack_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_bcpack") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("bcpack");
    p
}

fn make_temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.txt");
    let content = "The quick brown fox jumps over the lazy dog.\n".repeat(200);
    fs::write(&input_path, content).unwrap();
    (dir, input_path)
}

#[test]
fn compress_then_decompress_round_trips_through_files() {
    let (dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();

    let compressed = dir.path().join("output.bc");
    let status = Command::new(bcpack_bin())
        .args(["-f", input.to_str().unwrap(), compressed.to_str().unwrap()])
        .status()
        .expect("failed to run bcpack compress");
    assert!(status.success());
    assert!(compressed.exists());

    let restored = dir.path().join("restored.txt");
    let status = Command::new(bcpack_bin())
        .args(["-d", "-f", compressed.to_str().unwrap(), restored.to_str().unwrap()])
        .status()
        .expect("failed to run bcpack decompress");
    assert!(status.success());

    let restored_bytes = fs::read(&restored).unwrap();
    assert_eq!(restored_bytes, original);
}

#[test]
fn default_output_name_appends_bc_suffix() {
    let (dir, input) = make_temp_input();
    let status = Command::new(bcpack_bin())
        .arg(input.to_str().unwrap())
        .status()
        .unwrap();
    assert!(status.success());
    assert!(dir.path().join("input.txt.bc").exists());
}

#[test]
fn decompress_strips_bc_suffix_by_default() {
    let (dir, input) = make_temp_input();
    Command::new(bcpack_bin()).arg(input.to_str().unwrap()).status().unwrap();
    let packed = dir.path().join("input.txt.bc");
    assert!(packed.exists());

    let status = Command::new(bcpack_bin())
        .args(["-d", "-f", packed.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());
    assert!(dir.path().join("input.txt").exists());
}

#[test]
fn stdout_flag_writes_compressed_bytes_to_stdout() {
    let (_dir, input) = make_temp_input();
    let output = Command::new(bcpack_bin())
        .args(["-c", input.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(&output.stdout[0..1], &[0xBCu8]);
}

#[test]
fn reads_from_stdin_when_no_file_given() {
    let mut child = Command::new(bcpack_bin())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"hello from stdin, hello from stdin")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout[0], 0xBC);
}

#[test]
fn unrecognized_flag_exits_nonzero() {
    let status = Command::new(bcpack_bin()).args(["--not-a-real-flag"]).status().unwrap();
    assert!(!status.success());
}

#[test]
fn help_flag_exits_zero() {
    let status = Command::new(bcpack_bin()).args(["--help"]).status().unwrap();
    assert!(status.success());
}

#[test]
fn version_flag_exits_zero() {
    let status = Command::new(bcpack_bin()).args(["-V"]).status().unwrap();
    assert!(status.success());
}

#[test]
fn force_flag_overwrites_existing_output_without_prompting() {
    let (dir, input) = make_temp_input();
    let compressed = dir.path().join("output.bc");
    fs::write(&compressed, b"stale contents").unwrap();

    let status = Command::new(bcpack_bin())
        .args(["-f", input.to_str().unwrap(), compressed.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());
    assert_ne!(fs::read(&compressed).unwrap(), b"stale contents");
}
