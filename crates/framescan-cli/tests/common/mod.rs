//! Common test utilities shared across integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Path to the framescan binary built for this test run
pub fn framescan_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_framescan"))
}

/// Build a framescan command running in `dir` with colors and config lookup
/// from the environment disabled.
pub fn framescan_command(dir: &Path) -> Command {
    let mut command = Command::new(framescan_binary());
    command
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("FRAMESCAN_CONFIG")
        .env_remove("FRAMESCAN_COLOR")
        .env_remove("RUST_LOG");
    command
}

/// Run the framescan binary directly in the specified directory
pub fn run_framescan_in_dir(dir: &Path, args: &[&str]) -> Output {
    framescan_command(dir)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute framescan binary")
}

/// Run the framescan binary with `input` piped to stdin
pub fn run_framescan_with_stdin(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = framescan_command(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn framescan binary");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("Failed to write to framescan stdin");

    child
        .wait_with_output()
        .expect("Failed to wait for framescan binary")
}

/// Write `contents` to `name` inside `dir` and return the full path
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write test file");
    path
}
