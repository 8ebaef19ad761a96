#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use assert_cmd::Command;
use once_cell::sync::Lazy;
use tempfile::TempDir;

pub const BIN_NAME: &str = "finance_tracker_cli";

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated working directory for one test.
pub fn setup_test_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Binary invocation running in `dir`, so the database lands there.
pub fn script_command(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}
