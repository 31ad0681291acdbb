use std::path::PathBuf;
use std::sync::Mutex;

use assert_cmd::Command;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A fresh data directory for `GIFT_GALAXY_HOME`.
pub fn isolated_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// The CLI binary in script mode, reading commands from `input`.
pub fn script(home: &PathBuf, input: &str) -> Command {
    let mut cmd = Command::cargo_bin("gift_galaxy_cli").expect("binary built");
    cmd.env("GIFT_GALAXY_CLI_SCRIPT", "1")
        .env("GIFT_GALAXY_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .write_stdin(input.to_string());
    cmd
}
