//! Common test utilities

use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Create a temporary directory for testing
#[allow(dead_code)] // Not every integration test binary uses it
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Build a `teeny` invocation isolated from the developer's environment.
///
/// `home` stands in for `$HOME`, so `~/.teeny/config.toml` is read from there.
#[allow(dead_code)] // Not every integration test binary uses it
pub fn teeny(home: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_teeny"));
    command
        .env("HOME", home)
        .env_remove("TEENY_EXTRA_BASE_URLS")
        .env_remove("TEENY_LOG_DIR")
        .env_remove("TEENY_LOG_JSON")
        .env_remove("RUST_LOG");
    command
}

/// Write `~/.teeny/config.toml` under `home`.
#[allow(dead_code)] // Not every integration test binary uses it
pub fn write_user_config(home: &Path, content: &str) {
    let dir = home.join(".teeny");
    std::fs::create_dir_all(&dir).expect("Failed to create config dir");
    std::fs::write(dir.join("config.toml"), content).expect("Failed to write config");
}
