//! Test utilities for claude-ext.
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration test suite.

use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Once, OnceLock};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

use crate::mcp::ConfigPaths;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Follows `RUST_LOG`; without it logging stays off. Safe to call from every
/// test.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// Remove ANSI color sequences so output can be compared as plain text.
///
/// # Panics
///
/// Never in practice; the pattern is a constant.
#[must_use]
pub fn strip_ansi(content: &str) -> String {
    static ANSI_RE: OnceLock<Regex> = OnceLock::new();
    let re = ANSI_RE.get_or_init(|| Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").unwrap());
    re.replace_all(content, "").to_string()
}

/// A throwaway home directory holding the three config file locations.
///
/// The directory is deleted when the value is dropped.
pub struct TestHome {
    temp: TempDir,
    paths: ConfigPaths,
}

impl TestHome {
    /// Create an empty home directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let temp = TempDir::new().expect("failed to create temp home");
        let paths = ConfigPaths::from_home(temp.path());
        Self {
            temp,
            paths,
        }
    }

    /// Root of the home directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Config file locations inside this home.
    #[must_use]
    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// `~/.claude/settings.json`
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.paths.settings.clone()
    }

    /// `~/.claude.json`
    #[must_use]
    pub fn legacy_path(&self) -> PathBuf {
        self.paths.legacy.clone()
    }

    /// `~/.claude-ext.json`
    #[must_use]
    pub fn disabled_path(&self) -> PathBuf {
        self.paths.disabled.clone()
    }

    /// Write `value` to `~/.claude/settings.json`.
    pub fn write_settings(&self, value: &Value) {
        write_value(&self.paths.settings, value);
    }

    /// Write `value` to `~/.claude.json`.
    pub fn write_legacy(&self, value: &Value) {
        write_value(&self.paths.legacy, value);
    }

    /// Write `value` to `~/.claude-ext.json`.
    pub fn write_disabled(&self, value: &Value) {
        write_value(&self.paths.disabled, value);
    }

    /// Write raw text to `path`, creating parent directories.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_raw(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directory");
        }
        fs::write(path, content).expect("failed to write test file");
    }

    /// Parse the JSON file at `path`.
    ///
    /// # Panics
    ///
    /// Panics if the file is missing or not valid JSON.
    #[must_use]
    pub fn read_json(&self, path: &Path) -> Value {
        let content = fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("invalid JSON in {}: {e}", path.display()))
    }
}

impl Default for TestHome {
    fn default() -> Self {
        Self::new()
    }
}

fn write_value(path: &Path, value: &Value) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("failed to create parent directory");
    }
    let content = serde_json::to_string_pretty(value).expect("failed to serialize test JSON");
    fs::write(path, content).expect("failed to write test file");
}
