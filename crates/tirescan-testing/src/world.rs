//! Isolated environment for driving the `tirescan` binary from tests.
//!
//! Each world owns a temp directory used as the working directory, a config
//! path inside it, and the exact `TIRESCAN_*` variables the child process sees.

use anyhow::{Context, Result};
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};
use tempfile::TempDir;
use tirescan_runtime::config::{
    API_KEY_ENV, API_URL_ENV, CONFIG_PATH_ENV, SEARCH_BASE_URL_ENV, TIMEOUT_ENV,
};

use crate::fixtures;

/// Nothing listens on the discard port, so requests fail fast with a
/// connection error instead of reaching the real API.
pub const UNREACHABLE_API_URL: &str = "http://127.0.0.1:9/v1/analyze";

/// Builder for one isolated CLI run environment.
///
/// # Example
/// ```no_run
/// use tirescan_testing::TestWorld;
///
/// let world = TestWorld::new()
///     .with_photo("tire.jpg")
///     .with_photo("car.jpg");
///
/// let result = world.run(&["inspect", "reply.json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with a dummy API key and an
    /// API URL that cannot be reached.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(".tirescan").join("config.toml");

        let mut env_vars = HashMap::new();
        env_vars.insert(API_KEY_ENV.to_string(), "test-key".to_string());
        env_vars.insert(API_URL_ENV.to_string(), UNREACHABLE_API_URL.to_string());
        env_vars.insert(TIMEOUT_ENV.to_string(), "5".to_string());

        Self {
            temp_dir,
            config_path,
            env_vars,
        }
    }

    /// Working directory of every run.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the config file path passed via `--config`.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Path of a file inside the temp directory (it may not exist yet).
    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Add or replace a variable passed to the child process.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Run without `TIRESCAN_API_KEY`.
    pub fn without_api_key(mut self) -> Self {
        self.env_vars.remove(API_KEY_ENV);
        self
    }

    /// Place a fake photo in the temp directory.
    pub fn with_photo(self, name: &str) -> Self {
        fixtures::write_photo(self.temp_dir.path(), name).expect("Failed to write photo");
        self
    }

    /// Save an API reply as JSON and return its path.
    pub fn write_reply(&self, name: &str, reply: &Value) -> Result<PathBuf> {
        let path = self.path(name);
        std::fs::write(&path, serde_json::to_string_pretty(reply)?)?;
        Ok(path)
    }

    /// Point `cmd` at this world: config path, working directory and env.
    ///
    /// Inherited `TIRESCAN_*` variables are cleared first so the developer's
    /// own environment cannot leak into a test.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        for key in [
            API_KEY_ENV,
            API_URL_ENV,
            SEARCH_BASE_URL_ENV,
            TIMEOUT_ENV,
            CONFIG_PATH_ENV,
        ] {
            cmd.env_remove(key);
        }
        cmd.env_remove("RUST_LOG");

        cmd.arg("--config").arg(&self.config_path);
        cmd.current_dir(self.temp_dir.path());

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run `tirescan` with `args` and capture its output.
    ///
    /// Only usable from the CLI crate's tests, where cargo builds the binary.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("tirescan")
            .map_err(|e| anyhow::anyhow!("Failed to find tirescan binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        Ok(CliResult::from(cmd.output()?))
    }
}

/// Captured exit status and output of one run
#[derive(Debug)]
pub struct CliResult {
    status: ExitStatus,
    stdout: String,
    stderr: String,
}

impl From<Output> for CliResult {
    fn from(output: Output) -> Self {
        Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// stdout of a `--format json` run
    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.stdout)
            .with_context(|| format!("stdout is not JSON:\n{}", self.stdout))
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
