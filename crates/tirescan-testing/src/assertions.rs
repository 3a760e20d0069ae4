//! Custom assertions for tirescan-specific validation.
//!
//! Provides high-level assertions over `--format json` output:
//! - Outcome status checks
//! - Search link verification

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that JSON output reports the expected outcome status.
pub fn assert_status(json: &Value, expected: &str) -> Result<()> {
    let status = json["content"]["status"]
        .as_str()
        .context("Expected 'content.status' string in JSON")?;

    if status != expected {
        anyhow::bail!("Expected status '{}', got '{}'", expected, status);
    }

    Ok(())
}

/// Assert that JSON output carries a search link ending with `suffix`.
pub fn assert_link_ends_with(json: &Value, suffix: &str) -> Result<()> {
    let link = json["content"]["link"]
        .as_str()
        .context("Expected 'content.link' string in JSON")?;

    if !link.ends_with(suffix) {
        anyhow::bail!("Expected link ending with '{}', got '{}'", suffix, link);
    }

    Ok(())
}
