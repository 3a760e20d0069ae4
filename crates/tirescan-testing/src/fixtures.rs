//! Fixtures for sample data generation and placement.
//!
//! Provides:
//! - Photo files large enough to pass the encoder's plausibility check
//! - Canned recognition API replies covering every outcome

use anyhow::Result;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

/// JPEG SOI/APP0 marker followed by filler bytes
pub fn jpeg_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
    bytes.resize(len.max(4), 0x5A);
    bytes
}

/// Write a fake photo into `dir` and return its path.
pub fn write_photo(dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, jpeg_bytes(1024))?;
    Ok(path)
}

/// Reply for a Toyota Corolla read off the sidewall as 195/65 R15.
pub fn corolla_reply() -> Value {
    json!({
        "success": true,
        "data": {
            "vehicles": [{
                "brand": "Toyota",
                "model": "Corolla",
                "current_tire": {"width": 195, "aspect_ratio": 65, "diameter": 15}
            }]
        }
    })
}

/// Reply where only the factory rear size is complete.
pub fn rear_only_reply() -> Value {
    json!({
        "success": true,
        "data": {
            "vehicles": [{
                "brand": "BMW",
                "model": "Serie 3",
                "current_tire": {"width": 225, "aspect_ratio": null, "diameter": 17},
                "oe_front_tire": null,
                "oe_rear_tire": {"width": "255", "aspect_ratio": "40", "diameter": "18"}
            }]
        }
    })
}

pub fn incomplete_reply() -> Value {
    json!({
        "success": true,
        "data": {
            "vehicles": [{
                "brand": "Ford",
                "model": "Focus",
                "current_tire": {"width": 205}
            }]
        }
    })
}

/// `success: true` with the placeholder empty vehicle the API sends on no match.
pub fn placeholder_reply() -> Value {
    json!({"success": true, "data": {"vehicles": [{}]}})
}

pub fn api_error_reply(message: &str) -> Value {
    json!({"success": false, "error": message})
}
