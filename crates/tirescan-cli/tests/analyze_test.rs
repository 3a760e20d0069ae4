//! End-to-end checks for `tirescan analyze`.
//!
//! The API URL points at a closed loopback port, so a complete submission
//! always ends in a transport failure. Reply classification is covered
//! offline by `inspect_test.rs` and the handler unit tests.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tirescan_testing::TestWorld;
use tirescan_testing::assertions::assert_status;

#[test]
fn test_missing_api_key_fails_before_reading_photos() {
    let world = TestWorld::new().without_api_key();

    let mut cmd = cargo_bin_cmd!("tirescan");
    world
        .configure_command(&mut cmd)
        .args(["analyze", "--tire", "tire.jpg", "--car", "car.jpg"]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("TIRESCAN_API_KEY"));
}

#[test]
fn test_missing_car_photo_is_reported() -> anyhow::Result<()> {
    let world = TestWorld::new().with_photo("tire.jpg");

    let result = world.run(&["analyze", "--tire", "tire.jpg"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Please provide both photos"));
    assert!(result.stdout().contains("(no request sent)"));
    Ok(())
}

#[test]
fn test_unsupported_photo_format_is_invalid_input() -> anyhow::Result<()> {
    let world = TestWorld::new().with_photo("tire.jpg").with_photo("car.gif");

    let result = world.run(&[
        "--format", "json", "analyze", "--tire", "tire.jpg", "--car", "car.gif",
    ])?;

    assert!(result.success());
    let json = result.json()?;
    assert_status(&json, "invalid_input")?;
    assert!(json["content"]["raw_response"].is_null());
    Ok(())
}

#[test]
fn test_unreachable_api_is_connection_error() -> anyhow::Result<()> {
    let world = TestWorld::new().with_photo("tire.jpg").with_photo("car.jpg");

    let result = world.run(&["analyze", "--tire", "tire.jpg", "--car", "car.jpg"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Connection error:"));
    assert!(result.stdout().contains("(no response received)"));
    Ok(())
}

#[test]
fn test_unreachable_api_json_contract() -> anyhow::Result<()> {
    let world = TestWorld::new().with_photo("tire.jpg").with_photo("car.jpg");

    let result = world.run(&[
        "--format", "json", "analyze", "--tire", "tire.jpg", "--car", "car.jpg",
    ])?;

    let json = result.json()?;
    assert_status(&json, "transport_failed")?;
    assert_eq!(json["badge"]["level"], "error");
    assert!(json["content"].get("link").is_none());
    Ok(())
}

#[test]
fn test_output_file_receives_html_page() -> anyhow::Result<()> {
    let world = TestWorld::new().with_photo("tire.jpg").with_photo("car.jpg");
    let page = world.path("result.html");
    let page_arg = page.to_string_lossy().to_string();

    let result = world.run(&[
        "--format", "html", "analyze", "--tire", "tire.jpg", "--car", "car.jpg", "--output",
        &page_arg,
    ])?;

    assert!(result.success());
    assert!(result.stdout().is_empty());

    let html = std::fs::read_to_string(&page)?;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Connection error:"));
    assert!(html.contains("<details>"));
    Ok(())
}
