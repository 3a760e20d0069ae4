use tirescan_testing::TestWorld;

#[test]
fn test_config_init_writes_defaults() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "init"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Config file written"));

    let content = std::fs::read_to_string(world.config_path())?;
    assert!(content.contains("api_url = \"https://api.ruedalens.com/v1/analyze\""));
    assert!(content.contains("timeout_secs = 30"));
    assert!(!content.contains("test-key"));
    Ok(())
}

#[test]
fn test_config_init_keeps_existing_file() -> anyhow::Result<()> {
    let world = TestWorld::new();
    std::fs::create_dir_all(world.config_path().parent().unwrap())?;
    std::fs::write(world.config_path(), "timeout_secs = 12\n")?;

    let result = world.run(&["config", "init"])?;
    assert!(result.success());
    assert!(result.stdout().contains("already exists"));
    assert_eq!(
        std::fs::read_to_string(world.config_path())?,
        "timeout_secs = 12\n"
    );

    let result = world.run(&["config", "init", "--force"])?;
    assert!(result.success());
    assert!(std::fs::read_to_string(world.config_path())?.contains("timeout_secs = 30"));
    Ok(())
}

#[test]
fn test_config_show_merges_file_and_env() -> anyhow::Result<()> {
    let world = TestWorld::new();
    std::fs::create_dir_all(world.config_path().parent().unwrap())?;
    std::fs::write(
        world.config_path(),
        "search_base_url = \"https://shop.example/sizes\"\ntimeout_secs = 12\n",
    )?;

    let result = world.run(&["--format", "json", "config", "show"])?;
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json()?;
    assert_eq!(json["content"]["file_exists"], true);
    assert_eq!(json["content"]["search_base_url"], "https://shop.example/sizes");
    // TIRESCAN_TIMEOUT_SECS from the test world wins over the file
    assert_eq!(json["content"]["timeout_secs"], 5);
    assert_eq!(json["content"]["api_key_set"], true);
    assert!(!result.stdout().contains("test-key"));
    Ok(())
}

#[test]
fn test_config_show_flags_missing_api_key() -> anyhow::Result<()> {
    let world = TestWorld::new().without_api_key();

    let result = world.run(&["config", "show"])?;
    assert!(result.success());
    assert!(result.stdout().contains("TIRESCAN_API_KEY is not set"));
    assert!(result.stdout().contains("(not found, using defaults)"));
    Ok(())
}

#[test]
fn test_malformed_config_file_is_an_error() -> anyhow::Result<()> {
    let world = TestWorld::new();
    std::fs::create_dir_all(world.config_path().parent().unwrap())?;
    std::fs::write(world.config_path(), "timeout_secs = \"soon\"\n")?;

    let result = world.run(&["config", "show"])?;
    assert_eq!(result.code(), Some(1));
    assert!(result.stderr().starts_with("Error:"));
    Ok(())
}
