use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::CliTest;

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(
        parsed.get("messagesRoot").and_then(Value::as_str),
        Some("./lang"),
        "Config should have default 'messagesRoot'"
    );
    assert_eq!(
        parsed.get("defaultLanguage").and_then(Value::as_str),
        Some("en"),
        "Config should have default 'defaultLanguage'"
    );

    // 2-space indentation
    assert!(
        content.contains("  "),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .langkeyrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".langkeyrc.json").exists());
    let content = test.read_file(".langkeyrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".langkeyrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    error: .langkeyrc.json already exists
    ");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("lang/EN.json", r#"{"greeting": "Hello"}"#)?;

    let output = test.get_command().arg("greeting").output()?;
    assert!(
        output.status.success(),
        "Get command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Hello\n");

    Ok(())
}
