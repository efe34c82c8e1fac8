use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_keys_lists_types_in_source_order() -> Result<()> {
    let test = CliTest::with_tables()?;

    assert_cmd_snapshot!(test.keys_command().args(["--lang", "en"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    greeting  string
    farewell  string
    count     integer
    colors    list

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_keys_missing_language() -> Result<()> {
    let test = CliTest::with_tables()?;

    let output = test.keys_command().args(["--lang", "xx"]).output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("[XX] not found"));

    Ok(())
}

#[test]
fn test_keys_verbose_logs_to_stderr() -> Result<()> {
    let test = CliTest::with_tables()?;

    let output = test.keys_command().args(["--lang", "hu", "-v"]).output()?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("greeting"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("listing keys"));

    Ok(())
}
