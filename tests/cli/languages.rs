use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_languages_sorted() -> Result<()> {
    let test = CliTest::with_tables()?;
    test.write_file("lang/README.md", "not a table")?;

    assert_cmd_snapshot!(test.languages_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    EN
    HU

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_languages_missing_root() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.languages_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not be read"));
    assert!(stderr.contains("messagesRoot"));

    Ok(())
}

#[test]
fn test_languages_verbose_logs_to_stderr() -> Result<()> {
    let test = CliTest::with_tables()?;

    let output = test.languages_command().arg("--verbose").output()?;
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "EN\nHU\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("listed languages"));

    Ok(())
}
