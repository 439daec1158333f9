use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ Created .dictgenrc.json
    ");

    insta::assert_snapshot!(test.read_file(".dictgenrc.json")?, @r#"
    {
      "messagesRoot": "./messages",
      "sourceLocale": "en",
      "output": "./locales.ts",
      "mode": "merged",
      "schema": "flat",
      "localeType": "CrowdinLocale",
      "localeTypeModule": "./constants"
    }
    "#);

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".dictgenrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: .dictgenrc.json already exists
    ");
    assert_eq!(test.read_file(".dictgenrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("messages/en.json", r#"{"hello": "Hello"}"#)?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ Generated ./locales.ts (1 token, 1 locale)
    ");
    assert!(test.root().join("locales.ts").exists());

    Ok(())
}
