use std::fs;

use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const EN: &str = r#"{"hello": "Hello", "greet": "Hello {name}"}"#;

#[test]
fn test_check_missing_output() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN)])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ ./locales.ts does not exist (run dictgen generate)
    ");

    Ok(())
}

#[test]
fn test_check_up_to_date() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN)])?;
    test.generate_command().output()?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ ./locales.ts is up to date (2 tokens, 1 locale)
    ");

    Ok(())
}

#[test]
fn test_check_stale_after_locale_change() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN)])?;
    test.generate_command().output()?;
    test.write_file("messages/fr.json", r#"{"hello": "Bonjour"}"#)?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    note: 1 translation fell back to the source locale (use -v for details)
    ✘ ./locales.ts is out of date (run dictgen generate)
    ");

    Ok(())
}

#[test]
fn test_check_respects_mode_flag() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN)])?;
    test.generate_command().args(["--mode", "single"]).output()?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    ✘ ./locales.ts is out of date (run dictgen generate)
    ");

    assert_cmd_snapshot!(test.check_command().args(["--mode", "single"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ ./locales.ts is up to date (2 tokens, 1 locale)
    ");

    Ok(())
}

#[test]
fn test_check_fatal_error() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"items": "{count, plural, }"}"#)])?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: invalid plural string for token 'items': no plural categories found
      --> ./messages/en.json:1:1
      = note: no output was written
    ");
    assert!(!test.root().join("locales.ts").exists());

    Ok(())
}

#[test]
fn test_check_unreadable_output_is_an_error() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN)])?;
    fs::create_dir(test.root().join("locales.ts"))?;

    insta::with_settings!({filters => vec![
        (r"(Failed to read \./locales\.ts): .*", "$1: [io error]"),
    ]}, {
        assert_cmd_snapshot!(test.check_command(), @r"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to read ./locales.ts: [io error]
        ");
    });

    Ok(())
}
