use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const EN: &str = r#"{
  "hello": "Hello",
  "greet": "Hello {name}",
  "items": "{count, plural, one [1 item] other [{count} items]}"
}"#;

const FR: &str = r#"{
  "hello": "Bonjour",
  "items": "{count, plural, one [1 élément] other [{count} éléments]}"
}"#;

#[test]
fn test_generate_writes_merged_module() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN), ("fr", FR)])?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    note: 1 translation fell back to the source locale (use -v for details)
    ✓ Generated ./locales.ts (3 tokens, 2 locales)
    ");

    let generated = test.read_file("locales.ts")?;
    assert!(generated.starts_with("// This file was generated by dictgen."));
    assert!(generated.contains("import type { CrowdinLocale } from './constants';"));
    assert!(generated.contains("export type TokenSimpleNoArgs =\n  | 'hello';"));
    assert!(generated.contains("export type TokensSimpleAndArgs = {\n  greet: WithName;\n};"));
    assert!(generated.contains("export type TokensPluralAndArgs = {\n  items: WithCount;\n};"));
    assert!(generated.contains(
        "  greet: {\n    en: \"Hello {name}\",\n    fr: \"Hello {name}\",\n  },"
    ));
    assert!(generated.contains("    fr: {\n      one: \"1 élément\",\n      other: \"{count} éléments\",\n    },"));

    Ok(())
}

#[test]
fn test_generate_is_idempotent() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN), ("fr", FR)])?;

    test.generate_command().output()?;
    let first = test.read_file("locales.ts")?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    note: 1 translation fell back to the source locale (use -v for details)
    ✓ ./locales.ts is up to date (3 tokens, 2 locales)
    ");
    assert_eq!(test.read_file("locales.ts")?, first);

    Ok(())
}

#[test]
fn test_generate_to_stdout() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"hello": "Hello"}"#)])?;

    assert_cmd_snapshot!(test.generate_command().arg("--stdout"), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    // This file was generated by dictgen. Do not modify this file manually.
    // To make changes, modify the corresponding JSON file and re-run dictgen.

    import type { CrowdinLocale } from './constants';

    type WithName = {name: string};
    type WithGroupName = {group_name: string};
    type WithCommunityName = {community_name: string};
    type WithOtherName = {other_name: string};
    type WithAuthor = {author: string};
    type WithEmoji = {emoji: string};
    type WithEmojiName = {emoji_name: string};
    type WithAdminName = {admin_name: string};
    type WithTime = {time: string};
    type WithTimeLarge = {time_large: string};
    type WithTimeSmall = {time_small: string};
    type WithDisappearingMessagesType = {disappearing_messages_type: string};
    type WithConversationName = {conversation_name: string};
    type WithFileType = {file_type: string};
    type WithDate = {date: string};
    type WithDateTime = {date_time: string};
    type WithMessageSnippet = {message_snippet: string};
    type WithQuery = {query: string};
    type WithVersion = {version: string};
    type WithInformation = {information: string};
    type WithDevice = {device: string};
    type WithPercentLoader = {percent_loader: string};
    type WithMessageCount = {message_count: string};
    type WithConversationCount = {conversation_count: string};
    type WithFoundCount = {found_count: number};
    type WithHash = {hash: string};
    type WithUrl = {url: string};
    type WithAccountId = {account_id: string};
    type WithCount = {count: number};
    type WithServiceNodeId = {service_node_id: string};
    type WithLimit = {limit: string};
    type WithRelativeTime = {relative_time: string};
    type WithIcon = {icon: string};
    type WithStoreVariant = {storevariant: string};
    type WithMin = {min: string};
    type WithMax = {max: string};

    export type TokenSimpleNoArgs =
      | 'hello';

    export type TokensSimpleAndArgs = {};

    export type TokensPluralAndArgs = {};

    export type TokenSimpleWithArgs = never;

    export type TokenPluralWithArgs = never;

    export const simpleDictionaryNoArgs: Record<
      TokenSimpleNoArgs,
      Record<CrowdinLocale, string>
    > = {
      hello: {
        en: "Hello",
      },
    } as const;

    export const simpleDictionaryWithArgs: Record<
      TokenSimpleWithArgs,
      Record<CrowdinLocale, string>
    > = {} as const;

    export const pluralsDictionaryWithArgs = {} as const;

    ----- stderr -----
    ✓ Compiled 1 token, 1 locale
    "#);
    assert!(!test.root().join("locales.ts").exists());

    Ok(())
}

#[test]
fn test_generate_single_mode() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN), ("fr", FR)])?;

    assert_cmd_snapshot!(test.generate_command().args(["--mode", "single", "--stdout"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    // This file was generated by dictgen. Do not modify this file manually.
    // To make changes, modify the corresponding JSON file and re-run dictgen.

    export const en = {
      hello: 'Hello',
      greet: 'Hello {name}',
      items: '{count, plural, one [1 item] other [{count} items]}',
    } as const;

    export type Dictionary = typeof en;

    ----- stderr -----
    note: 1 translation fell back to the source locale (use -v for details)
    ✓ Compiled 3 tokens, 2 locales
    ");

    Ok(())
}

#[test]
fn test_generate_nested_schema_from_config() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN)])?;
    test.write_file(
        ".dictgenrc.json",
        r#"{ "schema": "nested", "output": "./src/generated/locales.ts" }"#,
    )?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    ✓ Generated ./src/generated/locales.ts (3 tokens, 1 locale)
    ");

    let generated = test.read_file("src/generated/locales.ts")?;
    assert!(generated.contains("export const simpleDictionaryWithArgs = {\n"));
    assert!(generated.contains("    args: {name: \"string\"},\n"));
    assert!(generated.contains("    args: {count: \"number\"},\n"));

    Ok(())
}

#[test]
fn test_generate_quotes_unusual_placeholder_names() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"greet": "Hi {user-name}"}"#)])?;
    test.write_file(".dictgenrc.json", r#"{ "schema": "nested" }"#)?;

    test.generate_command().output()?;

    let generated = test.read_file("locales.ts")?;
    assert!(generated.contains("  greet: { 'user-name': string };\n"));
    assert!(generated.contains("    args: {'user-name': \"string\"},\n"));

    Ok(())
}

#[test]
fn test_malformed_source_plural_writes_nothing() -> Result<()> {
    let test = CliTest::with_locales(&[(
        "en",
        r#"{
  "hello": "Hello",
  "items": "{count, plural, }"
}"#,
    )])?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: invalid plural string for token 'items': no plural categories found
      --> ./messages/en.json:3:1
      = note: no output was written
    ");
    assert!(!test.root().join("locales.ts").exists());

    Ok(())
}

#[test]
fn test_malformed_source_plural_keeps_existing_output() -> Result<()> {
    let test = CliTest::with_locales(&[("en", r#"{"items": "{count, plural, one [x}"}"#)])?;
    test.write_file("locales.ts", "previous")?;

    let output = test.generate_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(test.read_file("locales.ts")?, "previous");

    Ok(())
}

#[test]
fn test_missing_source_locale() -> Result<()> {
    let test = CliTest::with_locales(&[("fr", FR), ("de", r#"{"hello": "Hallo"}"#)])?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    error: source locale 'en' not found (available: de, fr)
      = note: no output was written
    ");

    Ok(())
}

#[test]
fn test_source_locale_from_flag() -> Result<()> {
    let test = CliTest::with_locales(&[("fr", FR)])?;

    assert_cmd_snapshot!(
        test.generate_command()
            .args(["--source-locale", "fr", "--mode", "single", "--stdout"]),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    // This file was generated by dictgen. Do not modify this file manually.
    // To make changes, modify the corresponding JSON file and re-run dictgen.

    export const fr = {
      hello: 'Bonjour',
      items: '{count, plural, one [1 élément] other [{count} éléments]}',
    } as const;

    export type Dictionary = typeof fr;

    ----- stderr -----
    ✓ Compiled 2 tokens, 1 locale
    "
    );

    Ok(())
}

#[test]
fn test_source_locale_from_env() -> Result<()> {
    let test = CliTest::with_locales(&[("fr", FR)])?;

    assert_cmd_snapshot!(
        test.generate_command()
            .args(["--mode", "single", "--stdout"])
            .env("DICTGEN_SOURCE_LOCALE", "fr"),
        @r"
    success: true
    exit_code: 0
    ----- stdout -----
    // This file was generated by dictgen. Do not modify this file manually.
    // To make changes, modify the corresponding JSON file and re-run dictgen.

    export const fr = {
      hello: 'Bonjour',
      items: '{count, plural, one [1 élément] other [{count} éléments]}',
    } as const;

    export type Dictionary = typeof fr;

    ----- stderr -----
    ✓ Compiled 2 tokens, 1 locale
    "
    );

    Ok(())
}

#[test]
fn test_missing_messages_dir() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: false
    exit_code: 2
    ----- stdout -----

    ----- stderr -----
    Error: Messages directory './messages' does not exist.
    Hint: Check your .dictgenrc.json 'messagesRoot' setting.
    ");

    Ok(())
}

#[test]
fn test_invalid_locale_file_is_fatal() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN), ("fr", "{ not json")])?;

    insta::with_settings!({filters => vec![
        (r#"(Failed to parse locale file: "\./messages/fr\.json"): .*"#, "$1: [parse error]"),
    ]}, {
        assert_cmd_snapshot!(test.generate_command(), @r#"
        success: false
        exit_code: 2
        ----- stdout -----

        ----- stderr -----
        Error: Failed to parse locale file: "./messages/fr.json": [parse error]
        "#);
    });
    assert!(!test.root().join("locales.ts").exists());

    Ok(())
}

#[test]
fn test_warnings_do_not_fail() -> Result<()> {
    let test = CliTest::with_locales(&[
        ("en", EN),
        (
            "fr",
            r#"{
  "hello": "Bonjour",
  "stale": "Vieux",
  "items": "{count} éléments",
  "version": 2
}"#,
        ),
    ])?;

    assert_cmd_snapshot!(test.generate_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    warning: 'stale' in 'fr' does not exist in 'en'  unknown-token
      --> ./messages/fr.json:3:1
      = note: the token is ignored

    warning: invalid plural string for 'items' in 'fr': missing the '{count, plural, ' prefix  malformed-plural
      --> ./messages/fr.json:4:1
      = note: all plural forms of 'en' are used for 'fr'

    warning: 'version' in 'fr' is a number, expected a string  non-string-value
      --> ./messages/fr.json:5:1
      = note: the value is skipped

    warning: generated 3 warnings
    note: 1 translation fell back to the source locale (use -v for details)
    ✓ Generated ./locales.ts (3 tokens, 2 locales)
    ");

    let generated = test.read_file("locales.ts")?;
    assert!(generated.contains("    fr: {\n      one: \"1 item\",\n      other: \"{count} items\",\n    },"));
    assert!(!generated.contains("stale"));

    Ok(())
}

#[test]
fn test_verbose_lists_fallbacks() -> Result<()> {
    let test = CliTest::with_locales(&[("en", EN), ("fr", FR)])?;

    assert_cmd_snapshot!(test.generate_command().arg("-v"), @r"
    success: true
    exit_code: 0
    ----- stdout -----

    ----- stderr -----
    Note: No .dictgenrc.json found, using default configuration
    note: 'greet' is missing in 'fr', using 'en'  fallback
      --> ./messages/fr.json

    ✓ Generated ./locales.ts (3 tokens, 2 locales)
    ");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    let help = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(help.contains("Usage: dictgen"));
    assert!(help.contains("generate"));

    Ok(())
}
