use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, run};

const LOGIN: &str = r#"use localizable::localizable;

#[localizable]
mod Login {
    enum Strings {
        welcome,
        title(String),
        message { msg1: String, msg2: i32 },
    }
}
"#;

#[test]
fn test_clean_project() -> Result<()> {
    let test = CliTest::with_file("src/login.rs", LOGIN)?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, Some(0));
    assert_snapshot!(
        stdout.trim_end(),
        @"✓ Checked 1 source file, expanded 1 site (3 keys) - no issues found"
    );

    Ok(())
}

#[test]
fn test_missing_enum() -> Result<()> {
    let test = CliTest::with_file(
        "src/account.rs",
        r#"use localizable::localizable;

#[localizable]
mod Account {
    struct Strings;
}
"#,
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, Some(1));
    assert!(stdout.contains(
        "error: The #[localizable] macro requires a nested enum with localization keys."
    ));
    assert!(stdout.contains("LocalizableMacro.enumRequired"));
    assert!(stdout.contains("src/account.rs:3:1"));
    assert!(stdout.contains("3 | #[localizable]"));
    assert!(stdout.contains("hint: declare the keys inside an inline module"));
    assert!(stdout.contains("1 problem (1 error, 0 warnings)"));

    Ok(())
}

#[test]
fn test_impl_site() -> Result<()> {
    let test = CliTest::with_file(
        "src/lib.rs",
        "pub struct Account;\n\n#[localizable]\nimpl Account {}\n",
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, Some(1));
    assert!(stdout.contains("src/lib.rs:3:1"));

    Ok(())
}

#[test]
fn test_empty_key_enum_is_warning() -> Result<()> {
    let test = CliTest::with_file(
        "src/lib.rs",
        "#[localizable]\nmod Empty {\n    enum Strings {}\n}\n",
    )?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("warning: Key enum of `Empty` has no variants"));
    assert!(stdout.contains("1 problem (0 errors, 1 warning)"));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::with_file("src/broken.rs", "fn broken( {\n")?;

    let (code, stdout, stderr) = run(test.check_command())?;

    assert_eq!(code, Some(1));
    assert!(stdout.contains("parse-error"));
    assert!(stdout.contains("src/broken.rs:"));
    assert!(stdout.contains("1 problem (1 error, 0 warnings)"));
    assert!(!stderr.contains("could not be parsed"));

    Ok(())
}

#[test]
fn test_path_argument() -> Result<()> {
    let test = CliTest::with_file("app/src/login.rs", LOGIN)?;

    let mut cmd = test.check_command();
    cmd.arg("--path").arg("app");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Checked 1 source file"));

    Ok(())
}

#[test]
fn test_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".localizablerc.json",
        r#"{
            "ignores": ["**/fixtures/**"]
        }"#,
    )?;
    test.write_file("src/fixtures/account.rs", "#[localizable]\nmod Account {}\n")?;
    test.write_file("src/login.rs", LOGIN)?;

    let (code, stdout, _) = run(test.check_command())?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Checked 1 source file"));

    Ok(())
}

#[test]
fn test_config_attributes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".localizablerc.json", r#"{ "attributes": ["l10n"] }"#)?;
    test.write_file("src/lib.rs", "#[l10n]\nmod Account {}\n")?;

    let (code, _, _) = run(test.check_command())?;
    assert_eq!(code, Some(1));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file(".localizablerc.json", r#"{ "ignores": ["[invalid"] }"#)?;

    let (code, _, stderr) = run(test.check_command())?;

    assert_eq!(code, Some(2));
    assert!(stderr.contains("Invalid glob pattern in 'ignores'"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("--help");
        cmd
    })?;

    assert_eq!(code, Some(0));
    for command in ["check", "expand", "keys", "init"] {
        assert!(stdout.contains(command));
    }

    Ok(())
}
