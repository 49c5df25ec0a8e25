use anyhow::Result;

use crate::{CliTest, run};

const LOGIN: &str = r#"use localizable::localizable;

#[localizable(bundle = crate::BUNDLE)]
pub mod Login {
    enum Strings {
        welcome,
        title(String),
    }
}
"#;

#[test]
fn test_expand_to_stdout() -> Result<()> {
    let test = CliTest::with_file("src/login.rs", LOGIN)?;

    let (code, stdout, stderr) = run(test.expand_command("src/login.rs"))?;

    assert_eq!(code, Some(0));
    assert!(stderr.is_empty());
    assert!(!stdout.contains("#[localizable"));
    assert!(stdout.contains("pub static welcome"));
    assert!(stdout.contains("pub fn title(value0: String)"));
    assert!(stdout.contains("\"Login.welcome\""));
    assert!(stdout.contains("\"Login.title {}\""));
    assert!(stdout.contains("BUNDLE"));

    Ok(())
}

#[test]
fn test_expand_to_file() -> Result<()> {
    let test = CliTest::with_file("src/login.rs", LOGIN)?;

    let mut cmd = test.expand_command("src/login.rs");
    cmd.arg("--output").arg("expanded.rs");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Expanded 1 site from src/login.rs into expanded.rs"));

    let expanded = test.read_file("expanded.rs")?;
    assert!(expanded.contains("pub static welcome"));
    assert!(test.root().join("expanded.rs").exists());

    Ok(())
}

#[test]
fn test_expand_reports_diagnostics_on_stderr() -> Result<()> {
    let test = CliTest::with_file("src/lib.rs", "#[localizable]\nmod Account {}\n")?;

    let (code, stdout, stderr) = run(test.expand_command("src/lib.rs"))?;

    assert_eq!(code, Some(1));
    assert!(stderr.contains("LocalizableMacro.enumRequired"));
    // The failing item is printed unchanged.
    assert!(stdout.contains("#[localizable]"));
    assert!(stdout.contains("mod Account"));

    Ok(())
}

#[test]
fn test_expand_custom_attribute() -> Result<()> {
    let test = CliTest::with_file("lib.rs", "#[l10n]\nmod Home {\n    enum S {\n        title,\n    }\n}\n")?;

    let mut cmd = test.expand_command("lib.rs");
    cmd.arg("--attribute").arg("l10n");
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, Some(0));
    assert!(stdout.contains("\"Home.title\""));

    Ok(())
}

#[test]
fn test_expand_missing_file() -> Result<()> {
    let test = CliTest::new()?;

    let (code, _, stderr) = run(test.expand_command("src/missing.rs"))?;

    assert_eq!(code, Some(2));
    assert!(stderr.contains("Failed to read file: src/missing.rs"));

    Ok(())
}
