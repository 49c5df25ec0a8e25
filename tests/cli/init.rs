use anyhow::{Context, Result};
use insta::assert_snapshot;
use serde_json::Value;

use crate::{CliTest, run};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let (code, stdout, _) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, Some(0));
    assert_snapshot!(stdout.trim_end(), @"✓ Created .localizablerc.json");

    let content = test.read_file(".localizablerc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["includes"], serde_json::json!(["src"]));
    assert_eq!(parsed["attributes"], serde_json::json!(["localizable"]));
    assert_eq!(parsed["sourceRoot"], "./");
    assert!(content.contains("  "), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".localizablerc.json", "{}")?;

    let (code, stdout, stderr) = run({
        let mut cmd = test.command();
        cmd.arg("init");
        cmd
    })?;

    assert_eq!(code, Some(1));
    assert!(stdout.is_empty());
    assert_snapshot!(stderr.trim_end(), @"Error: .localizablerc.json already exists");
    assert_eq!(test.read_file(".localizablerc.json")?, "{}");

    Ok(())
}
