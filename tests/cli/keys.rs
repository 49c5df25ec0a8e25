use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run};

fn project() -> Result<CliTest> {
    let test = CliTest::new()?;
    test.write_file(
        "src/login.rs",
        r#"#[localizable]
mod Login {
    enum Strings {
        welcome,
        message { msg1: String, msg2: i32 },
    }
}
"#,
    )?;
    test.write_file(
        "src/cart.rs",
        "#[localizable]\npub mod Cart {\n    enum Keys {\n        total(f64),\n    }\n}\n",
    )?;
    Ok(test)
}

#[test]
fn test_keys_text() -> Result<()> {
    let test = project()?;

    let (code, stdout, _) = run(test.keys_command())?;

    assert_eq!(code, Some(0));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    // Files are sorted, keys keep declaration order.
    assert!(lines[0].starts_with("Cart.total"));
    assert!(lines[0].contains("total(_)"));
    assert!(lines[1].starts_with("Login.welcome"));
    assert!(lines[2].starts_with("Login.message"));
    assert!(lines[2].contains("message(_, _)"));
    assert!(lines[2].ends_with("src/login.rs:1"));

    Ok(())
}

#[test]
fn test_keys_json() -> Result<()> {
    let test = project()?;

    let mut cmd = test.keys_command();
    cmd.args(["--format", "json"]);
    let (code, stdout, _) = run(cmd)?;

    assert_eq!(code, Some(0));
    let parsed: Value = serde_json::from_str(&stdout)?;
    let entries = parsed.as_array().expect("an array of keys");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[1]["key"], "Login.welcome");
    assert_eq!(entries[1]["kind"], "static");
    assert_eq!(entries[1]["arity"], 0);
    assert_eq!(entries[2]["accessor"], "message");
    assert_eq!(entries[2]["arity"], 2);

    Ok(())
}

#[test]
fn test_keys_reports_issues_on_stderr() -> Result<()> {
    let test = project()?;
    test.write_file("src/account.rs", "#[localizable]\nmod Account {}\n")?;

    let mut cmd = test.keys_command();
    cmd.args(["--format", "json"]);
    let (code, stdout, stderr) = run(cmd)?;

    assert_eq!(code, Some(1));
    assert!(stderr.contains("LocalizableMacro.enumRequired"));
    let parsed: Value = serde_json::from_str(&stdout)?;
    assert_eq!(parsed.as_array().map(Vec::len), Some(3));

    Ok(())
}
