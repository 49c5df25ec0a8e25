//! Report formatting and printing utilities.
//!
//! Issues are displayed cargo-style. Commands whose stdout is data (`expand`,
//! `keys`) report their issues on stderr instead.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::{
    args::KeysFormat,
    commands::{
        CheckSummary, CommandResult, CommandSummary, ExpandSummary, InitSummary, KeyEntry,
        KeysSummary,
    },
};
use crate::{
    config::CONFIG_FILE_NAME,
    core::AccessorKind,
    issues::{Issue, Severity},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) -> Result<()> {
    match &result.summary {
        CommandSummary::Check(summary) => print_check(result, summary),
        CommandSummary::Expand(summary) => print_expand(result, summary),
        CommandSummary::Keys(summary) => print_keys(result, summary)?,
        CommandSummary::Init(summary) => print_init(summary),
    }
    Ok(())
}

/// Print issues in cargo-style format to a writer, followed by a summary line.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let max_line_width = calculate_max_line_width(issues);
    for issue in issues {
        print_issue(issue, writer, max_line_width);
    }

    print_summary(issues, writer);
}

/// Print a success message when no issues are found.
pub fn print_success_to<W: Write>(source_files: usize, summary: &CheckSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {}, expanded {} {} ({} {}) - no issues found",
            source_files,
            plural(source_files, "file", "files"),
            summary.site_count,
            plural(summary.site_count, "site", "sites"),
            summary.key_count,
            plural(summary.key_count, "key", "keys"),
        )
        .green()
    );
}

/// Write the key listing in the requested format.
pub fn write_keys<W: Write>(entries: &[KeyEntry], format: KeysFormat, writer: &mut W) -> Result<()> {
    match format {
        KeysFormat::Json => {
            let json = serde_json::to_string_pretty(entries)?;
            writeln!(writer, "{}", json)?;
        }
        KeysFormat::Text => {
            let signatures: Vec<String> = entries.iter().map(accessor_signature).collect();
            let key_width = entries
                .iter()
                .map(|e| UnicodeWidthStr::width(e.key.as_str()))
                .max()
                .unwrap_or(0);
            let signature_width = signatures
                .iter()
                .map(|s| UnicodeWidthStr::width(s.as_str()))
                .max()
                .unwrap_or(0);

            for (entry, signature) in entries.iter().zip(&signatures) {
                let key_padding = key_width - UnicodeWidthStr::width(entry.key.as_str());
                let signature_padding = signature_width - UnicodeWidthStr::width(signature.as_str());
                writeln!(
                    writer,
                    "{}{:kp$}  {}{:sp$}  {}",
                    entry.key.bold(),
                    "",
                    signature.cyan(),
                    "",
                    format!("{}:{}", entry.file, entry.line).dimmed(),
                    kp = key_padding,
                    sp = signature_padding,
                )?;
            }
        }
    }
    Ok(())
}

// ============================================================
// Internal Functions
// ============================================================

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

/// `welcome` for statics, `message(_, _)` for functions.
fn accessor_signature(entry: &KeyEntry) -> String {
    match entry.kind {
        AccessorKind::Static => entry.accessor.clone(),
        AccessorKind::Function => {
            format!("{}({})", entry.accessor, vec!["_"; entry.arity].join(", "))
        }
    }
}

fn print_check(result: &CommandResult, summary: &CheckSummary) {
    let mut stdout = io::stdout().lock();
    if result.issues.is_empty() {
        print_success_to(result.source_files_checked, summary, &mut stdout);
    } else {
        report_to(&result.issues, &mut stdout);
    }
}

fn print_expand(result: &CommandResult, summary: &ExpandSummary) {
    report_to(&result.issues, &mut io::stderr().lock());

    let Some(rendered) = &summary.rendered else {
        return;
    };
    match &summary.output {
        Some(output) => println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Expanded {} {} from {} into {}",
                summary.site_count,
                plural(summary.site_count, "site", "sites"),
                summary.file_path,
                output.display()
            )
            .green()
        ),
        None => print!("{}", rendered),
    }
}

fn print_keys(result: &CommandResult, summary: &KeysSummary) -> Result<()> {
    report_to(&result.issues, &mut io::stderr().lock());
    write_keys(&summary.entries, summary.format, &mut io::stdout().lock())
}

fn print_init(summary: &InitSummary) {
    if let Some(error) = &summary.error {
        eprintln!("Error: {}", error);
    } else if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn print_issue<W: Write>(issue: &Issue, writer: &mut W, max_line_width: usize) {
    let loc = issue.location();
    let severity = issue.severity();
    let severity_str = match severity {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );

    // Clickable location: --> path:line:col
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        loc.file_path,
        loc.line,
        loc.col
    );

    if let Some(source_line) = &loc.source_line {
        let caret_char = match severity {
            Severity::Error => "^".red(),
            Severity::Warning => "^".yellow(),
        };

        let _ = writeln!(
            writer,
            "{:>width$} {}",
            "",
            "|".blue(),
            width = max_line_width
        );
        let _ = writeln!(
            writer,
            "{:>width$} {} {}",
            loc.line.to_string().blue(),
            "|".blue(),
            source_line,
            width = max_line_width
        );

        // col is 1-based
        let prefix: String = source_line.chars().take(loc.col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        let _ = writeln!(
            writer,
            "{:>width$} {} {:>padding$}{}",
            "",
            "|".blue(),
            "",
            caret_char,
            width = max_line_width,
            padding = caret_padding
        );
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hint:".bold().cyan(),
            hint,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    let _ = writeln!(
        writer,
        "{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        issues.len(),
        plural(issues.len(), "problem", "problems"),
        total_errors,
        plural(total_errors, "error", "errors").red(),
        total_warnings,
        plural(total_warnings, "warning", "warnings").yellow()
    );
}

fn calculate_max_line_width(issues: &[Issue]) -> usize {
    issues
        .iter()
        .map(|i| i.location().line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}
