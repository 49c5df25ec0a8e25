use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, Severity};

/// Sort issues by location and count them into a [`CommandResult`].
pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
) -> CommandResult {
    issues.sort_by(compare_issues);

    let mut error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    if let CommandSummary::Init(ref summary) = summary
        && summary.error.is_some()
    {
        error_count += 1;
    }

    CommandResult {
        summary,
        error_count,
        warning_count,
        issues,
        source_files_checked,
    }
}

pub fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    let a_loc = a.location();
    let b_loc = b.location();

    a_loc
        .file_path
        .cmp(&b_loc.file_path)
        .then_with(|| a_loc.line.cmp(&b_loc.line))
        .then_with(|| a_loc.col.cmp(&b_loc.col))
        .then_with(|| a.rule().cmp(&b.rule()))
}
