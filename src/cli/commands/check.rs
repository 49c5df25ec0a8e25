use anyhow::Result;

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary, helper::finish};
use crate::{core::ScanContext, issues::Issue};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let analyses = ctx.analyze();

    let site_count: usize = analyses.iter().map(|a| a.sites.len()).sum();
    let key_count: usize = analyses
        .iter()
        .flat_map(|a| &a.sites)
        .map(|site| site.keys.len())
        .sum();
    let issues: Vec<Issue> = analyses.into_iter().flat_map(|a| a.issues).collect();

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            site_count,
            key_count,
        }),
        issues,
        ctx.files.len(),
    ))
}
