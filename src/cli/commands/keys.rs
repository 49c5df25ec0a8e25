use anyhow::Result;

use super::super::args::KeysCommand;
use super::{CommandResult, CommandSummary, KeyEntry, KeysSummary, helper::finish};
use crate::{
    core::{FileAnalysis, ScanContext},
    issues::Issue,
};

pub fn keys(cmd: KeysCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let analyses = ctx.analyze();

    let entries = collect_entries(&analyses);
    let issues: Vec<Issue> = analyses.into_iter().flat_map(|a| a.issues).collect();

    Ok(finish(
        CommandSummary::Keys(KeysSummary {
            entries,
            format: cmd.format,
        }),
        issues,
        ctx.files.len(),
    ))
}

/// Flatten every site's keys, in file then declaration order.
fn collect_entries(analyses: &[FileAnalysis]) -> Vec<KeyEntry> {
    analyses
        .iter()
        .flat_map(|analysis| &analysis.sites)
        .flat_map(|site| {
            site.keys.iter().map(|key| KeyEntry {
                key: key.key.clone(),
                accessor: key.accessor.clone(),
                kind: key.kind,
                arity: key.arity,
                file: site.location.file_path.clone(),
                line: site.location.line,
            })
        })
        .collect()
}
