use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::super::args::ExpandCommand;
use super::{CommandResult, CommandSummary, ExpandSummary, helper::finish};
use crate::{config::load_config, core::expand_source};

pub fn expand(cmd: ExpandCommand) -> Result<CommandResult> {
    let file_path = cmd.file.to_string_lossy().to_string();
    let content = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read file: {}", file_path))?;

    let attributes = if cmd.attributes.is_empty() {
        let start_dir = match cmd.file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        load_config(start_dir)?.config.attributes
    } else {
        cmd.attributes
    };

    let (rendered, site_count, issues) = match expand_source(&file_path, &content, &attributes) {
        Ok(expanded) => {
            let rendered = expanded.render();
            let analysis = expanded.analysis;
            (Some(rendered), analysis.sites.len(), analysis.issues)
        }
        Err(issue) => (None, 0, vec![issue]),
    };

    if let (Some(output), Some(rendered)) = (&cmd.output, &rendered) {
        fs::write(output, rendered)
            .with_context(|| format!("Failed to write file: {}", output.display()))?;
    }

    Ok(finish(
        CommandSummary::Expand(ExpandSummary {
            file_path,
            rendered,
            output: cmd.output,
            site_count,
        }),
        issues,
        1,
    ))
}
