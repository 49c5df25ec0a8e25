use std::path::PathBuf;

use serde::Serialize;

use super::super::{args::KeysFormat, exit_status::ExitStatus};
use crate::{core::AccessorKind, issues::Issue};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    Expand(ExpandSummary),
    Keys(KeysSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    pub site_count: usize,
    pub key_count: usize,
}

#[derive(Debug)]
pub struct ExpandSummary {
    pub file_path: String,
    /// Expanded source, absent when the file did not parse.
    pub rendered: Option<String>,
    /// Where the expanded source was written; stdout when absent.
    pub output: Option<PathBuf>,
    pub site_count: usize,
}

/// One generated key, as listed by `keys`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyEntry {
    pub key: String,
    pub accessor: String,
    pub kind: AccessorKind,
    pub arity: usize,
    pub file: String,
    pub line: usize,
}

#[derive(Debug)]
pub struct KeysSummary {
    pub entries: Vec<KeyEntry>,
    pub format: KeysFormat,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    /// Set when the config file could not be created.
    pub error: Option<String>,
}

/// Result of running a command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// Issues found while expanding, sorted by location.
    pub issues: Vec<Issue>,
    pub source_files_checked: usize,
}

impl CommandResult {
    pub fn exit_status(&self) -> ExitStatus {
        if self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
