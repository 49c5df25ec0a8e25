use std::path::{Component, Path, PathBuf};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        file_scanner::scan_files,
        sites::{FileAnalysis, analyze_file},
    },
};

/// Configuration and file set for a project-wide command.
///
/// Configuration is looked up from `--path` (default: current directory),
/// and files are collected from the config's `sourceRoot` relative to it.
pub struct ScanContext {
    pub config: Config,

    /// Project root directory (for resolving relative paths).
    pub root_dir: PathBuf,

    /// Rust source files to analyze, sorted.
    pub files: Vec<String>,

    pub verbose: bool,
}

impl ScanContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold(),
                CONFIG_FILE_NAME
            );
        }
        let config = config_result.config;

        let source_dir = resolve_source_dir(&root_dir, &config.source_root);
        let base_dir = source_dir
            .to_str()
            .with_context(|| anyhow!("Invalid path: {:?}", source_dir))?;

        let scan_result = scan_files(base_dir, &config.includes, &config.ignores, verbose);
        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        let mut files: Vec<String> = scan_result.files.into_iter().collect();
        files.sort();

        Ok(Self {
            config,
            root_dir,
            files,
            verbose,
        })
    }

    /// Expand every file in parallel. Results follow the order of `files`.
    pub fn analyze(&self) -> Vec<FileAnalysis> {
        let attributes = &self.config.attributes;
        let analyses: Vec<FileAnalysis> = self
            .files
            .par_iter()
            .map(|file_path| analyze_file(file_path, attributes))
            .collect();

        if self.verbose {
            for analysis in &analyses {
                if !analysis.sites.is_empty() {
                    eprintln!(
                        "{} {}: {} site(s)",
                        "note:".bold(),
                        analysis.file_path,
                        analysis.sites.len()
                    );
                }
            }
        }

        analyses
    }
}

/// Resolve `source_root` against `root_dir` without producing `./` segments.
fn resolve_source_dir(root_dir: &Path, source_root: &str) -> PathBuf {
    let p = Path::new(source_root);
    if p.is_absolute() {
        return p.to_path_buf();
    }

    let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
    if rel.as_os_str().is_empty() {
        return root_dir.to_path_buf();
    }

    let is_cur_dir = root_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        rel.to_path_buf()
    } else {
        root_dir.join(rel)
    }
}
