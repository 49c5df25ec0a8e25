//! Project scanning and whole-file expansion used by the CLI.

mod context;
pub mod file_scanner;
pub mod sites;

pub use context::ScanContext;
pub use sites::{
    AccessorKind, ExpandedSite, ExpandedSource, FileAnalysis, GeneratedKey, analyze_file,
    expand_source,
};
