use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::ALWAYS_IGNORED_PATTERNS;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    pub files: HashSet<String>,
    pub skipped_count: usize,
}

/// Collect the Rust source files under `base_dir`.
///
/// With no `includes` the whole base directory is walked. Ignore patterns with
/// wildcards are globs matched against the full path; the rest are path
/// prefixes relative to `base_dir`.
pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files: HashSet<String> = HashSet::new();
    let mut skipped_count = 0;

    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            literal_ignore_paths.push(Path::new(base_dir).join(p));
        }
    }

    for p in ALWAYS_IGNORED_PATTERNS {
        if let Ok(pattern) = Pattern::new(p) {
            glob_patterns.push(pattern);
        }
    }

    let dirs_to_scan: Vec<PathBuf> = if includes.is_empty() {
        vec![Path::new(base_dir).to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                let full_pattern = Path::new(base_dir).join(inc);
                let pattern_str = full_pattern.to_string_lossy();
                match glob(&pattern_str) {
                    Ok(entries) => {
                        for entry in entries.flatten() {
                            if entry.is_dir() {
                                paths.push(entry);
                            }
                        }
                    }
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid glob pattern '{}': {}",
                                "warning:".bold().yellow(),
                                inc,
                                e
                            );
                        }
                    }
                }
            } else {
                let path = Path::new(base_dir).join(inc);
                if path.exists() {
                    paths.push(path);
                } else if verbose {
                    eprintln!(
                        "{} Include path does not exist: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && is_scannable_file(path) {
                files.insert(path_str.into());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn is_scannable_file(path: &Path) -> bool {
    matches!(path.extension().and_then(|e| e.to_str()), Some("rs"))
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_scan_rust_files() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        File::create(dir_path.join("lib.rs")).unwrap();
        File::create(dir_path.join("strings.rs")).unwrap();
        File::create(dir_path.join("Cargo.toml")).unwrap();

        let result = scan_files(dir_path.to_str().unwrap(), &[], &[], false);

        assert_eq!(result.files.len(), 2);
        assert!(result.files.iter().any(|f| f.ends_with("lib.rs")));
        assert!(result.files.iter().any(|f| f.ends_with("strings.rs")));
    }

    #[test]
    fn test_scan_skips_target_directory() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let target = dir_path.join("target").join("debug").join("build");
        fs::create_dir_all(&target).unwrap();
        File::create(target.join("out.rs")).unwrap();
        File::create(dir_path.join("main.rs")).unwrap();

        let result = scan_files(dir_path.to_str().unwrap(), &[], &[], false);

        assert_eq!(result.files.len(), 1);
        assert!(!result.files.iter().any(|f| f.contains("target")));
    }

    #[test]
    fn test_scan_with_glob_ignore() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let generated = dir_path.join("generated");
        fs::create_dir(&generated).unwrap();
        File::create(generated.join("strings.rs")).unwrap();
        File::create(dir_path.join("lib.rs")).unwrap();

        let result = scan_files(
            dir_path.to_str().unwrap(),
            &[],
            &["**/generated/**".to_owned()],
            false,
        );

        assert_eq!(result.files.len(), 1);
        assert!(result.files.iter().any(|f| f.ends_with("lib.rs")));
    }

    #[test]
    fn test_scan_with_literal_ignore() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let fixtures = dir_path.join("fixtures");
        fs::create_dir(&fixtures).unwrap();
        File::create(fixtures.join("broken.rs")).unwrap();
        File::create(dir_path.join("lib.rs")).unwrap();

        let result = scan_files(
            dir_path.to_str().unwrap(),
            &[],
            &["fixtures".to_owned()],
            false,
        );

        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn test_scan_with_includes() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        let src = dir_path.join("src");
        fs::create_dir(&src).unwrap();
        File::create(src.join("lib.rs")).unwrap();

        let benches = dir_path.join("benches");
        fs::create_dir(&benches).unwrap();
        File::create(benches.join("bench.rs")).unwrap();

        let result = scan_files(dir_path.to_str().unwrap(), &["src".to_owned()], &[], false);

        assert_eq!(result.files.len(), 1);
        assert!(result.files.iter().any(|f| f.ends_with("src/lib.rs")));
    }

    #[test]
    fn test_scan_with_glob_includes() {
        let dir = tempdir().unwrap();
        let dir_path = dir.path();

        for krate in ["app", "ui"] {
            let src = dir_path.join("crates").join(krate).join("src");
            fs::create_dir_all(&src).unwrap();
            File::create(src.join("lib.rs")).unwrap();
        }
        File::create(dir_path.join("build.rs")).unwrap();

        let result = scan_files(
            dir_path.to_str().unwrap(),
            &["crates/*/src".to_owned()],
            &[],
            false,
        );

        assert_eq!(result.files.len(), 2);
    }

    #[test]
    fn test_is_scannable_file() {
        assert!(is_scannable_file(Path::new("lib.rs")));
        assert!(!is_scannable_file(Path::new("Cargo.toml")));
        assert!(!is_scannable_file(Path::new("en.json")));
        assert!(!is_scannable_file(Path::new("README.md")));
    }
}
