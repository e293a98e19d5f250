//! Source file discovery.
//!
//! Walks the configured include directories under the source root, applies
//! ignore globs and the built-in test-file patterns, and filters to the
//! JavaScript/TypeScript extensions the checks understand.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning for source files.
pub struct ScanResult {
    /// Sorted for deterministic processing and reporting order.
    pub files: BTreeSet<String>,
    pub skipped_count: usize,
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let mut files: BTreeSet<String> = BTreeSet::new();
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

    if ignore_test_files {
        for p in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
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
                                "{} Invalid include pattern '{}': {}",
                                "warning:".bold().yellow(),
                                inc,
                                e
                            );
                        }
                    }
                }
            } else {
                let path = Path::new(base_dir).join(inc);
                if path.is_dir() {
                    paths.push(path);
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(&dir)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let has_source_ext = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext));
            if !has_source_ext {
                continue;
            }

            let path_str = path.to_string_lossy().to_string();

            if literal_ignore_paths.iter().any(|p| path.starts_with(p)) {
                skipped_count += 1;
                continue;
            }
            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                skipped_count += 1;
                continue;
            }

            files.insert(path_str);
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

/// Whether the hardcoded-text scanner applies to this file at all.
///
/// Only component-like files are scanned: the path contains `Page` or
/// `Component` (case-sensitive, matching React naming conventions), or
/// `card`/`modal` in any casing. Matching the whole path keeps files
/// grouped under a `modal/` or `cards/` directory in scope even when the
/// file name itself is generic.
pub fn is_component_file(path: &str) -> bool {
    if path.contains("Page") || path.contains("Component") {
        return true;
    }

    let lower = path.to_lowercase();
    lower.contains("card") || lower.contains("modal")
}
