//! The `check` command: scan sources, load locales, run rules, aggregate.
//!
//! Source file reads and locale loads are fatal on failure: a completeness
//! gate that silently skips input would report a clean run on broken data.
//! Rule findings, by contrast, are accumulated so one run surfaces the
//! complete defect list.

use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    config::Config,
    extract::{KeyExtractor, KeyUsage},
    issue::Issue,
    locales::{self, AllLocales},
    rules::{CheckRule, hardcoded::HardcodedScanner, locale_gap, missing_key},
    scanner,
};

/// Everything a caller needs to report on a finished check run.
#[derive(Debug)]
pub struct CheckOutcome {
    pub issues: Vec<Issue>,
    pub source_files_checked: usize,
    pub locale_files_checked: usize,
}

impl CheckOutcome {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Run the selected rules (all of them when `rules` is empty).
pub fn run_check(config: &Config, rules: &[CheckRule], verbose: bool) -> Result<CheckOutcome> {
    let rules = if rules.is_empty() {
        CheckRule::all()
    } else {
        rules.to_vec()
    };
    let run_hardcoded = rules.contains(&CheckRule::Hardcoded);
    let run_missing = rules.contains(&CheckRule::MissingKey);
    let run_locale_gap = rules.contains(&CheckRule::LocaleGap);
    let needs_locales = run_missing || run_locale_gap;

    let scan = scanner::scan_files(
        &config.source_root,
        &config.includes,
        &config.ignores,
        config.ignore_test_files,
        verbose,
    );

    if verbose {
        eprintln!(
            "{} scanning {} source file(s), {} skipped",
            "info:".bold(),
            scan.files.len(),
            scan.skipped_count
        );
        for file in &scan.files {
            eprintln!("  {}", file.dimmed());
        }
    }

    // Read every source file up front; any unreadable file aborts the run.
    let sources: Vec<(String, String)> = scan
        .files
        .iter()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read source file: {}", path))
                .map(|content| (path.clone(), content))
        })
        .collect::<Result<_>>()?;

    let extractor = KeyExtractor::new(&config.translation_functions)?;
    let hardcoded_scanner = HardcodedScanner::new(config)?;

    // Source analysis and locale loading are independent.
    let (per_file, locales) = rayon::join(
        || analyze_sources(&sources, &extractor, &hardcoded_scanner, run_hardcoded),
        || -> Result<Option<AllLocales>> {
            if needs_locales {
                Ok(Some(locales::load_locales(&config.locales_root)?))
            } else {
                Ok(None)
            }
        },
    );
    let locales = locales?;

    let mut issues = Vec::new();
    let mut all_usages: Vec<KeyUsage> = Vec::new();
    for (usages, hardcoded_issues) in per_file {
        all_usages.extend(usages);
        issues.extend(hardcoded_issues);
    }

    let locale_files_checked = locales.as_ref().map(|l| l.len()).unwrap_or(0);
    if let Some(locales) = &locales {
        if run_missing {
            issues.extend(missing_key::check_missing_keys(&all_usages, locales));
        }
        if run_locale_gap {
            issues.extend(locale_gap::check_locale_gaps(&config.primary_locale, locales)?);
        }
    }

    issues.sort();

    Ok(CheckOutcome {
        issues,
        source_files_checked: sources.len(),
        locale_files_checked,
    })
}

fn analyze_sources(
    sources: &[(String, String)],
    extractor: &KeyExtractor,
    hardcoded_scanner: &HardcodedScanner,
    run_hardcoded: bool,
) -> Vec<(Vec<KeyUsage>, Vec<Issue>)> {
    sources
        .par_iter()
        .map(|(path, content)| {
            let usages = extractor.extract(path, content);
            let hardcoded_issues = if run_hardcoded {
                hardcoded_scanner.scan(path, content)
            } else {
                Vec::new()
            };
            (usages, hardcoded_issues)
        })
        .collect()
}
