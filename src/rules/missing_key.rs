//! Usage completeness: every key referenced in code must exist in every
//! loaded locale.
//!
//! Existence of the flattened path is the criterion; a present-but-empty
//! string still counts as defined. All (locale, key) misses are collected
//! in one pass, never fail-fast.

use crate::{extract::KeyUsage, issue::Issue, locales::AllLocales};

pub fn check_missing_keys(usages: &[KeyUsage], locales: &AllLocales) -> Vec<Issue> {
    let mut locale_names: Vec<&String> = locales.keys().collect();
    locale_names.sort();

    let mut issues = Vec::new();
    for usage in usages {
        for locale in &locale_names {
            let map = &locales[*locale];
            if !map.contains_key(&usage.key) {
                issues.push(Issue::missing_key(
                    &usage.file_path,
                    usage.line,
                    usage.col,
                    &usage.key,
                    locale,
                    Some(usage.source_line.clone()),
                ));
            }
        }
    }

    issues.sort();
    issues
}
