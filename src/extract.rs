//! Translation-key extraction from raw source text.
//!
//! Finds call sites of the configured translation functions with a single
//! quoted literal argument (`t('home.title')`, `t("home.title")`,
//! ``t(`home.title`)``) and records the referenced key with its location.
//!
//! Dynamic keys are not resolved: template literals containing `${...}`,
//! variables and concatenations are skipped. This is a documented
//! limitation of the lexical approach, not something to patch around.

use anyhow::{Context, Result};
use regex::Regex;

/// One translation-function call site found in source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyUsage {
    pub key: String,
    pub file_path: String,
    /// 1-based line number.
    pub line: usize,
    /// 1-based character column of the key literal.
    pub col: usize,
    pub source_line: String,
}

/// Compiled call-site pattern for a set of translation function names.
pub struct KeyExtractor {
    pattern: Regex,
}

impl KeyExtractor {
    /// Build the extractor for the configured translation function names.
    pub fn new(function_names: &[String]) -> Result<Self> {
        let names = function_names
            .iter()
            .map(|n| regex::escape(n))
            .collect::<Vec<_>>()
            .join("|");

        // The regex crate has no backreferences, so each quote style gets
        // its own alternative. The argument must be a single literal:
        // either the closing paren follows, or a `,` starts an options
        // object (i18next interpolation values).
        let pattern = Regex::new(&format!(
            r#"\b(?:{names})\(\s*(?:'([^'\n]*)'|"([^"\n]*)"|`([^`\n]*)`)\s*[,)]"#
        ))
        .context("Failed to compile translation call pattern")?;

        Ok(Self { pattern })
    }

    /// Extract every statically-known key reference from one file's text.
    pub fn extract(&self, file_path: &str, content: &str) -> Vec<KeyUsage> {
        let mut usages = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            for caps in self.pattern.captures_iter(line) {
                let group = [1usize, 2, 3].into_iter().find_map(|i| caps.get(i));
                let Some(m) = group else { continue };

                let key = m.as_str();
                if key.trim().is_empty() {
                    continue;
                }
                // Backtick templates with expressions are dynamic keys.
                if key.contains("${") {
                    continue;
                }

                usages.push(KeyUsage {
                    key: key.to_string(),
                    file_path: file_path.to_string(),
                    line: idx + 1,
                    col: line[..m.start()].chars().count() + 1,
                    source_line: line.to_string(),
                });
            }
        }

        usages
    }
}
