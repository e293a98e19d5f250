//! Hardcoded text detection.
//!
//! Applies ordered line-level patterns to component-like source files,
//! extracting literal text from JSX tag bodies, checked string attributes
//! and inline literal expressions, then filters candidates through
//! [`crate::heuristics::should_translate`].
//!
//! Matches are suppressed when the surrounding line also matches an
//! exception pattern (imports, style props, console calls, an existing
//! translation call). Exceptions are scoped to the matched line, not the
//! whole file.

use std::collections::HashSet;

use anyhow::{Context, Result};
use regex::Regex;

use crate::{config::Config, heuristics::should_translate, issue::Issue, scanner::is_component_file};

pub struct HardcodedScanner {
    /// Text between a closing `>` and an opening `<`: `<h1>Welcome</h1>`.
    text_pattern: Regex,
    /// String values of user-facing attributes: `placeholder="Enter name"`.
    attr_pattern: Regex,
    /// Inline literal expressions: `{'Welcome'}`.
    expr_pattern: Regex,
    /// A line matching any of these is mechanically not user-facing text.
    exceptions: Vec<Regex>,
    /// Exact texts exempted via config.
    ignore_texts: HashSet<String>,
}

impl HardcodedScanner {
    pub fn new(config: &Config) -> Result<Self> {
        let attrs = config
            .checked_attributes
            .iter()
            .map(|a| regex::escape(a))
            .collect::<Vec<_>>()
            .join("|");

        let fns = config
            .translation_functions
            .iter()
            .map(|f| regex::escape(f))
            .collect::<Vec<_>>()
            .join("|");

        let exceptions = [
            r"^\s*(?:import|export)\b".to_string(),
            r"^\s*(?://|/\*|\*)".to_string(),
            r"\b(?:className|style|sx|css)\s*=".to_string(),
            r"console\.\w+\s*\(".to_string(),
            format!(r"\b(?:{fns})\(\s*['\x22`]"),
        ]
        .iter()
        .map(|p| Regex::new(p).context("Failed to compile exception pattern"))
        .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            text_pattern: Regex::new(r">\s*([^<>{}\n]+?)\s*<")
                .context("Failed to compile tag text pattern")?,
            attr_pattern: Regex::new(&format!(
                r#"\b(?:{attrs})\s*=\s*["']([^"'\n]+)["']"#
            ))
            .context("Failed to compile attribute pattern")?,
            expr_pattern: Regex::new(r#"\{\s*(?:'([^'\n]+)'|"([^"\n]+)")\s*\}"#)
                .context("Failed to compile expression pattern")?,
            exceptions,
            ignore_texts: config.ignore_texts.iter().cloned().collect(),
        })
    }

    /// Scan one file's text for hardcoded UI strings.
    ///
    /// Non-component files are skipped entirely.
    pub fn scan(&self, file_path: &str, content: &str) -> Vec<Issue> {
        if !is_component_file(file_path) {
            return Vec::new();
        }

        let mut issues = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if self.exceptions.iter().any(|e| e.is_match(line)) {
                continue;
            }

            let patterns: [(&Regex, &[usize]); 3] = [
                (&self.text_pattern, &[1]),
                (&self.attr_pattern, &[1]),
                (&self.expr_pattern, &[1, 2]),
            ];
            for (pattern, groups) in patterns {
                for caps in pattern.captures_iter(line) {
                    let Some(m) = groups.iter().find_map(|&g| caps.get(g)) else {
                        continue;
                    };

                    let text = m.as_str().trim();
                    if self.ignore_texts.contains(text) {
                        continue;
                    }
                    if !should_translate(text) {
                        continue;
                    }

                    issues.push(Issue::hardcoded(
                        file_path,
                        idx + 1,
                        line[..m.start()].chars().count() + 1,
                        text,
                        Some(line.to_string()),
                    ));
                }
            }
        }

        issues
    }
}
