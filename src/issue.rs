//! Issue types for i18n analysis results.
//!
//! Every finding produced by a rule is represented as an [`Issue`] carrying
//! enough locality (file path, line, column, locale, key) to act on without
//! re-running the scan.

use std::{cmp::Ordering, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    HardcodedText,
    MissingKey,
    LocaleGap,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::HardcodedText => write!(f, "hardcoded-text"),
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::LocaleGap => write!(f, "locale-gap"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub file_path: String,
    pub line: usize,
    pub col: Option<usize>,
    pub message: String,
    pub severity: Severity,
    pub rule: Rule,
    pub details: Option<String>,
    pub source_line: Option<String>,
}

impl Issue {
    pub fn hardcoded(
        file_path: &str,
        line: usize,
        col: usize,
        text: &str,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line,
            col: Some(col),
            message: text.to_string(),
            severity: Severity::Error,
            rule: Rule::HardcodedText,
            details: None,
            source_line,
        }
    }

    pub fn missing_key(
        file_path: &str,
        line: usize,
        col: usize,
        key: &str,
        locale: &str,
        source_line: Option<String>,
    ) -> Self {
        Self {
            file_path: file_path.to_string(),
            line,
            col: Some(col),
            message: key.to_string(),
            severity: Severity::Error,
            rule: Rule::MissingKey,
            details: Some(format!("not defined in locale \"{}\"", locale)),
            source_line,
        }
    }

    pub fn locale_gap(key: &str, value: &str, file_path: &str, line: usize, missing_in: &[String]) -> Self {
        Self {
            file_path: file_path.to_string(),
            line,
            col: None,
            message: key.to_string(),
            severity: Severity::Error,
            rule: Rule::LocaleGap,
            details: Some(format!(
                "(\"{}\") missing in: {}",
                value,
                missing_in.join(", ")
            )),
            source_line: None,
        }
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file_path
            .cmp(&other.file_path)
            .then_with(|| self.line.cmp(&other.line))
            .then_with(|| self.col.cmp(&other.col))
            .then_with(|| self.rule.cmp(&other.rule))
            .then_with(|| self.message.cmp(&other.message))
    }
}
