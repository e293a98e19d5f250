//! Report formatting and printing utilities.
//!
//! This module is separate from the check logic so translint can be used as
//! a library without printing side effects.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::issue::{Issue, Severity};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print issues in a cargo-style format.
///
/// Issues are sorted and displayed with:
/// - Severity and message
/// - Clickable file location (path:line:col)
/// - Source code context with caret indicator
/// - Notes
/// - Summary of total errors/warnings
pub fn print_report(issues: &[Issue]) {
    let mut sorted = issues.to_vec();
    sorted.sort();

    // Calculate max line number width for alignment
    let max_line_width = sorted
        .iter()
        .map(|i| i.line)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for issue in &sorted {
        let severity_str = match issue.severity {
            Severity::Error => "error".bold().red(),
            Severity::Warning => "warning".bold().yellow(),
        };

        println!(
            "{}: \"{}\"  {}",
            severity_str,
            issue.message,
            issue.rule.to_string().dimmed().cyan()
        );

        // Clickable location: --> path:line[:col]
        match issue.col {
            Some(col) => println!("  {} {}:{}:{}", "-->".blue(), issue.file_path, issue.line, col),
            None => println!("  {} {}:{}", "-->".blue(), issue.file_path, issue.line),
        }

        if let Some(source_line) = &issue.source_line {
            let caret_char = match issue.severity {
                Severity::Error => "^".red(),
                Severity::Warning => "^".yellow(),
            };

            println!("{:>width$} {}", "", "|".blue(), width = max_line_width);
            println!(
                "{:>width$} {} {}",
                issue.line.to_string().blue(),
                "|".blue(),
                source_line,
                width = max_line_width
            );
            // Caret pointing to the column (1-based). Use unicode display
            // width for correct positioning with CJK chars and emoji.
            let col = issue.col.unwrap_or(1);
            let prefix = if col > 1 {
                source_line.chars().take(col - 1).collect::<String>()
            } else {
                String::new()
            };
            let caret_padding = UnicodeWidthStr::width(prefix.as_str());
            println!(
                "{:>width$} {} {:>padding$}{}",
                "",
                "|".blue(),
                "",
                caret_char,
                width = max_line_width,
                padding = caret_padding
            );
        }

        if let Some(details) = &issue.details {
            println!(
                "{:>width$} {} {} {}",
                "",
                "=".blue(),
                "note:".bold(),
                details,
                width = max_line_width
            );
        }

        println!(); // Empty line between issues
    }

    // Summary
    let total_errors = sorted
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let total_warnings = sorted
        .iter()
        .filter(|i| i.severity == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        println!(
            "\n{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

/// Print a success message when no issues are found.
///
/// Displays the number of files checked to give the user confidence
/// that the check actually ran and covered the expected scope.
pub fn print_success(source_files: usize, locale_files: usize) {
    if locale_files == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} source {} - no issues found",
                source_files,
                if source_files == 1 { "file" } else { "files" }
            )
            .green()
        );
    } else {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Checked {} source {}, {} locale {} - no issues found",
                source_files,
                if source_files == 1 { "file" } else { "files" },
                locale_files,
                if locale_files == 1 { "file" } else { "files" }
            )
            .green()
        );
    }
}
