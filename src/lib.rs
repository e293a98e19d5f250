//! Translint - i18n consistency checker for React projects
//!
//! Translint is a CLI tool and library for checking internationalization (i18n)
//! issues in React projects using i18next-style translation calls. It detects
//! hardcoded UI text, translation keys referenced in code but missing from
//! locale files, and keys present in the primary locale but missing elsewhere.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, exit codes)
//! - `commands`: Command implementations (`check`, `init`)
//! - `config`: Configuration file loading and parsing
//! - `extract`: Translation-key extraction from source text
//! - `heuristics`: The `should_translate` relevance cascade
//! - `issue`: Issue type definitions
//! - `locales`: Locale tree loading, flattening and unflattening
//! - `reporter`: Cargo-style console report formatting
//! - `rules`: Detection rules (hardcoded text, missing keys, locale gaps)
//! - `scanner`: Source file discovery
//! - `utils`: Shared utility functions

pub mod cli;
pub mod commands;
pub mod config;
pub mod extract;
pub mod heuristics;
pub mod issue;
pub mod locales;
pub mod reporter;
pub mod rules;
pub mod scanner;
pub mod utils;
