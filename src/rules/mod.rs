//! Detection rules.
//!
//! Each rule is a pure function (or a compiled scanner) from already-loaded
//! inputs to a list of [`crate::issue::Issue`]s. Rules never touch the
//! filesystem and never fail-fast: every violation in the input surfaces in
//! a single run.
//!
//! - `hardcoded`: literal UI strings bypassing the translation function
//! - `missing_key`: keys referenced in code but absent from a locale
//! - `locale_gap`: keys in the primary locale absent from another locale

pub mod hardcoded;
pub mod locale_gap;
pub mod missing_key;

use clap::ValueEnum;

/// Rule selection for `translint check [RULES...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Hardcoded,
    MissingKey,
    LocaleGap,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Hardcoded,
            CheckRule::MissingKey,
            CheckRule::LocaleGap,
        ]
    }
}
