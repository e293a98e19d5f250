//! Cross-locale completeness: every key in the primary locale must exist in
//! every other locale.
//!
//! The primary locale is the authoritative key set; a key missing elsewhere
//! means that locale ships a translation gap. Reported per key with the
//! sorted list of lagging locales, located at the primary locale file's key
//! line.

use anyhow::{Result, bail};

use crate::{issue::Issue, locales::AllLocales};

pub fn check_locale_gaps(primary_locale: &str, locales: &AllLocales) -> Result<Vec<Issue>> {
    let Some(primary) = locales.get(primary_locale) else {
        // The primary locale is the reference key set; without it the
        // check would certify completeness against nothing. That is a
        // load failure, not a clean run.
        bail!(
            "Primary locale \"{}\" has no locale file.\n\
             Hint: Check your {} 'primaryLocale' setting.",
            primary_locale,
            crate::config::CONFIG_FILE_NAME
        );
    };

    let mut issues: Vec<Issue> = primary
        .iter()
        .filter_map(|(key, entry)| {
            let mut missing_in: Vec<String> = locales
                .iter()
                .filter(|(locale, map)| *locale != primary_locale && !map.contains_key(key))
                .map(|(locale, _)| locale.clone())
                .collect();
            missing_in.sort();

            if missing_in.is_empty() {
                None
            } else {
                Some(Issue::locale_gap(
                    key,
                    &entry.value,
                    &entry.file_path,
                    entry.line,
                    &missing_in,
                ))
            }
        })
        .collect();

    issues.sort();
    Ok(issues)
}
