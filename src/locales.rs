//! Locale tree loading, flattening and unflattening.
//!
//! Locale files are nested JSON mappings, one file per locale
//! (`<locales-root>/en.json`, `<locales-root>/ko.json`, ...). The checks all
//! operate on the flattened view: dotted key path -> leaf value.
//!
//! `flatten` and `unflatten` are pure inverse functions over
//! `serde_json::Value` so the completeness logic stays testable without any
//! file I/O. The `preserve_order` feature of serde_json keeps both
//! directions order-stable.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::{Map, Value};

use crate::utils::{build_line_index, offset_to_line};

/// Recursion bound for flatten/unflatten. Parsed JSON cannot be cyclic, but
/// a pathological input should fail loudly rather than blow the stack.
const MAX_DEPTH: usize = 64;

/// One flattened entry of a locale tree, with the location of its key in the
/// locale file for reporting.
#[derive(Debug, Clone)]
pub struct LocaleEntry {
    pub value: String,
    pub file_path: String,
    pub line: usize,
}

/// Flattened view of one locale: dotted key path -> entry.
pub type LocaleMap = HashMap<String, LocaleEntry>;

/// All loaded locales: locale code -> flattened map.
pub type AllLocales = HashMap<String, LocaleMap>;

/// Flatten a nested locale tree into dotted-path -> leaf value pairs.
///
/// Objects are recursed into unconditionally (up to [`MAX_DEPTH`]); `null`
/// values are skipped; every other value (string, number, bool, array) is
/// emitted as a leaf. An empty tree yields an empty map.
pub fn flatten(tree: &Value) -> Result<Map<String, Value>> {
    let mut flat = Map::new();
    flatten_into(tree, String::new(), 0, &mut flat)?;
    Ok(flat)
}

fn flatten_into(
    value: &Value,
    prefix: String,
    depth: usize,
    flat: &mut Map<String, Value>,
) -> Result<()> {
    if depth > MAX_DEPTH {
        bail!("Locale tree nesting exceeds {} levels at \"{}\"", MAX_DEPTH, prefix);
    }

    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(val, path, depth + 1, flat)?;
            }
        }
        Value::Null => {}
        leaf => {
            flat.insert(prefix, leaf.clone());
        }
    }
    Ok(())
}

/// Rebuild a nested locale tree from flattened dotted-path entries.
///
/// Inverse of [`flatten`] for well-formed inputs: no entry's path may be a
/// prefix of another entry's path.
pub fn unflatten(flat: &Map<String, Value>) -> Result<Value> {
    let mut root = Map::new();

    for (path, value) in flat {
        let parts: Vec<&str> = path.split('.').collect();
        if parts.len() > MAX_DEPTH {
            bail!("Key path \"{}\" exceeds {} levels", path, MAX_DEPTH);
        }

        let mut current = &mut root;
        for part in &parts[..parts.len() - 1] {
            let slot = current
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            current = match slot {
                Value::Object(map) => map,
                _ => bail!(
                    "Key path \"{}\" conflicts with an existing leaf at \"{}\"",
                    path,
                    part
                ),
            };
        }
        let leaf_key = parts[parts.len() - 1].to_string();
        if current.insert(leaf_key, value.clone()).is_some() {
            bail!("Duplicate key path \"{}\"", path);
        }
    }

    Ok(Value::Object(root))
}

/// Render a leaf value the way it would appear to the user.
///
/// Strings are unquoted; everything else uses its JSON form.
fn leaf_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Find the line number where a key appears in the JSON content.
///
/// Searches for each key part in sequence so duplicate leaf keys resolve
/// correctly: `home.title` finds the `"title"` that comes after `"home"`,
/// not a `"title"` in another namespace. Each match must actually be a JSON
/// key (followed by `:`) rather than a string value containing the same
/// text.
fn find_key_line(content: &str, key_path: &str, line_index: &[usize]) -> usize {
    let parts: Vec<&str> = key_path.split('.').collect();

    let mut search_start = 0;
    for part in &parts {
        let pattern = format!("\"{}\"", part);
        let remaining = &content[search_start..];

        let mut pos = 0;
        let mut found = false;
        while let Some(rel_pos) = remaining[pos..].find(&pattern) {
            let abs_pos = pos + rel_pos;
            let after_pattern = abs_pos + pattern.len();

            if after_pattern < remaining.len() {
                let is_key = remaining[after_pattern..].trim_start().starts_with(':');
                if is_key {
                    search_start += after_pattern;
                    found = true;
                    break;
                }
            }
            pos = abs_pos + 1;
        }

        if !found {
            break;
        }
    }

    if search_start > 0 {
        offset_to_line(line_index, search_start)
    } else {
        1
    }
}

/// Parse one locale file into its flattened map.
pub fn parse_locale_file(path: &Path) -> Result<LocaleMap> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read locale file: {:?}", path))?;

    let tree: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse locale file: {:?}", path))?;

    let flat = flatten(&tree).with_context(|| format!("Failed to flatten locale file: {:?}", path))?;

    let file_path = path.to_string_lossy().to_string();
    let line_index = build_line_index(&content);

    let mut map = LocaleMap::new();
    for (key, value) in &flat {
        let line = find_key_line(&content, key, &line_index);
        map.insert(
            key.clone(),
            LocaleEntry {
                value: leaf_to_string(value),
                file_path: file_path.clone(),
                line,
            },
        );
    }
    Ok(map)
}

/// Extracts the locale code from a file name.
///
/// Examples: "en.json" -> "en", "zh-CN.json" -> "zh-CN".
pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every `<locale>.json` under the locales directory.
///
/// Any unreadable or unparsable file aborts the load: the completeness
/// checks are meaningless with partial locale data, so a broken file must
/// fail the run rather than shrink the comparison set.
pub fn load_locales(locales_root: impl AsRef<Path>) -> Result<AllLocales> {
    let locales_root = locales_root.as_ref();

    if !locales_root.exists() {
        bail!(
            "Locales directory '{}' does not exist.\n\
             Hint: Check your {} 'localesRoot' setting.",
            locales_root.display(),
            crate::config::CONFIG_FILE_NAME
        );
    }

    if !locales_root.is_dir() {
        bail!("'{}' is not a directory.", locales_root.display());
    }

    let mut locales = AllLocales::new();
    for entry in fs::read_dir(locales_root)
        .with_context(|| format!("Failed to read locales directory: {:?}", locales_root))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) == Some("json")
            && let Some(locale) = extract_locale(&path)
        {
            let map = parse_locale_file(&path)?;
            locales.insert(locale, map);
        }
    }

    Ok(locales)
}
