//! Relevance heuristic for hardcoded-text candidates.
//!
//! [`should_translate`] is a pure decision cascade (text -> bool) kept free
//! of any file I/O so its precision/recall can be tuned and tested in
//! isolation. It deliberately favors recall over precision: a false
//! positive costs a developer a glance, a false negative ships untranslated
//! UI text.

use std::sync::LazyLock;

use regex::Regex;

use crate::utils::contains_alphabetic;

/// UI vocabulary: any candidate containing one of these (case-insensitive)
/// is considered user-facing text.
const UI_VOCABULARY: &[&str] = &[
    "save", "cancel", "delete", "edit", "submit", "close", "open", "search",
    "login", "logout", "sign in", "sign up", "register", "next", "previous",
    "back", "home", "settings", "profile", "welcome", "hello", "loading",
    "error", "retry", "confirm", "continue", "click", "enter", "select",
    "email", "password", "username", "article", "news", "quiz", "question",
    "answer", "score", "vocabulary", "word", "translation", "translate",
    "language", "learn", "read", "level", "bookmark", "favorite",
];

/// Single-character tokens that are still real UI text (CJK UI labels).
const SHORT_UI_TOKENS: &[&str] = &["예", "네", "是", "否"];

/// Ad hoc phrase fragments not covered by the vocabulary list.
const PHRASE_FRAGMENTS: &[&str] = &[
    "please ",
    "try again",
    "no results",
    "not found",
    "coming soon",
    "are you sure",
    "click here",
];

static CONSTANT_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9_]+$").unwrap());

static FILE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.[a-z0-9]{1,5}$").unwrap());

/// Two or more capitalized humps with no spaces: `UserProfileCard`.
static PASCAL_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[A-Z][a-z0-9]*){2,}$").unwrap());

static BRACE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{[^{}]*\}$").unwrap());

static COLOR_HEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap());

static CSS_LENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(?:\.\d+)?(?:px|em|rem|vh|vw|pt|%)$").unwrap());

fn is_url_or_path_like(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("www.")
        || lower.contains("://")
        || text.contains('/')
        || FILE_EXTENSION.is_match(text)
}

/// Decide whether a candidate string is user-facing text worth translating.
///
/// Evaluated strictly in precedence order; the first matching step wins.
pub fn should_translate(text: &str) -> bool {
    // 1. Empty or whitespace-only
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    // 2. Too short to judge by shape: only known UI tokens pass
    if text.chars().count() < 2 {
        let lower = text.to_lowercase();
        return SHORT_UI_TOKENS.iter().any(|t| t.to_lowercase() == lower);
    }

    // 3. Constant-name shape: MAX_RETRIES, HTTP_200
    if CONSTANT_SHAPE.is_match(text) {
        return false;
    }

    // 4. URLs, paths, file names
    if is_url_or_path_like(text) {
        return false;
    }

    // 5. Identifier-shaped tokens and `{placeholder}` expressions
    if PASCAL_IDENTIFIER.is_match(text) || BRACE_PLACEHOLDER.is_match(text) {
        return false;
    }

    // 6. Style literals: #fff, 16px, 100%
    if COLOR_HEX.is_match(text) || CSS_LENGTH.is_match(text) {
        return false;
    }

    // 7. Nothing alphabetic left to translate
    if !contains_alphabetic(text) {
        return false;
    }

    // 8. UI vocabulary match
    let lower = text.to_lowercase();
    if UI_VOCABULARY.iter().any(|w| lower.contains(w)) {
        return true;
    }

    // 9. Known phrase fragments
    if PHRASE_FRAGMENTS.iter().any(|p| lower.contains(p)) {
        return true;
    }

    // 10. Sentence-shaped text
    let multi_word = text.split_whitespace().count() > 1;
    let sentence_punctuated = text.ends_with(['.', '!', '?']);
    let capitalized_word = text.chars().next().is_some_and(|c| c.is_uppercase())
        && text.chars().count() > 3;

    multi_word || sentence_punctuated || capitalized_word
}
