//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use translint::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Hello"));
/// assert!(contains_alphabetic("안녕하세요"));
/// assert!(contains_alphabetic("Hello123"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("---"));
/// assert!(!contains_alphabetic("$100"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// The returned vector contains byte offsets where each line starts.
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
pub fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the 1-based line number for a byte offset using binary search.
pub fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1, // Exact match at line start
        Err(line) => line,    // Falls within this line
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::*;

    #[test]
    fn test_contains_alphabetic() {
        // Should return true for text with letters
        assert!(contains_alphabetic("Hello"));
        assert!(contains_alphabetic("안녕"));
        assert!(contains_alphabetic("Hello123"));
        assert!(contains_alphabetic("123 abc"));
        assert!(contains_alphabetic("Test!@#"));

        // Should return false for text without letters
        assert!(!contains_alphabetic("123"));
        assert!(!contains_alphabetic("---"));
        assert!(!contains_alphabetic("$100"));
        assert!(!contains_alphabetic("!@#$%"));
        assert!(!contains_alphabetic("   "));
        assert!(!contains_alphabetic(""));
        assert!(!contains_alphabetic("123-456"));
    }

    #[test]
    fn test_build_line_index() {
        let content = "line1\nline2\nline3";
        let index = build_line_index(content);

        // Line 1 starts at 0, line 2 at 6, line 3 at 12
        assert_eq!(index, vec![0, 6, 12]);

        assert_eq!(offset_to_line(&index, 0), 1);
        assert_eq!(offset_to_line(&index, 3), 1);
        assert_eq!(offset_to_line(&index, 6), 2);
        assert_eq!(offset_to_line(&index, 8), 2);
        assert_eq!(offset_to_line(&index, 12), 3);
    }
}
