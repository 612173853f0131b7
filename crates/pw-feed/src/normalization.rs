//! Text normalization for free-text search over questions.
//!
//! Question text is crowdsourced, so the same question shows up with different casing,
//! accents and punctuation. Search compares normalized forms only.

use unicode_normalization::UnicodeNormalization;

/// Normalize a string for search comparison.
///
/// Applies the following transformations in order:
/// 1. Lowercase
/// 2. Ligature expansion (e.g. `ß` -> `ss`)
/// 3. Unicode NFD decomposition, then drop combining marks
/// 4. Replace punctuation with spaces
/// 5. Collapse and trim whitespace
///
/// `"Résumé-screening"` and `"resume screening"` normalize to the same string.
pub fn normalize_for_search(s: &str) -> String {
    s.to_lowercase()
        .replace('ß', "ss")
        .replace('æ', "ae")
        .replace('œ', "oe")
        .nfd()
        .filter_map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                Some(c)
            } else if c.is_ascii_punctuation() {
                Some(' ')
            } else {
                None
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether `needle` occurs in `haystack` once both are normalized.
/// A needle that normalizes to nothing matches everything.
pub fn search_matches(haystack: &str, needle: &str) -> bool {
    let needle = normalize_for_search(needle);
    needle.is_empty() || normalize_for_search(haystack).contains(&needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(normalize_for_search("  Design   a URL Shortener "), "design a url shortener");
        assert_eq!(normalize_for_search(""), "");
        assert_eq!(normalize_for_search("   "), "");
    }

    #[test]
    fn test_accents_stripped() {
        assert_eq!(normalize_for_search("Résumé"), "resume");
        assert_eq!(normalize_for_search("naïve"), "naive");
        assert_eq!(normalize_for_search("Straße"), "strasse");
    }

    #[test]
    fn test_punctuation_becomes_space() {
        assert_eq!(normalize_for_search("LRU-cache"), "lru cache");
        assert_eq!(normalize_for_search("What's a B+tree?"), "what s a b tree");
    }

    #[test]
    fn test_numbers_preserved() {
        assert_eq!(normalize_for_search("Top 10 SQL queries"), "top 10 sql queries");
    }

    #[test]
    fn test_search_matches() {
        assert!(search_matches("Implement an LRU cache", "lru CACHE"));
        assert!(search_matches("Implement an LRU cache", "lru-cache"));
        assert!(search_matches("Design a URL shortener", ""));
        assert!(!search_matches("Design a URL shortener", "linked list"));
    }
}
