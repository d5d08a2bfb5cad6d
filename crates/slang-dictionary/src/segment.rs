//! Lossless text segmentation.
//!
//! A maximal run of word characters is one token, a maximal run of
//! whitespace is one token, and every other character stands alone.
//! Joining the tokens in order always gives back the input.

use regex::Regex;
use std::sync::OnceLock;

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Every char is \w, \s, or neither, so the alternation covers the whole input.
    RE.get_or_init(|| Regex::new(r"\w+|\s+|[^\w\s]").expect("static token regex"))
}

/// Split `text` into word, whitespace, and single-symbol tokens.
pub fn segment(text: &str) -> Vec<&str> {
    token_regex().find_iter(text).map(|m| m.as_str()).collect()
}

fn letters_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\p{L}+$").expect("static letters regex"))
}

/// Whether every character of `token` is a letter (Unicode category `L*`).
///
/// Only such tokens are dictionary candidates; `4real`, `_`, letter numbers
/// like `Ⅻ` and words carrying combining marks never are.
pub fn is_alphabetic(token: &str) -> bool {
    letters_regex().is_match(token)
}

/// Whether `token` is a whitespace run.
pub fn is_space(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_basic_sentence() {
        assert_eq!(
            segment("No cap, bro!"),
            vec!["No", " ", "cap", ",", " ", "bro", "!"]
        );
    }

    #[test]
    fn test_segment_round_trip() {
        let samples = [
            "",
            "   ",
            "hello",
            "No cap, bro!",
            "  leading and trailing  ",
            "tabs\tand\nnewlines\r\n",
            "snake_case and 4real 2day",
            "кринж, это рофл!!!",
            "emoji 🔥🔥 mixed...?",
            "a-b--c",
            "quote's \"double\" (paren)",
        ];
        for s in samples {
            assert_eq!(segment(s).concat(), s, "round trip failed for {s:?}");
        }
    }

    #[test]
    fn test_segment_symbols_are_single_chars() {
        assert_eq!(segment("?!."), vec!["?", "!", "."]);
        assert_eq!(segment("🔥🔥"), vec!["🔥", "🔥"]);
    }

    #[test]
    fn test_segment_whitespace_runs_are_one_token() {
        assert_eq!(segment("a \t\n b"), vec!["a", " \t\n ", "b"]);
    }

    #[test]
    fn test_segment_cyrillic_words() {
        assert_eq!(segment("чё кринж"), vec!["чё", " ", "кринж"]);
    }

    #[test]
    fn test_is_alphabetic() {
        assert!(is_alphabetic("cap"));
        assert!(is_alphabetic("Кринж"));
        assert!(!is_alphabetic("4real"));
        assert!(!is_alphabetic("snake_case"));
        assert!(!is_alphabetic(" "));
        assert!(!is_alphabetic(""));
    }

    #[test]
    fn test_is_alphabetic_rejects_non_letter_categories() {
        // Nl letter number.
        assert!(!is_alphabetic("Ⅻ"));
        // Devanagari KA + vowel sign I (Mc).
        assert!(!is_alphabetic("कि"));
        assert!(is_alphabetic("क"));
        assert!(is_alphabetic("ёлка"));
    }

    #[test]
    fn test_is_space() {
        assert!(is_space(" \t"));
        assert!(!is_space("a"));
        assert!(!is_space(""));
    }
}
