//! Slang ↔ normal translation.

use super::{decode, Dictionary};
use crate::segment::{is_alphabetic, is_space, segment};

/// Explanation returned when no word was substituted.
pub const NO_SLANG_FOUND: &str = "No slang words found in the dictionary.";

/// Result of a translation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation {
    /// Input with matched words replaced; spacing and punctuation untouched.
    pub text: String,
    /// One `'<from>' → '<to>': <explanation>` fragment per substitution.
    pub explanations: Vec<String>,
}

impl Translation {
    /// Whether at least one word was substituted.
    pub fn matched(&self) -> bool {
        !self.explanations.is_empty()
    }

    /// Fragments joined with `"; "`, or `fallback` when nothing matched.
    pub fn explanation_or(&self, fallback: &str) -> String {
        if self.matched() {
            self.explanations.join("; ")
        } else {
            fallback.to_string()
        }
    }

    fn into_pair(self) -> (String, String) {
        let explanation = self.explanation_or(NO_SLANG_FOUND);
        (self.text, explanation)
    }
}

impl Dictionary {
    /// Replace every dictionary word in `text` with its normal form.
    ///
    /// Returns `(translation, explanation)`; never fails.
    pub fn translate_slang_to_normal(&self, text: &str) -> (String, String) {
        self.slang_to_normal(text).into_pair()
    }

    /// Replace known normal phrases in `text` with their slang term.
    pub fn translate_normal_to_slang(&self, text: &str) -> (String, String) {
        self.normal_to_slang(text).into_pair()
    }

    /// Token-wise slang → normal substitution.
    pub fn slang_to_normal(&self, text: &str) -> Translation {
        let inner = self.read();
        let mut out = Translation::default();

        for token in segment(text) {
            if !is_alphabetic(token) {
                out.text.push_str(token);
                continue;
            }
            let word = token.to_lowercase();
            let word = word.trim();
            match inner
                .entries
                .get(word)
                .and_then(|value| decode(word, value))
            {
                Some(entry) => {
                    out.text.push_str(&entry.normal);
                    out.explanations.push(format!(
                        "'{word}' → '{}': {}",
                        entry.normal, entry.explanation
                    ));
                }
                None => out.text.push_str(token),
            }
        }

        out
    }

    /// Phrase-wise normal → slang substitution.
    ///
    /// At each position the longest normal form (in tokens) that matches is
    /// replaced. Word tokens compare case-insensitively and any whitespace run
    /// matches any other. Among equal normal forms the earliest key wins.
    pub fn normal_to_slang(&self, text: &str) -> Translation {
        let inner = self.read();

        let mut phrases: Vec<Phrase> = inner
            .entries
            .iter()
            .filter_map(|(slang, value)| {
                let entry = decode(slang, value)?;
                let tokens: Vec<String> = segment(entry.normal.trim())
                    .into_iter()
                    .map(str::to_lowercase)
                    .collect();
                tokens.first().filter(|t| !is_space(t))?;
                Some(Phrase {
                    slang: slang.clone(),
                    normal: entry.normal,
                    explanation: entry.explanation,
                    tokens,
                })
            })
            .collect();
        // Stable: equal lengths keep dictionary order.
        phrases.sort_by(|a, b| b.tokens.len().cmp(&a.tokens.len()));

        let tokens = segment(text);
        let mut out = Translation::default();
        let mut i = 0;

        while i < tokens.len() {
            let hit = if is_space(tokens[i]) {
                None
            } else {
                phrases.iter().find(|p| p.matches_at(&tokens[i..]))
            };
            match hit {
                Some(p) => {
                    out.text.push_str(&p.slang);
                    out.explanations.push(format!(
                        "'{}' → '{}': {}",
                        p.normal, p.slang, p.explanation
                    ));
                    i += p.tokens.len();
                }
                None => {
                    out.text.push_str(tokens[i]);
                    i += 1;
                }
            }
        }

        out
    }
}

struct Phrase {
    slang: String,
    normal: String,
    explanation: String,
    /// Lowercased tokens of `normal`.
    tokens: Vec<String>,
}

impl Phrase {
    fn matches_at(&self, input: &[&str]) -> bool {
        if input.len() < self.tokens.len() {
            return false;
        }
        self.tokens.iter().zip(input).all(|(want, got)| {
            if is_space(want) {
                is_space(got)
            } else {
                *want == got.to_lowercase()
            }
        })
    }
}
