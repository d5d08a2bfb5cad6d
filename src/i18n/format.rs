//! Format helpers for strings with interpolation.

use super::t;
use slang_dictionary::{SlangWord, Stats};

/// Escape Telegram Markdown control characters so `text` shows up verbatim.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Translation result: the converted text and its explanation as two fields.
pub fn translation_result(lang: &str, translation: &str, explanation: &str) -> String {
    format!(
        "{}\n{}\n\n{}\n{}",
        t("translation_label", lang),
        escape_markdown(translation),
        t("explanation_label", lang),
        escape_markdown(explanation),
    )
}

/// A single dictionary word.
pub fn word_card(word: &SlangWord) -> String {
    format!(
        "*{}* → {}\n{}",
        escape_markdown(&word.slang),
        escape_markdown(&word.normal),
        escape_markdown(&word.explanation)
    )
}

/// The random-word reply.
pub fn random_word(lang: &str, word: &SlangWord) -> String {
    format!("{}\n\n{}", t("random_header", lang), word_card(word))
}

/// The search reply; callers handle the empty case.
pub fn search_results(lang: &str, query: &str, words: &[SlangWord]) -> String {
    let query = escape_markdown(query);
    let mut out = match lang {
        "Russian" => format!("{} «{query}»:", t("search_header", lang)),
        _ => format!("{} for \"{query}\":", t("search_header", lang)),
    };
    for (i, word) in words.iter().enumerate() {
        out.push_str(&format!("\n\n{}. {}", i + 1, word_card(word)));
    }
    out
}

/// Dictionary statistics block.
pub fn stats(lang: &str, stats: &Stats) -> String {
    format!(
        "{}\n{} {}\n{} {}",
        t("stats_header", lang),
        t("words_label", lang),
        stats.total_words,
        t("file_size_label", lang),
        format_bytes(stats.file_size_bytes),
    )
}

/// Confirmation after an admin adds a word.
pub fn word_added(lang: &str, slang: &str) -> String {
    let slang = escape_markdown(slang);
    match lang {
        "Russian" => format!("Слово «{slang}» добавлено в словарь."),
        _ => format!("Added \"{slang}\" to the dictionary."),
    }
}

/// Greeting shown by `/start`.
pub fn welcome(lang: &str, bot_name: &str) -> String {
    let bot_name = escape_markdown(bot_name);
    match lang {
        "Russian" => format!(
            "Привет! Я *{bot_name}*. {}\n\n{}",
            t("help_intro", lang),
            t("main_menu", lang)
        ),
        _ => format!(
            "Hi! I'm *{bot_name}*. {}\n\n{}",
            t("help_intro", lang),
            t("main_menu", lang)
        ),
    }
}

/// Full help text including current dictionary stats.
pub fn help(lang: &str, dictionary_stats: &Stats) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        t("help_intro", lang),
        t("help_commands", lang),
        stats(lang, dictionary_stats),
    )
}

/// Button label for a history item: 1-based index and the first 30 chars.
pub fn history_label(index: usize, original: &str) -> String {
    let preview: String = original.chars().take(30).collect();
    format!("{}. {preview}...", index + 1)
}

/// Format bytes into a human-readable string.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
