//! Dictionary-backed handlers: /help, /random, /search, /stats, /add.
//!
//! The gateway reuses these for the matching menu buttons.

use super::Reply;
use crate::{i18n, keyboards};
use slang_dictionary::Dictionary;
use tracing::info;

pub(crate) fn handle_help(dictionary: &Dictionary, lang: &str) -> Reply {
    Reply::with_keyboard(
        i18n::help(lang, &dictionary.stats()),
        keyboards::back_to_main(lang),
    )
}

pub(crate) fn handle_random(dictionary: &Dictionary, lang: &str) -> Reply {
    let text = match dictionary.random_entry() {
        Some(word) => i18n::random_word(lang, &word),
        None => i18n::t("dictionary_empty", lang).to_string(),
    };
    Reply::with_keyboard(text, keyboards::back_to_main(lang))
}

pub(crate) fn handle_stats(dictionary: &Dictionary, lang: &str) -> Reply {
    Reply::text(i18n::stats(lang, &dictionary.stats()))
}

pub(crate) fn handle_search(dictionary: &Dictionary, query: &str, lang: &str) -> Reply {
    let words = dictionary.search(query);
    let text = if words.is_empty() {
        i18n::t("no_results", lang).to_string()
    } else {
        i18n::search_results(lang, query.trim(), &words)
    };
    Reply::with_keyboard(text, keyboards::back_to_main(lang))
}

pub(crate) fn handle_add(dictionary: &Dictionary, args: &str, is_admin: bool, lang: &str) -> Reply {
    if !is_admin {
        return Reply::text(i18n::t("admin_only", lang));
    }
    let Some((slang, normal, explanation)) = parse_add_args(args) else {
        return Reply::text(i18n::t("add_usage", lang));
    };
    if dictionary.add_word(slang, normal, explanation) {
        info!("admin added slang word '{slang}'");
        Reply::text(i18n::word_added(lang, &slang.to_lowercase()))
    } else {
        Reply::text(i18n::t("add_failed", lang))
    }
}

/// Parse `slang | normal | explanation`; every part must be non-empty.
pub(crate) fn parse_add_args(args: &str) -> Option<(&str, &str, &str)> {
    let parts: Vec<&str> = args.splitn(3, '|').map(str::trim).collect();
    match parts.as_slice() {
        [slang, normal, explanation]
            if !slang.is_empty() && !normal.is_empty() && !explanation.is_empty() =>
        {
            Some((*slang, *normal, *explanation))
        }
        _ => None,
    }
}
