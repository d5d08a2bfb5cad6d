//! Internationalization — localized strings for bot responses.
//!
//! Uses a simple `t(key, lang)` function for static strings and
//! `format::*` helpers for strings with interpolation.
//! Supported languages: English (fallback), Russian.

mod format;


pub use format::*;

/// Return a localized static string for `key` in the given `lang`.
/// Falls back to English for unsupported languages, `"???"` for unknown keys.
pub fn t(key: &str, lang: &str) -> &'static str {
    match key {
        // --- Buttons ---
        "btn_translate" => match lang {
            "Russian" => "Перевод текста",
            _ => "Translate text",
        },
        "btn_history" => match lang {
            "Russian" => "История поиска",
            _ => "Search history",
        },
        "btn_random" => match lang {
            "Russian" => "Случайное слово",
            _ => "Random word",
        },
        "btn_search" => match lang {
            "Russian" => "Поиск по словарю",
            _ => "Search dictionary",
        },
        "btn_help" => match lang {
            "Russian" => "Помощь",
            _ => "Help",
        },
        "btn_slang_to_normal" => match lang {
            "Russian" => "Со сленга на обычный",
            _ => "Slang → normal",
        },
        "btn_normal_to_slang" => match lang {
            "Russian" => "С обычного на сленг",
            _ => "Normal → slang",
        },
        "btn_back" => match lang {
            "Russian" => "Назад в меню",
            _ => "Back to menu",
        },
        "btn_translate_again" => match lang {
            "Russian" => "Перевести еще",
            _ => "Translate again",
        },
        "btn_main_menu" => match lang {
            "Russian" => "Главное меню",
            _ => "Main menu",
        },
        "btn_cancel" => match lang {
            "Russian" => "Отмена",
            _ => "Cancel",
        },

        // --- Prompts ---
        "main_menu" => match lang {
            "Russian" => "Выберите действие:",
            _ => "Choose an action:",
        },
        "choose_direction" => match lang {
            "Russian" => "Выберите направление перевода:",
            _ => "Choose a translation direction:",
        },
        "send_slang_text" => match lang {
            "Russian" => "Отправьте текст со сленгом, и я переведу его на обычный язык.",
            _ => "Send me a text with slang and I will translate it into plain language.",
        },
        "send_normal_text" => match lang {
            "Russian" => "Отправьте обычный текст, и я переведу его на сленг.",
            _ => "Send me a plain text and I will translate it into slang.",
        },
        "send_search_query" => match lang {
            "Russian" => "Введите слово или часть слова для поиска по словарю.",
            _ => "Send a word or part of a word to search the dictionary.",
        },
        "cancelled" => match lang {
            "Russian" => "Действие отменено.",
            _ => "Cancelled.",
        },

        // --- Results ---
        "translation_label" => match lang {
            "Russian" => "*Перевод:*",
            _ => "*Translation:*",
        },
        "explanation_label" => match lang {
            "Russian" => "*Объяснение:*",
            _ => "*Explanation:*",
        },
        "no_slang_found" => match lang {
            "Russian" => "Сленговые слова не найдены в словаре.",
            _ => "No slang words found in the dictionary.",
        },
        "random_header" => match lang {
            "Russian" => "Случайное слово",
            _ => "Random word",
        },
        "search_header" => match lang {
            "Russian" => "Результаты поиска",
            _ => "Search results",
        },
        "history_header" => match lang {
            "Russian" => "История поиска",
            _ => "Search history",
        },
        "stats_header" => match lang {
            "Russian" => "Статистика словаря",
            _ => "Dictionary stats",
        },
        "words_label" => match lang {
            "Russian" => "Слов в словаре:",
            _ => "Words in dictionary:",
        },
        "file_size_label" => match lang {
            "Russian" => "Размер файла:",
            _ => "File size:",
        },

        // --- Fallbacks ---
        "dictionary_empty" => match lang {
            "Russian" => "Словарь пока пуст.",
            _ => "The dictionary is empty for now.",
        },
        "no_results" => match lang {
            "Russian" => "Ничего не найдено.",
            _ => "Nothing found.",
        },
        "no_history" => match lang {
            "Russian" => "История пуста.",
            _ => "Your history is empty.",
        },
        "history_item_missing" => match lang {
            "Russian" => "Эта запись больше недоступна.",
            _ => "That entry is no longer available.",
        },
        "unknown_action" => match lang {
            "Russian" => "Неизвестное действие.",
            _ => "Unknown action.",
        },

        // --- Admin ---
        "admin_only" => match lang {
            "Russian" => "Эта команда доступна только администратору.",
            _ => "This command is for administrators only.",
        },
        "add_usage" => match lang {
            "Russian" => "Использование: /add сленг | обычное | объяснение",
            _ => "Usage: /add slang | normal | explanation",
        },
        "add_failed" => match lang {
            "Russian" => "Не удалось сохранить словарь. Слово добавлено только в память.",
            _ => "Could not save the dictionary. The word was added in memory only.",
        },

        // --- Help ---
        "help_intro" => match lang {
            "Russian" => "Я перевожу молодежный сленг на обычный язык и объясняю значения.",
            _ => "I translate slang into plain language and explain what it means.",
        },
        "help_commands" => match lang {
            "Russian" => "/start — главное меню\n\
                 /random — случайное слово\n\
                 /search <запрос> — поиск по словарю\n\
                 /stats — статистика словаря\n\
                 /cancel — отменить действие\n\
                 /help — эта справка",
            _ => "/start — main menu\n\
                 /random — random slang word\n\
                 /search <query> — search the dictionary\n\
                 /stats — dictionary statistics\n\
                 /cancel — cancel the current action\n\
                 /help — this help",
        },
        _ => "???",
    }
}
