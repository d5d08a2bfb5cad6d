//! Inline keyboards and the callback actions their buttons carry.

use crate::gateway::conversation::{Direction, HistoryEntry};
use crate::i18n::{self, t};
use slang_core::message::{Button, Keyboard};

/// Most recent history items offered as buttons.
pub const HISTORY_BUTTONS: usize = 10;

const HISTORY_ITEM_PREFIX: &str = "history_item_";

/// What an inline button asks the bot to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TranslationMenu,
    HistoryMenu,
    RandomWord,
    SearchMenu,
    HelpMenu,
    Translate(Direction),
    TranslateAgain,
    BackToMain,
    HistoryItem(usize),
    Cancel,
}

impl Action {
    /// Parse a button's `callback_data`.
    pub fn parse(data: &str) -> Option<Self> {
        let action = match data {
            "translation_menu" => Self::TranslationMenu,
            "history_menu" => Self::HistoryMenu,
            "random_word" => Self::RandomWord,
            "search_menu" => Self::SearchMenu,
            "help_menu" => Self::HelpMenu,
            "translate_slang_to_normal" => Self::Translate(Direction::SlangToNormal),
            "translate_normal_to_slang" => Self::Translate(Direction::NormalToSlang),
            "translate_again" => Self::TranslateAgain,
            "back_to_main" => Self::BackToMain,
            "cancel" => Self::Cancel,
            other => {
                let index = other.strip_prefix(HISTORY_ITEM_PREFIX)?.parse().ok()?;
                Self::HistoryItem(index)
            }
        };
        Some(action)
    }

    /// The `callback_data` string for this action.
    pub fn data(&self) -> String {
        match self {
            Self::TranslationMenu => "translation_menu".into(),
            Self::HistoryMenu => "history_menu".into(),
            Self::RandomWord => "random_word".into(),
            Self::SearchMenu => "search_menu".into(),
            Self::HelpMenu => "help_menu".into(),
            Self::Translate(Direction::SlangToNormal) => "translate_slang_to_normal".into(),
            Self::Translate(Direction::NormalToSlang) => "translate_normal_to_slang".into(),
            Self::TranslateAgain => "translate_again".into(),
            Self::BackToMain => "back_to_main".into(),
            Self::HistoryItem(i) => format!("{HISTORY_ITEM_PREFIX}{i}"),
            Self::Cancel => "cancel".into(),
        }
    }
}

fn button(label_key: &str, action: Action, lang: &str) -> Button {
    Button::new(t(label_key, lang), action.data())
}

/// Main menu.
pub fn main_menu(lang: &str) -> Keyboard {
    Keyboard::single_column(vec![
        button("btn_translate", Action::TranslationMenu, lang),
        button("btn_history", Action::HistoryMenu, lang),
        button("btn_random", Action::RandomWord, lang),
        button("btn_search", Action::SearchMenu, lang),
        button("btn_help", Action::HelpMenu, lang),
    ])
}

/// Translation direction picker.
pub fn translation_type(lang: &str) -> Keyboard {
    Keyboard::single_column(vec![
        button(
            "btn_slang_to_normal",
            Action::Translate(Direction::SlangToNormal),
            lang,
        ),
        button(
            "btn_normal_to_slang",
            Action::Translate(Direction::NormalToSlang),
            lang,
        ),
        button("btn_back", Action::BackToMain, lang),
    ])
}

/// Shown under a translation result.
pub fn after_translation(lang: &str) -> Keyboard {
    Keyboard::single_column(vec![
        button("btn_translate_again", Action::TranslateAgain, lang),
        button("btn_main_menu", Action::BackToMain, lang),
    ])
}

/// One button per recent history item (newest first), then "back".
pub fn history<'a>(items: impl Iterator<Item = &'a HistoryEntry>, lang: &str) -> Keyboard {
    let mut buttons: Vec<Button> = items
        .take(HISTORY_BUTTONS)
        .enumerate()
        .map(|(i, item)| {
            Button::new(
                i18n::history_label(i, &item.original),
                Action::HistoryItem(i).data(),
            )
        })
        .collect();
    buttons.push(button("btn_back", Action::BackToMain, lang));
    Keyboard::single_column(buttons)
}

/// Single "cancel" button, shown while waiting for input.
pub fn cancel(lang: &str) -> Keyboard {
    Keyboard::single_column(vec![button("btn_cancel", Action::Cancel, lang)])
}

/// Single "main menu" button.
pub fn back_to_main(lang: &str) -> Keyboard {
    Keyboard::single_column(vec![button("btn_main_menu", Action::BackToMain, lang)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_round_trip_for_every_button() {
        let keyboards = [
            main_menu("English"),
            translation_type("English"),
            after_translation("English"),
            cancel("English"),
            back_to_main("English"),
        ];
        for kb in &keyboards {
            for b in kb.rows.iter().flatten() {
                let action = Action::parse(&b.callback_data)
                    .unwrap_or_else(|| panic!("unparseable {}", b.callback_data));
                assert_eq!(action.data(), b.callback_data);
            }
        }
    }

    #[test]
    fn test_parse_history_item() {
        assert_eq!(Action::parse("history_item_3"), Some(Action::HistoryItem(3)));
        assert_eq!(Action::parse("history_item_x"), None);
        assert_eq!(Action::parse("history_item_"), None);
        assert_eq!(Action::parse("bogus"), None);
    }

    #[test]
    fn test_main_menu_layout() {
        let kb = main_menu("Russian");
        assert_eq!(kb.rows.len(), 5);
        assert!(kb.rows.iter().all(|r| r.len() == 1));
        assert_eq!(kb.rows[0][0].text, "Перевод текста");
        assert_eq!(kb.rows[0][0].callback_data, "translation_menu");
        assert_eq!(kb.rows[4][0].callback_data, "help_menu");
    }

    #[test]
    fn test_history_keyboard_caps_items() {
        let entries: Vec<HistoryEntry> = (0..15)
            .map(|i| HistoryEntry {
                original: format!("text {i}"),
                translation: String::new(),
                explanation: String::new(),
                direction: Direction::SlangToNormal,
            })
            .collect();
        let kb = history(entries.iter(), "English");
        assert_eq!(kb.rows.len(), HISTORY_BUTTONS + 1);
        assert_eq!(kb.rows[0][0].text, "1. text 0...");
        assert_eq!(kb.rows[0][0].callback_data, "history_item_0");
        assert_eq!(kb.rows[HISTORY_BUTTONS][0].callback_data, "back_to_main");
    }
}
