//! Inline-button handling.

use super::conversation::{ConversationState, Direction};
use super::Gateway;
use crate::commands::{self, Reply};
use crate::i18n::{self, t};
use crate::keyboards::{self, Action};
use tracing::warn;

impl Gateway {
    /// React to a pressed inline button.
    pub(super) fn handle_callback(&mut self, key: &str, data: &str) -> Reply {
        let Some(action) = Action::parse(data) else {
            warn!("unknown callback data: {data}");
            return Reply::with_keyboard(
                t("unknown_action", &self.lang),
                keyboards::main_menu(&self.lang),
            );
        };

        match action {
            Action::TranslationMenu => Reply::with_keyboard(
                t("choose_direction", &self.lang),
                keyboards::translation_type(&self.lang),
            ),
            Action::Translate(direction) => self.await_text(key, direction),
            Action::TranslateAgain => {
                let direction = self.conversation(key).last_direction;
                self.await_text(key, direction)
            }
            Action::HistoryMenu => {
                let lang = self.lang.as_str();
                match self.conversations.get(key) {
                    Some(conv) if conv.history().next().is_some() => Reply::with_keyboard(
                        t("history_header", lang),
                        keyboards::history(conv.history(), lang),
                    ),
                    _ => Reply::with_keyboard(t("no_history", lang), keyboards::back_to_main(lang)),
                }
            }
            Action::HistoryItem(index) => {
                let lang = self.lang.as_str();
                match self
                    .conversations
                    .get(key)
                    .and_then(|conv| conv.history_item(index))
                {
                    Some(item) => Reply::with_keyboard(
                        i18n::translation_result(lang, &item.translation, &item.explanation),
                        keyboards::after_translation(lang),
                    ),
                    None => Reply::with_keyboard(
                        t("history_item_missing", lang),
                        keyboards::back_to_main(lang),
                    ),
                }
            }
            Action::RandomWord => commands::handle_random(&self.dictionary, &self.lang),
            Action::SearchMenu => {
                self.conversation(key).state = ConversationState::WaitingForSearch;
                Reply::with_keyboard(
                    t("send_search_query", &self.lang),
                    keyboards::cancel(&self.lang),
                )
            }
            Action::HelpMenu => commands::handle_help(&self.dictionary, &self.lang),
            Action::BackToMain | Action::Cancel => {
                self.conversation(key).state = ConversationState::Idle;
                let prompt = if action == Action::Cancel {
                    "cancelled"
                } else {
                    "main_menu"
                };
                Reply::with_keyboard(t(prompt, &self.lang), keyboards::main_menu(&self.lang))
            }
        }
    }

    fn await_text(&mut self, key: &str, direction: Direction) -> Reply {
        self.conversation(key).state = ConversationState::WaitingForText(direction);
        let prompt = match direction {
            Direction::SlangToNormal => "send_slang_text",
            Direction::NormalToSlang => "send_normal_text",
        };
        Reply::with_keyboard(t(prompt, &self.lang), keyboards::cancel(&self.lang))
    }
}
