//! Per-chat conversation state: what the bot is waiting for, plus recent translations.

use std::collections::VecDeque;

/// Translation direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    SlangToNormal,
    NormalToSlang,
}

/// What the next free-text message means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConversationState {
    /// Free text is translated slang → normal.
    #[default]
    Idle,
    /// Free text is translated in the given direction.
    WaitingForText(Direction),
    /// Free text is a dictionary search query.
    WaitingForSearch,
}

/// One past translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub original: String,
    pub translation: String,
    pub explanation: String,
    pub direction: Direction,
}

/// State kept for a single chat. Lives in memory only.
#[derive(Debug, Default)]
pub struct Conversation {
    pub state: ConversationState,
    /// Direction of the last translation, reused by "translate again".
    pub last_direction: Direction,
    /// Newest first.
    history: VecDeque<HistoryEntry>,
}

impl Conversation {
    /// Record a translation, dropping the oldest beyond `limit`.
    pub fn record(&mut self, entry: HistoryEntry, limit: usize) {
        self.last_direction = entry.direction;
        if limit == 0 {
            return;
        }
        self.history.push_front(entry);
        self.history.truncate(limit);
    }

    /// Recent translations, newest first.
    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    /// The `index`-th newest translation.
    pub fn history_item(&self, index: usize) -> Option<&HistoryEntry> {
        self.history.get(index)
    }

    /// Whether nothing distinguishes this conversation from a fresh one.
    pub fn is_blank(&self) -> bool {
        self.state == ConversationState::Idle
            && self.last_direction == Direction::default()
            && self.history.is_empty()
    }
}
