use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An incoming message from a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: Uuid,
    /// Channel name (e.g. "telegram").
    pub channel: String,
    /// Platform-specific user ID.
    pub sender_id: String,
    /// Human-readable sender name.
    pub sender_name: Option<String>,
    /// Message text content. Empty for button presses.
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Platform-specific target for routing the response (e.g. Telegram chat_id).
    #[serde(default)]
    pub reply_target: Option<String>,
    /// Whether this message comes from a group chat.
    #[serde(default)]
    pub is_group: bool,
    /// Set when the update is an inline-button press rather than typed text.
    #[serde(default)]
    pub callback: Option<CallbackQuery>,
}

impl IncomingMessage {
    /// Key identifying the conversation this message belongs to.
    pub fn conversation_key(&self) -> String {
        format!("{}:{}", self.channel, self.sender_id)
    }
}

/// An inline-button press.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackQuery {
    /// Platform-specific query id, used to acknowledge the press.
    pub id: String,
    /// The `callback_data` of the pressed button.
    pub data: String,
}

/// An outgoing message to send back through a channel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub text: String,
    /// Platform-specific target for routing (e.g. Telegram chat_id).
    #[serde(default)]
    pub reply_target: Option<String>,
    /// Inline keyboard attached below the message.
    #[serde(default)]
    pub keyboard: Option<Keyboard>,
}

impl OutgoingMessage {
    pub fn new(text: impl Into<String>, reply_target: Option<String>) -> Self {
        Self {
            text: text.into(),
            reply_target,
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// Inline keyboard: rows of buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

impl Keyboard {
    /// Build a keyboard with one button per row.
    pub fn single_column(buttons: Vec<Button>) -> Self {
        Self {
            rows: buttons.into_iter().map(|b| vec![b]).collect(),
        }
    }
}

/// A single inline button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    pub callback_data: String,
}

impl Button {
    pub fn new(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: callback_data.into(),
        }
    }
}
