//! Telegram Bot API channel.
//!
//! Uses long polling via `getUpdates` (messages and inline-button presses)
//! and `sendMessage` with inline keyboards for responses.
//! Docs: <https://core.telegram.org/bots/api>

mod polling;
pub(crate) mod send;
pub(crate) mod types;


use slang_core::config::TelegramConfig;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Telegram channel using the Bot API with long polling.
pub struct TelegramChannel {
    config: TelegramConfig,
    client: reqwest::Client,
    base_url: String,
    /// Longest text sent in a single `sendMessage` call.
    max_message_length: usize,
    /// Tracks the last update_id to avoid reprocessing.
    last_update_id: Arc<Mutex<Option<i64>>>,
}

impl TelegramChannel {
    /// Create a new Telegram channel from config.
    pub fn new(config: TelegramConfig, max_message_length: usize) -> Self {
        let base_url = format!("https://api.telegram.org/bot{}", config.bot_token);
        Self {
            config,
            client: reqwest::Client::new(),
            base_url,
            max_message_length,
            last_update_id: Arc::new(Mutex::new(None)),
        }
    }
}
