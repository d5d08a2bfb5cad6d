//! Message sending: text with inline keyboards, callback answers, and setup calls.

use super::TelegramChannel;
use crate::utils::split_message;
use slang_core::{error::SlangError, message::Keyboard};
use tracing::{info, warn};

/// Render a keyboard as a Telegram `reply_markup` object.
pub(crate) fn reply_markup(keyboard: &Keyboard) -> serde_json::Value {
    let rows: Vec<Vec<serde_json::Value>> = keyboard
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|b| {
                    serde_json::json!({
                        "text": b.text,
                        "callback_data": b.callback_data,
                    })
                })
                .collect()
        })
        .collect();
    serde_json::json!({ "inline_keyboard": rows })
}

impl TelegramChannel {
    /// Send a text message to a specific chat.
    ///
    /// Long texts are split; the keyboard is attached to the last chunk.
    pub(crate) async fn send_text(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: Option<&Keyboard>,
    ) -> Result<(), SlangError> {
        let chunks = split_message(text, self.max_message_length);
        let last = chunks.len().saturating_sub(1);

        for (idx, chunk) in chunks.into_iter().enumerate() {
            let markup = keyboard.filter(|_| idx == last).map(reply_markup);
            let url = format!("{}/sendMessage", self.base_url);
            let mut body = serde_json::json!({
                "chat_id": chat_id,
                "text": chunk,
                "parse_mode": "Markdown",
            });
            if let Some(ref m) = markup {
                body["reply_markup"] = m.clone();
            }

            let resp = self
                .client
                .post(&url)
                .json(&body)
                .send()
                .await
                .map_err(|e| SlangError::Channel(format!("telegram send failed: {e}")))?;

            let status = resp.status();
            if !status.is_success() {
                let error_text = resp.text().await.unwrap_or_default();
                if error_text.contains("can't parse entities") {
                    warn!("Markdown parse failed, retrying as plain text: {error_text}");
                    let mut plain_body = serde_json::json!({
                        "chat_id": chat_id,
                        "text": chunk,
                    });
                    if let Some(m) = markup {
                        plain_body["reply_markup"] = m;
                    }
                    let plain_resp = self
                        .client
                        .post(&url)
                        .json(&plain_body)
                        .send()
                        .await
                        .map_err(|e| {
                            SlangError::Channel(format!("telegram send (plain) failed: {e}"))
                        })?;
                    if !plain_resp.status().is_success() {
                        let plain_err = plain_resp.text().await.unwrap_or_default();
                        return Err(SlangError::Channel(format!(
                            "telegram send (plain fallback) failed: {plain_err}"
                        )));
                    }
                } else {
                    return Err(SlangError::Channel(format!(
                        "telegram send failed ({status}): {error_text}"
                    )));
                }
            }
        }

        Ok(())
    }

    /// Acknowledge an inline-button press.
    pub(crate) async fn answer_callback_query(&self, callback_id: &str) -> Result<(), SlangError> {
        let url = format!("{}/answerCallbackQuery", self.base_url);
        let body = serde_json::json!({ "callback_query_id": callback_id });

        self.client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| SlangError::Channel(format!("telegram answerCallbackQuery failed: {e}")))?;

        Ok(())
    }

    /// Discard updates queued while the bot was offline.
    /// Best-effort: logs failures but does not propagate errors.
    pub(crate) async fn drop_pending_updates(&self) {
        let url = format!("{}/deleteWebhook", self.base_url);
        let body = serde_json::json!({ "drop_pending_updates": true });
        match self.client.post(&url).json(&body).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("dropped pending Telegram updates");
            }
            Ok(resp) => {
                let body = resp.text().await.unwrap_or_default();
                warn!("failed to drop pending Telegram updates: {body}");
            }
            Err(e) => {
                warn!("failed to drop pending Telegram updates: {e}");
            }
        }
    }

    /// Register bot commands with Telegram so users see an autocomplete menu.
    /// Best-effort: logs failures but does not propagate errors.
    pub(crate) async fn register_commands(&self) {
        let commands = serde_json::json!({
            "commands": [
                { "command": "start", "description": "Main menu" },
                { "command": "help", "description": "How to use the bot" },
                { "command": "random", "description": "Random slang word" },
                { "command": "search", "description": "Search the dictionary" },
                { "command": "stats", "description": "Dictionary statistics" },
                { "command": "cancel", "description": "Cancel the current action" },
            ]
        });

        let url = format!("{}/setMyCommands", self.base_url);
        match self.client.post(&url).json(&commands).send().await {
            Ok(resp) if resp.status().is_success() => {
                info!("registered Telegram bot commands");
            }
            Ok(resp) => {
                let body = resp.text().await.unwrap_or_default();
                warn!("failed to register Telegram bot commands: {body}");
            }
            Err(e) => {
                warn!("failed to register Telegram bot commands: {e}");
            }
        }
    }
}
