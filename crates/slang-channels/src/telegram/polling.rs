//! Long-polling update loop and Channel trait implementation.

use super::types::{TgResponse, TgUpdate};
use super::TelegramChannel;
use async_trait::async_trait;
use slang_core::{
    error::SlangError,
    message::{CallbackQuery, IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

#[async_trait]
impl Channel for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> Result<mpsc::Receiver<IncomingMessage>, SlangError> {
        self.drop_pending_updates().await;
        self.register_commands().await;

        let (tx, rx) = mpsc::channel(64);
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let allowed_users = self.config.allowed_users.clone();
        let last_update_id = self.last_update_id.clone();

        info!("Telegram channel starting long polling...");

        tokio::spawn(async move {
            let mut backoff_secs: u64 = 1;

            loop {
                let last = last_update_id.lock().await;
                let offset = last.map(|id| id + 1);
                drop(last);

                let mut url = format!("{base_url}/getUpdates?timeout=30");
                if let Some(off) = offset {
                    url.push_str(&format!("&offset={off}"));
                }

                let resp = match client
                    .get(&url)
                    .timeout(std::time::Duration::from_secs(35))
                    .send()
                    .await
                {
                    Ok(r) => r,
                    Err(e) => {
                        error!("telegram poll error (retry in {backoff_secs}s): {e}");
                        tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
                        backoff_secs = (backoff_secs * 2).min(60);
                        continue;
                    }
                };

                let body: TgResponse<Vec<TgUpdate>> = match resp.json().await {
                    Ok(b) => b,
                    Err(e) => {
                        error!("telegram parse error (retry in {backoff_secs}s): {e}");
                        tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
                        backoff_secs = (backoff_secs * 2).min(60);
                        continue;
                    }
                };

                if !body.ok {
                    error!(
                        "telegram API error (retry in {backoff_secs}s): {}",
                        body.description.unwrap_or_default()
                    );
                    tokio::time::sleep(std::time::Duration::from_secs(backoff_secs)).await;
                    backoff_secs = (backoff_secs * 2).min(60);
                    continue;
                }

                // Successful poll -- reset backoff.
                backoff_secs = 1;

                let updates = body.result.unwrap_or_default();

                if let Some(last_update) = updates.last() {
                    *last_update_id.lock().await = Some(last_update.update_id);
                }

                for update in updates {
                    let Some(incoming) = to_incoming(update, &allowed_users) else {
                        continue;
                    };
                    if tx.send(incoming).await.is_err() {
                        info!("telegram channel receiver dropped, stopping poll");
                        return;
                    }
                }
            }
        });

        Ok(rx)
    }

    async fn send(&self, message: OutgoingMessage) -> Result<(), SlangError> {
        let chat_id_str = message
            .reply_target
            .as_deref()
            .ok_or_else(|| SlangError::Channel("no reply_target on outgoing message".into()))?;

        let chat_id: i64 = chat_id_str.parse().map_err(|e| {
            SlangError::Channel(format!("invalid telegram chat_id '{chat_id_str}': {e}"))
        })?;

        self.send_text(chat_id, &message.text, message.keyboard.as_ref())
            .await
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), SlangError> {
        self.answer_callback_query(callback_id).await
    }

    async fn stop(&self) -> Result<(), SlangError> {
        info!("Telegram channel stopped");
        Ok(())
    }
}

/// Convert a raw update into an [`IncomingMessage`].
///
/// Returns `None` for updates the bot ignores: non-text messages, messages
/// without a sender, and senders outside `allowed_users` (empty = allow all).
pub(crate) fn to_incoming(update: TgUpdate, allowed_users: &[i64]) -> Option<IncomingMessage> {
    let (user, chat, text, callback) = if let Some(cq) = update.callback_query {
        let Some(msg) = cq.message else {
            debug!("telegram: callback {} without message, skipping", cq.id);
            return None;
        };
        let callback = CallbackQuery {
            id: cq.id,
            data: cq.data.unwrap_or_default(),
        };
        (cq.from, msg.chat, String::new(), Some(callback))
    } else {
        let msg = update.message?;
        let text = msg.text?;
        let user = msg.from?;
        (user, msg.chat, text, None)
    };

    // Auth check.
    if !allowed_users.is_empty() && !allowed_users.contains(&user.id) {
        warn!("ignoring update from unauthorized user {}", user.id);
        return None;
    }

    Some(IncomingMessage {
        id: Uuid::new_v4(),
        channel: "telegram".to_string(),
        sender_id: user.id.to_string(),
        sender_name: Some(user.display_name()),
        text,
        timestamp: chrono::Utc::now(),
        reply_target: Some(chat.id.to_string()),
        is_group: chat.is_group(),
        callback,
    })
}
