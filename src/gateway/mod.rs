//! Gateway — the main event loop connecting channels and the slang dictionary.
//!
//! Split into focused submodules:
//! - `conversation` — per-chat state machine and translation history
//! - `callbacks` — inline-button actions

mod callbacks;
pub mod conversation;

#[cfg(test)]
mod tests;

use crate::commands::{self, CommandContext, Reply};
use crate::{i18n, keyboards};
use conversation::{Conversation, ConversationState, Direction, HistoryEntry};
use slang_core::{
    config::{AdminConfig, Config},
    message::{IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use slang_dictionary::Dictionary;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// The central gateway that routes messages between channels and the dictionary.
pub struct Gateway {
    dictionary: Dictionary,
    channels: HashMap<String, Arc<dyn Channel>>,
    admin: AdminConfig,
    bot_name: String,
    lang: String,
    history_limit: usize,
    /// Keyed by [`IncomingMessage::conversation_key`].
    conversations: HashMap<String, Conversation>,
}

impl Gateway {
    /// Create a new gateway.
    pub fn new(
        dictionary: Dictionary,
        channels: HashMap<String, Arc<dyn Channel>>,
        config: &Config,
    ) -> Self {
        Self {
            dictionary,
            channels,
            admin: config.admin.clone(),
            bot_name: config.bot.name.clone(),
            lang: config.bot.language.clone(),
            history_limit: config.limits.history_limit,
            conversations: HashMap::new(),
        }
    }

    /// Run the main event loop.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        info!(
            "slangbot gateway running | words: {} | channels: {} | admins: {}",
            self.dictionary.len(),
            self.channels.keys().cloned().collect::<Vec<_>>().join(", "),
            self.admin.user_ids.len(),
        );

        let (tx, mut rx) = mpsc::channel::<IncomingMessage>(256);

        for (name, channel) in &self.channels {
            let mut channel_rx = channel
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("failed to start channel {name}: {e}"))?;
            let tx = tx.clone();
            let channel_name = name.clone();

            tokio::spawn(async move {
                while let Some(msg) = channel_rx.recv().await {
                    if tx.send(msg).await.is_err() {
                        info!("gateway receiver dropped, stopping {channel_name} forwarder");
                        break;
                    }
                }
            });

            info!("Channel started: {name}");
        }

        drop(tx);

        // Main event loop with graceful shutdown.
        loop {
            tokio::select! {
                maybe = rx.recv() => match maybe {
                    Some(incoming) => self.handle_message(incoming).await,
                    None => {
                        warn!("all channels closed");
                        break;
                    }
                },
                _ = tokio::signal::ctrl_c() => {
                    info!("Received shutdown signal");
                    break;
                }
            }
        }

        self.shutdown().await;
        Ok(())
    }

    async fn shutdown(&self) {
        info!("Shutting down...");
        for (name, channel) in &self.channels {
            if let Err(e) = channel.stop().await {
                warn!("failed to stop channel {name}: {e}");
            }
        }
        info!("Shutdown complete.");
    }

    /// Process one incoming message or button press and send the reply.
    pub(crate) async fn handle_message(&mut self, incoming: IncomingMessage) {
        let preview: String = incoming.text.chars().take(60).collect();
        info!(
            "[{}] {} {}: {}",
            incoming.channel,
            incoming.sender_name.as_deref().unwrap_or("unknown"),
            if incoming.callback.is_some() { "pressed" } else { "says" },
            incoming
                .callback
                .as_ref()
                .map(|cb| cb.data.as_str())
                .unwrap_or(&preview),
        );

        let Some(channel) = self.channels.get(&incoming.channel).cloned() else {
            warn!("message from unknown channel {}", incoming.channel);
            return;
        };

        if let Some(ref cb) = incoming.callback {
            if let Err(e) = channel.answer_callback(&cb.id).await {
                warn!("failed to answer callback {}: {e}", cb.id);
            }
        }

        let reply = self.respond(&incoming);
        let mut msg = OutgoingMessage::new(reply.text, incoming.reply_target.clone());
        if let Some(keyboard) = reply.keyboard {
            msg = msg.with_keyboard(keyboard);
        }

        if let Err(e) = channel.send(msg).await {
            error!("failed to send message: {e}");
        }
    }

    /// Compute the reply for a message, updating conversation state.
    ///
    /// Conversations back in their default state are dropped afterwards, so
    /// only chats with pending input or history stay in memory.
    pub(crate) fn respond(&mut self, incoming: &IncomingMessage) -> Reply {
        let key = incoming.conversation_key();
        let reply = self.route(&key, incoming);
        if self.conversations.get(&key).is_some_and(Conversation::is_blank) {
            self.conversations.remove(&key);
        }
        reply
    }

    fn route(&mut self, key: &str, incoming: &IncomingMessage) -> Reply {
        if let Some(ref cb) = incoming.callback {
            return self.handle_callback(key, &cb.data);
        }

        let text = incoming.text.trim();
        if text.is_empty() {
            return Reply::with_keyboard(
                i18n::t("main_menu", &self.lang),
                keyboards::main_menu(&self.lang),
            );
        }

        if let Some(cmd) = commands::Command::parse(text) {
            let ctx = CommandContext {
                dictionary: &self.dictionary,
                text,
                is_admin: self.admin.is_admin(&incoming.sender_id),
                lang: &self.lang,
                bot_name: &self.bot_name,
            };
            let outcome = commands::handle(cmd, &ctx);
            if let Some(state) = outcome.state {
                self.conversation(key).state = state;
            }
            return outcome.reply;
        }

        let state = std::mem::take(&mut self.conversation(key).state);
        match state {
            ConversationState::WaitingForSearch => {
                commands::handle_search(&self.dictionary, text, &self.lang)
            }
            ConversationState::WaitingForText(direction) => self.translate(key, text, direction),
            ConversationState::Idle => self.translate(key, text, Direction::SlangToNormal),
        }
    }

    /// Translate `text`, record it in the chat's history, and format the result.
    fn translate(&mut self, key: &str, text: &str, direction: Direction) -> Reply {
        let result = match direction {
            Direction::SlangToNormal => self.dictionary.slang_to_normal(text),
            Direction::NormalToSlang => self.dictionary.normal_to_slang(text),
        };
        let explanation = result.explanation_or(i18n::t("no_slang_found", &self.lang));

        let limit = self.history_limit;
        self.conversation(key).record(
            HistoryEntry {
                original: text.to_string(),
                translation: result.text.clone(),
                explanation: explanation.clone(),
                direction,
            },
            limit,
        );

        Reply::with_keyboard(
            i18n::translation_result(&self.lang, &result.text, &explanation),
            keyboards::after_translation(&self.lang),
        )
    }

    fn conversation(&mut self, key: &str) -> &mut Conversation {
        self.conversations.entry(key.to_string()).or_default()
    }
}
