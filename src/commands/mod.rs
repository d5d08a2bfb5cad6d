//! Built-in bot commands — instant responses straight from the dictionary.

mod dictionary;

pub(crate) use dictionary::{handle_help, handle_random, handle_search};


use crate::gateway::conversation::ConversationState;
use crate::{i18n, keyboards};
use slang_core::message::Keyboard;
use slang_dictionary::Dictionary;

/// Grouped context for command execution.
pub struct CommandContext<'a> {
    pub dictionary: &'a Dictionary,
    /// Full message text, command included.
    pub text: &'a str,
    pub is_admin: bool,
    pub lang: &'a str,
    pub bot_name: &'a str,
}

/// Text to send back, with an optional inline keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_keyboard(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(keyboard),
        }
    }
}

/// A command's reply and, if it changes one, the conversation's next state.
#[derive(Debug)]
pub struct Outcome {
    pub reply: Reply,
    pub state: Option<ConversationState>,
}

impl From<Reply> for Outcome {
    fn from(reply: Reply) -> Self {
        Self { reply, state: None }
    }
}

/// Known bot commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Menu,
    Help,
    Random,
    Search,
    Stats,
    Cancel,
    Add,
}

impl Command {
    /// Parse a command from message text. Returns `None` for unknown `/` prefixes
    /// (which are handled as ordinary text).
    pub fn parse(text: &str) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        // Strip @botname suffix (e.g. "/help@slang_bot" → "/help").
        let cmd = first.split('@').next().unwrap_or(first);
        match cmd {
            "/start" => Some(Self::Start),
            "/menu" => Some(Self::Menu),
            "/help" => Some(Self::Help),
            "/random" => Some(Self::Random),
            "/search" => Some(Self::Search),
            "/stats" => Some(Self::Stats),
            "/cancel" => Some(Self::Cancel),
            "/add" => Some(Self::Add),
            _ => None,
        }
    }
}

/// Everything after the command word, trimmed.
fn command_args(text: &str) -> &str {
    let text = text.trim_start();
    text.find(char::is_whitespace)
        .map(|i| text[i..].trim())
        .unwrap_or("")
}

/// Handle a command and return its outcome.
pub fn handle(cmd: Command, ctx: &CommandContext<'_>) -> Outcome {
    let lang = ctx.lang;
    match cmd {
        Command::Start => Outcome {
            reply: Reply::with_keyboard(
                i18n::welcome(lang, ctx.bot_name),
                keyboards::main_menu(lang),
            ),
            state: Some(ConversationState::Idle),
        },
        Command::Menu => Outcome {
            reply: Reply::with_keyboard(i18n::t("main_menu", lang), keyboards::main_menu(lang)),
            state: Some(ConversationState::Idle),
        },
        Command::Cancel => Outcome {
            reply: Reply::with_keyboard(i18n::t("cancelled", lang), keyboards::main_menu(lang)),
            state: Some(ConversationState::Idle),
        },
        Command::Help => dictionary::handle_help(ctx.dictionary, lang).into(),
        Command::Random => dictionary::handle_random(ctx.dictionary, lang).into(),
        Command::Stats => dictionary::handle_stats(ctx.dictionary, lang).into(),
        Command::Search => {
            let query = command_args(ctx.text);
            if query.is_empty() {
                Outcome {
                    reply: Reply::with_keyboard(
                        i18n::t("send_search_query", lang),
                        keyboards::cancel(lang),
                    ),
                    state: Some(ConversationState::WaitingForSearch),
                }
            } else {
                dictionary::handle_search(ctx.dictionary, query, lang).into()
            }
        }
        Command::Add => {
            dictionary::handle_add(ctx.dictionary, command_args(ctx.text), ctx.is_admin, lang)
                .into()
        }
    }
}
