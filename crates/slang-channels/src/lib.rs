//! # slang-channels
//!
//! Messaging platform integrations for slangbot.

pub mod telegram;
pub(crate) mod utils;
