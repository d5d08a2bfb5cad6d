//! # slang-dictionary
//!
//! The slang dictionary service: an in-memory map from slang term to
//! `(normal, explanation)`, loaded once from a JSON file and rewritten
//! in full whenever a word is added.
//!
//! - `segment` — lossless tokenizer shared by both translation directions
//! - `store` — the [`Dictionary`] handle and its operations

pub mod segment;
mod store;

pub use store::{
    Dictionary, DictionaryEntry, SlangWord, Stats, Translation, NO_SLANG_FOUND, SEARCH_LIMIT,
};
