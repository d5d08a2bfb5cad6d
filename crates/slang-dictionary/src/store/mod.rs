//! JSON-backed slang dictionary.
//!
//! Split into focused submodules:
//! - `translate` — token-wise slang → normal and phrase-wise normal → slang
//! - `search` — substring search and random sampling

mod search;
mod translate;


pub use translate::{Translation, NO_SLANG_FOUND};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use slang_core::error::SlangError;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{error, info, warn};

/// At most this many words are returned by [`Dictionary::search`].
pub const SEARCH_LIMIT: usize = 10;

/// The value stored under a slang key in the backing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    /// Canonical (plain-language) form.
    pub normal: String,
    pub explanation: String,
}

/// A slang key together with its entry, as returned by search and random.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlangWord {
    pub slang: String,
    pub normal: String,
    pub explanation: String,
}

impl SlangWord {
    fn new(slang: &str, entry: DictionaryEntry) -> Self {
        Self {
            slang: slang.to_string(),
            normal: entry.normal,
            explanation: entry.explanation,
        }
    }
}

/// Dictionary statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Words currently in memory, including runtime additions.
    pub total_words: usize,
    /// Size of the backing file right now; 0 when it does not exist.
    pub file_size_bytes: u64,
}

struct Inner {
    path: PathBuf,
    /// Raw values keyed by lowercase slang, in file order. Values are only
    /// decoded into [`DictionaryEntry`] when used.
    entries: Map<String, Value>,
}

/// Shared handle to the slang dictionary.
///
/// Cloning is cheap; all clones see the same map. Reads take a shared lock,
/// `add_word` holds the exclusive lock across the update and the file rewrite.
#[derive(Clone)]
pub struct Dictionary {
    inner: Arc<RwLock<Inner>>,
}

impl Dictionary {
    /// Load the dictionary from `path`.
    ///
    /// A missing or malformed file yields an empty dictionary; the bot still starts.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                error!("dictionary {}: {e}; starting empty", path.display());
                Map::new()
            }
        };
        info!(
            "slang dictionary loaded from {} | words: {}",
            path.display(),
            entries.len()
        );
        Self {
            inner: Arc::new(RwLock::new(Inner { path, entries })),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> PathBuf {
        self.read().path.clone()
    }

    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }

    /// Word count and current backing-file size.
    pub fn stats(&self) -> Stats {
        let inner = self.read();
        let file_size_bytes = std::fs::metadata(&inner.path)
            .map(|m| m.len())
            .unwrap_or(0);
        Stats {
            total_words: inner.entries.len(),
            file_size_bytes,
        }
    }

    /// Insert or overwrite a word and rewrite the backing file.
    ///
    /// Returns `false` if the key is empty or the file could not be written.
    /// On a write failure the word stays in memory.
    pub fn add_word(&self, slang: &str, normal: &str, explanation: &str) -> bool {
        let key = slang.trim().to_lowercase();
        if key.is_empty() {
            warn!("refusing to add slang word with empty key");
            return false;
        }

        let entry = DictionaryEntry {
            normal: normal.to_string(),
            explanation: explanation.to_string(),
        };

        let mut inner = self.write();
        let value = match serde_json::to_value(&entry) {
            Ok(v) => v,
            Err(e) => {
                error!("failed to encode slang word '{key}': {e}");
                return false;
            }
        };
        inner.entries.insert(key.clone(), value);

        match persist(&inner.path, &inner.entries) {
            Ok(()) => {
                info!("added slang word: {key}");
                true
            }
            Err(e) => {
                error!("failed to save slang word '{key}' to {}: {e}", inner.path.display());
                false
            }
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Read and normalize the backing file: keys lowercased, empty keys dropped.
fn read_entries(path: &Path) -> Result<Map<String, Value>, SlangError> {
    let content = std::fs::read_to_string(path)?;
    let root: Value = serde_json::from_str(&content)?;
    let Value::Object(raw) = root else {
        return Err(SlangError::Dictionary(
            "top-level JSON value is not an object".into(),
        ));
    };

    let mut entries = Map::new();
    for (key, value) in raw {
        let normalized = key.trim().to_lowercase();
        if normalized.is_empty() {
            warn!("skipping dictionary entry with empty key");
            continue;
        }
        if entries.contains_key(&normalized) {
            warn!("duplicate dictionary key '{normalized}' (case-insensitive), keeping the last");
        }
        entries.insert(normalized, value);
    }
    Ok(entries)
}

/// Rewrite the whole file: pretty JSON, two-space indent, non-ASCII unescaped.
fn persist(path: &Path, entries: &Map<String, Value>) -> Result<(), SlangError> {
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Decode a raw value, logging and discarding entries missing their fields.
fn decode(key: &str, value: &Value) -> Option<DictionaryEntry> {
    match DictionaryEntry::deserialize(value) {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!("malformed dictionary entry '{key}': {e}");
            None
        }
    }
}
