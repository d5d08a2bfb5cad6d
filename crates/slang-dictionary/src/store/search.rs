//! Substring search and random sampling.

use super::{decode, Dictionary, SlangWord, SEARCH_LIMIT};
use rand::seq::IteratorRandom;

impl Dictionary {
    /// Case-insensitive substring search over slang, normal form, and explanation.
    ///
    /// Returns the first [`SEARCH_LIMIT`] matches in dictionary order. Keys are
    /// unique in the map, so each word appears at most once.
    pub fn search(&self, query: &str) -> Vec<SlangWord> {
        let query = query.trim().to_lowercase();
        let inner = self.read();

        inner
            .entries
            .iter()
            .filter_map(|(slang, value)| {
                let entry = decode(slang, value)?;
                let hit = slang.to_lowercase().contains(&query)
                    || entry.normal.to_lowercase().contains(&query)
                    || entry.explanation.to_lowercase().contains(&query);
                hit.then(|| SlangWord::new(slang, entry))
            })
            .take(SEARCH_LIMIT)
            .collect()
    }

    /// A uniformly random word, or `None` when the dictionary is empty.
    ///
    /// A malformed pick also yields `None` for this call.
    pub fn random_entry(&self) -> Option<SlangWord> {
        let inner = self.read();
        let (slang, value) = inner.entries.iter().choose(&mut rand::thread_rng())?;
        decode(slang, value).map(|entry| SlangWord::new(slang, entry))
    }
}
