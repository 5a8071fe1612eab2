//! Concurrency-safe twin indexes over loaded synsets.

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::thesaurus::synset::Synset;

/// A synset shared between the id and word indexes.
pub type SharedSynset = Arc<RwLock<Synset>>;

/// The id→synset and (case-insensitive) word→synset indexes.
///
/// Safe for concurrent readers during and after a single writer's load pass.
/// These indexes are the only valid lookup paths: after a merge, several ids
/// and words may alias one synset object.
#[derive(Debug, Default)]
pub struct SynsetIndex {
    by_id: RwLock<AHashMap<u32, SharedSynset>>,
    by_word: RwLock<AHashMap<String, SharedSynset>>,
}

impl SynsetIndex {
    /// Create empty indexes.
    pub fn new() -> SynsetIndex {
        SynsetIndex::default()
    }

    /// Insert a parsed synset, merging when a member word is already mapped
    /// to a different synset.
    ///
    /// The source format repeats related information across file regions, so
    /// a colliding word means the two synsets describe the same entry: their
    /// word and relation sets are unioned (never overwritten) and both ids
    /// alias the merged synset. This is a deliberate design choice, not an
    /// incidental one.
    pub fn insert(&self, synset: Synset) {
        let mut by_id = self.by_id.write();
        let mut by_word = self.by_word.write();

        let target: Option<SharedSynset> = by_id.get(&synset.id).cloned().or_else(|| {
            synset
                .words
                .iter()
                .find_map(|word| by_word.get(word).cloned())
        });

        match target {
            Some(existing) => {
                existing.write().merge(&synset);
                let words: Vec<String> = existing.read().words.iter().cloned().collect();
                by_id.insert(synset.id, existing.clone());
                for word in words {
                    by_word.insert(word, existing.clone());
                }
            }
            None => {
                let words: Vec<String> = synset.words.iter().cloned().collect();
                let shared: SharedSynset = Arc::new(RwLock::new(synset));
                by_id.insert(shared.read().id, shared.clone());
                for word in words {
                    by_word.insert(word, shared.clone());
                }
            }
        }
    }

    /// Look up a synset by id.
    pub fn by_id(&self, id: u32) -> Option<SharedSynset> {
        self.by_id.read().get(&id).cloned()
    }

    /// Look up a synset containing a (lowercase) word-form.
    pub fn by_word(&self, word: &str) -> Option<SharedSynset> {
        self.by_word.read().get(word).cloned()
    }

    /// Linear scan over all synsets for a word-form missing from the word
    /// index. Only used when a search term was not actually a dictionary
    /// entry.
    pub fn scan_for_word(&self, word: &str) -> Option<SharedSynset> {
        self.by_id
            .read()
            .values()
            .find(|synset| synset.read().words.contains(word))
            .cloned()
    }

    /// Number of distinct synset ids indexed.
    pub fn len(&self) -> usize {
        self.by_id.read().len()
    }

    /// True when nothing has been indexed.
    pub fn is_empty(&self) -> bool {
        self.by_id.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thesaurus::synset::{RelationKind, SynsetCategory};

    fn synset(id: u32, words: &[&str], relations: &[(RelationKind, u32)]) -> Synset {
        let mut synset = Synset::new(id, SynsetCategory::Verb(29));
        synset.words.extend(words.iter().map(|w| w.to_string()));
        synset.relations.extend(relations.iter().copied());
        synset
    }

    #[test]
    fn test_insert_and_lookup() {
        let index = SynsetIndex::new();
        index.insert(synset(1, &["walk", "stroll"], &[]));
        assert!(index.by_id(1).is_some());
        assert!(index.by_word("stroll").is_some());
        assert!(index.by_word("run").is_none());
    }

    #[test]
    fn test_word_collision_merges_instead_of_overwriting() {
        let index = SynsetIndex::new();
        index.insert(synset(1, &["walk"], &[(RelationKind::Hypernym, 9)]));
        index.insert(synset(2, &["walk", "amble"], &[(RelationKind::AlsoSee, 7)]));
        // Both ids now alias one merged synset.
        let via_first = index.by_id(1).unwrap();
        let via_second = index.by_id(2).unwrap();
        assert!(Arc::ptr_eq(&via_first, &via_second));
        let merged = via_first.read();
        assert!(merged.words.contains("amble"));
        assert_eq!(merged.relations.len(), 2);
        assert!(Arc::ptr_eq(
            &index.by_word("amble").unwrap(),
            &via_second
        ));
    }

    #[test]
    fn test_scan_fallback() {
        let index = SynsetIndex::new();
        index.insert(synset(1, &["walk"], &[]));
        // Remove the word entry to simulate an unindexed form.
        index.by_word.write().clear();
        assert!(index.by_word("walk").is_none());
        assert!(index.scan_for_word("walk").is_some());
    }
}
