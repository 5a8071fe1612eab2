//! Ordered word sequences sharing a syntactic category.

use serde::{Deserialize, Serialize};

use crate::lexicon::binding::Relations;
use crate::lexicon::clause::ClauseId;
use crate::lexicon::paragraph::ParagraphId;
use crate::lexicon::sentence::SentenceId;
use crate::lexicon::word::WordId;

/// Identifier of a [`Phrase`] within its owning document's phrase store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhraseId(pub u32);

/// Syntactic category of a phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhraseKind {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Prepositional,
    Unknown,
}

impl PhraseKind {
    /// Can this phrase bear subject/object/possessor roles?
    pub fn is_entity(&self) -> bool {
        matches!(self, PhraseKind::Noun)
    }

    /// Can this phrase act as a predicate?
    pub fn is_verbal(&self) -> bool {
        matches!(self, PhraseKind::Verb)
    }
}

/// An ordered, non-empty sequence of words sharing a syntactic category.
///
/// A phrase owns its words for text composition (space-joined concatenation)
/// but not for graph navigation: each word also points back to its parent
/// phrase. Invariant: the words are contiguous in document order and each
/// word's parent-phrase back-reference points to exactly one phrase.
#[derive(Debug, Clone)]
pub struct Phrase {
    /// Identifier within the owning document.
    pub id: PhraseId,
    /// Syntactic category.
    pub kind: PhraseKind,
    /// Member words, in document order.
    pub words: Vec<WordId>,
    /// Previous phrase in linear document order.
    pub prev: Option<PhraseId>,
    /// Next phrase in linear document order.
    pub next: Option<PhraseId>,
    /// Owning clause.
    pub clause: Option<ClauseId>,
    /// Containing sentence, set during reification.
    pub sentence: Option<SentenceId>,
    /// Containing paragraph, set during reification.
    pub paragraph: Option<ParagraphId>,
    /// Relationship bindings.
    pub relations: Relations,
}

impl Phrase {
    /// Create a new phrase with no adjacency or bindings.
    pub fn new(id: PhraseId, kind: PhraseKind, words: Vec<WordId>) -> Phrase {
        Phrase {
            id,
            kind,
            words,
            prev: None,
            next: None,
            clause: None,
            sentence: None,
            paragraph: None,
            relations: Relations::default(),
        }
    }
}
