//! Sentences and their cached flattened views.

use serde::{Deserialize, Serialize};

use crate::lexicon::clause::{ClauseId, ConjunctiveJoin};
use crate::lexicon::paragraph::ParagraphId;
use crate::lexicon::phrase::PhraseId;
use crate::lexicon::word::WordId;

/// Identifier of a [`Sentence`] within its owning document's sentence store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SentenceId(pub u32);

/// An ordered sequence of clauses terminated by a punctuation word.
///
/// The flattened word and phrase views are computed and cached during the
/// owning document's reification pass.
#[derive(Debug, Clone)]
pub struct Sentence {
    /// Identifier within the owning document.
    pub id: SentenceId,
    /// Member clauses, in document order.
    pub clauses: Vec<ClauseId>,
    /// Conjunctive constructs joining adjacent clauses.
    pub joins: Vec<ConjunctiveJoin>,
    /// Terminal punctuation word, if the sentence had one.
    pub terminator: Option<WordId>,
    /// Containing paragraph, set during reification.
    pub paragraph: Option<ParagraphId>,
    /// Flattened member words (including the terminator), cached at
    /// reification.
    pub words: Vec<WordId>,
    /// Flattened member phrases, cached at reification.
    pub phrases: Vec<PhraseId>,
    /// Whether the sentence contains at least one verb-tagged word. Sentences
    /// without a verb are excluded from the document's primary sentence
    /// sequence, though still reachable via their paragraph.
    pub has_verb: bool,
}

impl Sentence {
    /// Create a new sentence with empty cached views.
    pub fn new(id: SentenceId, clauses: Vec<ClauseId>) -> Sentence {
        Sentence {
            id,
            clauses,
            joins: Vec::new(),
            terminator: None,
            paragraph: None,
            words: Vec::new(),
            phrases: Vec::new(),
            has_verb: false,
        }
    }
}
