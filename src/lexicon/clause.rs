//! Clauses and conjunctive joins between them.

use serde::{Deserialize, Serialize};

use crate::lexicon::phrase::PhraseId;
use crate::lexicon::sentence::SentenceId;
use crate::lexicon::word::WordId;

/// Identifier of a [`Clause`] within its owning document's clause store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClauseId(pub u32);

/// An ordered sequence of phrases representing a grammatically complete
/// predication.
#[derive(Debug, Clone)]
pub struct Clause {
    /// Identifier within the owning document.
    pub id: ClauseId,
    /// Member phrases, in document order.
    pub phrases: Vec<PhraseId>,
    /// Containing sentence, set during reification.
    pub sentence: Option<SentenceId>,
}

impl Clause {
    /// Create a new clause.
    pub fn new(id: ClauseId, phrases: Vec<PhraseId>) -> Clause {
        Clause {
            id,
            phrases,
            sentence: None,
        }
    }
}

/// A conjunctive construct joining two clauses within a sentence, recording
/// the clause to its left and right.
#[derive(Debug, Clone, Copy)]
pub struct ConjunctiveJoin {
    /// The conjunction word itself.
    pub word: WordId,
    /// Clause to the left of the conjunction.
    pub left: Option<ClauseId>,
    /// Clause to the right of the conjunction.
    pub right: Option<ClauseId>,
}
