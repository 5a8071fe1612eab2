//! Paragraphs and their kinds.

use serde::{Deserialize, Serialize};

use crate::lexicon::sentence::SentenceId;

/// Identifier of a [`Paragraph`] within its owning document's store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParagraphId(pub u32);

/// Kind of a paragraph.
///
/// Only [`ParagraphKind::Body`] paragraphs count toward the document's
/// primary paragraph sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParagraphKind {
    #[default]
    Body,
    Heading,
    Enumeration,
}

/// An ordered sequence of sentences.
#[derive(Debug, Clone)]
pub struct Paragraph {
    /// Identifier within the owning document.
    pub id: ParagraphId,
    /// Paragraph kind.
    pub kind: ParagraphKind,
    /// Member sentences, in document order.
    pub sentences: Vec<SentenceId>,
}

impl Paragraph {
    /// Create a new paragraph.
    pub fn new(id: ParagraphId, kind: ParagraphKind, sentences: Vec<SentenceId>) -> Paragraph {
        Paragraph {
            id,
            kind,
            sentences,
        }
    }
}
