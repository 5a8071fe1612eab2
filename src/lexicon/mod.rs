//! Lexical document model for Glossa.
//!
//! This module provides the Word/Phrase/Clause/Sentence/Paragraph/Document
//! hierarchy, its one-time reification (adjacency and parent linking), and the
//! parser that converts tagged token pairs into the hierarchy.

pub mod binding;
pub mod clause;
pub mod document;
pub mod paragraph;
pub mod parser;
pub mod phrase;
pub mod sentence;
pub mod word;

// Re-export commonly used types
pub use binding::{ConstructId, Relations};
pub use clause::{Clause, ClauseId, ConjunctiveJoin};
pub use document::{Document, DocumentParts, Page};
pub use paragraph::{Paragraph, ParagraphId, ParagraphKind};
pub use parser::{DocumentParser, TaggedParagraph, TaggedSentence, TaggedToken};
pub use phrase::{Phrase, PhraseId, PhraseKind};
pub use sentence::{Sentence, SentenceId};
pub use word::{Degree, NounKind, PronounKind, PunctuationKind, VerbForm, Word, WordId, WordKind};
