//! # Glossa
//!
//! Grammatical analysis and lexical-relation lookup for written English text.
//!
//! Glossa decomposes tagged text into a hierarchy of grammatical constructs
//! (words, phrases, clauses, sentences, paragraphs, documents), establishes
//! grammatical relationships among them (subject/object binding, modification,
//! pronoun resolution, possession), and answers semantic-similarity and
//! synonym queries against those constructs using a WordNet-style lexical
//! relation database.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Arena-based lexical document model with one-time reification
//! - Per-part-of-speech morphological root finding and form generation
//! - Concurrent-safe synset index loadable while being queried
//! - Sequential binding passes for subject/object, modifier, and pronoun
//!   reference relationships
//! - Relationship lookup and graded similarity over bound documents

pub mod binder;
pub mod cli;
pub mod error;
pub mod lexicon;
pub mod morphology;
pub mod relations;
pub mod thesaurus;

pub mod prelude {
    pub use crate::binder;
    pub use crate::error::{GlossaError, Result};
    pub use crate::lexicon::document::Document;
    pub use crate::lexicon::parser::{DocumentParser, TaggedToken};
    pub use crate::relations::lookup::RelationshipLookup;
    pub use crate::relations::similarity::similarity;
    pub use crate::thesaurus::engine::{SynonymEngine, Thesaurus};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
