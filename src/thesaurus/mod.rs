//! Synonym lookup engine over a WordNet-style lexical relation database.
//!
//! The engine parses the line-oriented relation database into an indexed
//! synset graph and answers root/synonym/conjugation queries via
//! depth-bounded graph traversal. The index is safe to query while being
//! populated (single writer, many readers); queries during a load may simply
//! under-return results until the load completes.

pub mod engine;
pub mod index;
pub mod parser;
pub mod progress;
pub mod synset;

// Re-export commonly used types
pub use engine::{EngineConfig, LoadState, SynonymEngine, Thesaurus};
pub use index::SynsetIndex;
pub use progress::{CancelToken, LoadProgress, ProgressReporter};
pub use synset::{PartOfSpeech, RelationKind, Synset, SynsetCategory};
