//! Morphological root-finding and form-generation.
//!
//! One resolver per part of speech (nouns, verbs, adverbs/adjectives), each
//! combining a precomputed irregular-forms exception table with an ordered
//! suffix transformation rule list. Resolution never fails: an unresolvable
//! word round-trips to itself.

pub mod exceptions;
pub mod resolver;
pub mod rules;

// Re-export commonly used types
pub use exceptions::ExceptionTable;
pub use resolver::Resolver;
pub use rules::{ADVERB_RULES, NOUN_RULES, PosRules, SuffixRule, VERB_RULES};
