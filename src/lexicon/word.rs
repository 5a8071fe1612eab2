//! The atomic lexical unit and its tagged variants.

use serde::{Deserialize, Serialize};

use crate::lexicon::binding::Relations;
use crate::lexicon::paragraph::ParagraphId;
use crate::lexicon::phrase::PhraseId;
use crate::lexicon::sentence::SentenceId;

/// Identifier of a [`Word`] within its owning document's word store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordId(pub u32);

/// Noun subvariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NounKind {
    Common,
    CommonPlural,
    Proper,
    ProperPlural,
}

/// Verb tense/form subvariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerbForm {
    Base,
    Past,
    Gerund,
    PastParticiple,
    Present,
    PresentThirdPerson,
    Modal,
}

/// Comparison degree for adjectives and adverbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Degree {
    Positive,
    Comparative,
    Superlative,
}

/// Pronoun subvariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PronounKind {
    Personal,
    Possessive,
    Relative,
    Interrogative,
}

/// Punctuation subvariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PunctuationKind {
    /// Sentence-final punctuation (`.`, `!`, `?`).
    SentenceTerminal,
    Comma,
    Other,
}

/// The syntactic role of a word, selected once at construction time from the
/// external tagger's tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordKind {
    Noun(NounKind),
    Verb(VerbForm),
    Adjective(Degree),
    Adverb(Degree),
    Pronoun(PronounKind),
    Determiner,
    Preposition,
    Conjunction,
    Punctuation(PunctuationKind),
    Number,
    Interjection,
    /// Possessive marker (`'s`).
    PossessiveMarker,
    /// The infinitival marker `to`.
    InfinitivalTo,
    /// Generic fallback for tags the mapping does not recognize.
    Unknown,
}

impl WordKind {
    /// Map a Penn-Treebank-style tag to a word variant.
    ///
    /// Unrecognized tags yield [`WordKind::Unknown`] rather than an error, so
    /// a malformed tagged pair never fails the whole document.
    pub fn from_tag(tag: &str, text: &str) -> WordKind {
        match tag {
            "NN" => WordKind::Noun(NounKind::Common),
            "NNS" => WordKind::Noun(NounKind::CommonPlural),
            "NNP" => WordKind::Noun(NounKind::Proper),
            "NNPS" => WordKind::Noun(NounKind::ProperPlural),
            "VB" => WordKind::Verb(VerbForm::Base),
            "VBD" => WordKind::Verb(VerbForm::Past),
            "VBG" => WordKind::Verb(VerbForm::Gerund),
            "VBN" => WordKind::Verb(VerbForm::PastParticiple),
            "VBP" => WordKind::Verb(VerbForm::Present),
            "VBZ" => WordKind::Verb(VerbForm::PresentThirdPerson),
            "MD" => WordKind::Verb(VerbForm::Modal),
            "JJ" => WordKind::Adjective(Degree::Positive),
            "JJR" => WordKind::Adjective(Degree::Comparative),
            "JJS" => WordKind::Adjective(Degree::Superlative),
            "RB" => WordKind::Adverb(Degree::Positive),
            "RBR" => WordKind::Adverb(Degree::Comparative),
            "RBS" => WordKind::Adverb(Degree::Superlative),
            "PRP" => WordKind::Pronoun(PronounKind::Personal),
            "PRP$" => WordKind::Pronoun(PronounKind::Possessive),
            "WDT" => WordKind::Pronoun(PronounKind::Relative),
            "WP" | "WP$" => WordKind::Pronoun(PronounKind::Interrogative),
            "DT" | "PDT" => WordKind::Determiner,
            "IN" => WordKind::Preposition,
            "CC" => WordKind::Conjunction,
            "TO" => WordKind::InfinitivalTo,
            "CD" => WordKind::Number,
            "UH" => WordKind::Interjection,
            "POS" => WordKind::PossessiveMarker,
            "." | "!" | "?" => WordKind::Punctuation(PunctuationKind::SentenceTerminal),
            "," => WordKind::Punctuation(PunctuationKind::Comma),
            ":" | ";" | "``" | "''" | "-LRB-" | "-RRB-" => {
                WordKind::Punctuation(PunctuationKind::Other)
            }
            _ => Self::from_text_fallback(text),
        }
    }

    /// Last-resort classification from the surface text itself.
    fn from_text_fallback(text: &str) -> WordKind {
        match text {
            "." | "!" | "?" => WordKind::Punctuation(PunctuationKind::SentenceTerminal),
            "," => WordKind::Punctuation(PunctuationKind::Comma),
            ":" | ";" | "(" | ")" | "\"" | "'" => WordKind::Punctuation(PunctuationKind::Other),
            _ => WordKind::Unknown,
        }
    }

    /// True for noun variants.
    pub fn is_noun(&self) -> bool {
        matches!(self, WordKind::Noun(_))
    }

    /// True for verb variants (including modals).
    pub fn is_verb(&self) -> bool {
        matches!(self, WordKind::Verb(_))
    }

    /// True for pronoun variants.
    pub fn is_pronoun(&self) -> bool {
        matches!(self, WordKind::Pronoun(_))
    }

    /// Can this word bear subject/object/possessor roles?
    pub fn is_entity(&self) -> bool {
        matches!(self, WordKind::Noun(_) | WordKind::Pronoun(_) | WordKind::Number)
    }

    /// Can this word act as a predicate?
    pub fn is_verbal(&self) -> bool {
        self.is_verb()
    }

    /// Can this word describe an entity?
    pub fn is_descriptor(&self) -> bool {
        matches!(self, WordKind::Adjective(_))
    }

    /// Can this word modify a verbal or a descriptor?
    pub fn is_modifier(&self) -> bool {
        matches!(self, WordKind::Adverb(_))
    }

    /// True for plural noun variants.
    pub fn is_plural_noun(&self) -> bool {
        matches!(
            self,
            WordKind::Noun(NounKind::CommonPlural) | WordKind::Noun(NounKind::ProperPlural)
        )
    }

    /// True for proper noun variants.
    pub fn is_proper_noun(&self) -> bool {
        matches!(
            self,
            WordKind::Noun(NounKind::Proper) | WordKind::Noun(NounKind::ProperPlural)
        )
    }

    /// True for sentence-final punctuation.
    pub fn is_sentence_terminal(&self) -> bool {
        matches!(self, WordKind::Punctuation(PunctuationKind::SentenceTerminal))
    }
}

/// The atomic lexical unit.
///
/// A word is created once by the parser, destroyed only with its owning
/// document, and mutated only to set adjacency links, significance weights,
/// and relationship bindings.
#[derive(Debug, Clone)]
pub struct Word {
    /// Identifier within the owning document.
    pub id: WordId,
    /// Surface text.
    pub text: String,
    /// Syntactic role variant.
    pub kind: WordKind,
    /// Document-relative sequence position.
    pub position: u32,
    /// Within-document significance score.
    pub weight: f64,
    /// Cross-document significance score.
    pub meta_weight: f64,
    /// Previous word in linear document order.
    pub prev: Option<WordId>,
    /// Next word in linear document order.
    pub next: Option<WordId>,
    /// Owning phrase, if any.
    pub phrase: Option<PhraseId>,
    /// Containing sentence, set during reification.
    pub sentence: Option<SentenceId>,
    /// Containing paragraph, set during reification.
    pub paragraph: Option<ParagraphId>,
    /// Relationship bindings.
    pub relations: Relations,
}

impl Word {
    /// Create a new word with no adjacency or bindings.
    pub fn new(id: WordId, text: impl Into<String>, kind: WordKind, position: u32) -> Word {
        Word {
            id,
            text: text.into(),
            kind,
            position,
            weight: 0.0,
            meta_weight: 0.0,
            prev: None,
            next: None,
            phrase: None,
            sentence: None,
            paragraph: None,
            relations: Relations::default(),
        }
    }

    /// Set the within-document significance score.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Set the cross-document significance score.
    pub fn set_meta_weight(&mut self, meta_weight: f64) {
        self.meta_weight = meta_weight;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_mapping() {
        assert_eq!(
            WordKind::from_tag("NNS", "dogs"),
            WordKind::Noun(NounKind::CommonPlural)
        );
        assert_eq!(
            WordKind::from_tag("VBD", "gave"),
            WordKind::Verb(VerbForm::Past)
        );
        assert_eq!(
            WordKind::from_tag("PRP", "she"),
            WordKind::Pronoun(PronounKind::Personal)
        );
        assert_eq!(WordKind::from_tag("TO", "to"), WordKind::InfinitivalTo);
    }

    #[test]
    fn test_unknown_tag_falls_back() {
        assert_eq!(WordKind::from_tag("XYZ", "blorp"), WordKind::Unknown);
        // Punctuation is still recognized from the text itself.
        assert_eq!(
            WordKind::from_tag("XYZ", "."),
            WordKind::Punctuation(PunctuationKind::SentenceTerminal)
        );
    }

    #[test]
    fn test_capability_queries() {
        assert!(WordKind::Noun(NounKind::Proper).is_entity());
        assert!(WordKind::Pronoun(PronounKind::Personal).is_entity());
        assert!(WordKind::Verb(VerbForm::Base).is_verbal());
        assert!(!WordKind::Determiner.is_entity());
        assert!(WordKind::Adjective(Degree::Positive).is_descriptor());
        assert!(WordKind::Adverb(Degree::Comparative).is_modifier());
    }
}
