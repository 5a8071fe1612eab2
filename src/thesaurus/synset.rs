//! Synsets and typed pointer relations.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Kind of a typed pointer relation between synsets, mapped from the source
/// format's pointer symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    Antonym,
    Hypernym,
    InstanceHypernym,
    Hyponym,
    InstanceHyponym,
    MemberHolonym,
    SubstanceHolonym,
    PartHolonym,
    MemberMeronym,
    SubstanceMeronym,
    PartMeronym,
    Attribute,
    DerivationallyRelated,
    DomainCategory,
    DomainRegion,
    DomainUsage,
    MemberOfDomainCategory,
    MemberOfDomainRegion,
    MemberOfDomainUsage,
    Entailment,
    Cause,
    AlsoSee,
    VerbGroup,
    ParticipleOfVerb,
    Pertainym,
}

impl RelationKind {
    /// Map a pointer symbol to a relation kind. Unknown symbols yield `None`
    /// and the pointer is skipped.
    pub fn from_symbol(symbol: &str) -> Option<RelationKind> {
        let kind = match symbol {
            "!" => RelationKind::Antonym,
            "@" => RelationKind::Hypernym,
            "@i" => RelationKind::InstanceHypernym,
            "~" => RelationKind::Hyponym,
            "~i" => RelationKind::InstanceHyponym,
            "#m" => RelationKind::MemberHolonym,
            "#s" => RelationKind::SubstanceHolonym,
            "#p" => RelationKind::PartHolonym,
            "%m" => RelationKind::MemberMeronym,
            "%s" => RelationKind::SubstanceMeronym,
            "%p" => RelationKind::PartMeronym,
            "=" => RelationKind::Attribute,
            "+" => RelationKind::DerivationallyRelated,
            ";c" => RelationKind::DomainCategory,
            ";r" => RelationKind::DomainRegion,
            ";u" => RelationKind::DomainUsage,
            "-c" => RelationKind::MemberOfDomainCategory,
            "-r" => RelationKind::MemberOfDomainRegion,
            "-u" => RelationKind::MemberOfDomainUsage,
            "*" => RelationKind::Entailment,
            ">" => RelationKind::Cause,
            "^" => RelationKind::AlsoSee,
            "$" => RelationKind::VerbGroup,
            "<" => RelationKind::ParticipleOfVerb,
            "\\" => RelationKind::Pertainym,
            _ => return None,
        };
        Some(kind)
    }
}

/// Relation kinds relevant to noun synonym propagation.
pub const NOUN_SYNONYM_RELATIONS: &[RelationKind] = &[
    RelationKind::Hypernym,
    RelationKind::Hyponym,
    RelationKind::InstanceHypernym,
    RelationKind::InstanceHyponym,
    RelationKind::DomainCategory,
    RelationKind::MemberMeronym,
];

/// Relation kinds relevant to verb synonym propagation.
pub const VERB_SYNONYM_RELATIONS: &[RelationKind] = &[
    RelationKind::Hypernym,
    RelationKind::AlsoSee,
    RelationKind::VerbGroup,
    RelationKind::DerivationallyRelated,
    RelationKind::Entailment,
    RelationKind::Cause,
    RelationKind::DomainUsage,
];

/// Part of speech a synonym engine serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
}

impl PartOfSpeech {
    /// Relation kinds allow-listed for synonym propagation.
    pub fn synonym_relations(&self) -> &'static [RelationKind] {
        match self {
            PartOfSpeech::Noun => NOUN_SYNONYM_RELATIONS,
            PartOfSpeech::Verb => VERB_SYNONYM_RELATIONS,
        }
    }

    /// The synset-type letter used by this part of speech's data file.
    pub fn type_letter(&self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
        }
    }

    /// Wrap a numeric category code.
    pub fn category(&self, code: u8) -> SynsetCategory {
        match self {
            PartOfSpeech::Noun => SynsetCategory::Noun(code),
            PartOfSpeech::Verb => SynsetCategory::Verb(code),
        }
    }
}

/// Syntactic category of a synset: part of speech plus the numeric category
/// code parsed from the data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SynsetCategory {
    Noun(u8),
    Verb(u8),
}

/// A unit of the external lexical database.
///
/// Created once during load and logically immutable thereafter, except that
/// the loader may merge same-word synsets encountered in different file
/// regions (union of word-forms and relation sets). Callers must treat the
/// id and word indexes as the only valid lookup paths, never assume one
/// synset object is canonical for a word.
#[derive(Debug, Clone)]
pub struct Synset {
    /// 8-digit synset id from the source file.
    pub id: u32,
    /// Syntactic category.
    pub category: SynsetCategory,
    /// Member word-forms, lowercase, underscores replaced with spaces.
    pub words: AHashSet<String>,
    /// Typed pointer relations to other synset ids, already filtered to the
    /// kinds relevant to synonym propagation.
    pub relations: AHashSet<(RelationKind, u32)>,
}

impl Synset {
    /// Create a synset with no words or relations.
    pub fn new(id: u32, category: SynsetCategory) -> Synset {
        Synset {
            id,
            category,
            words: AHashSet::new(),
            relations: AHashSet::new(),
        }
    }

    /// Union another synset's word and relation sets into this one.
    pub fn merge(&mut self, other: &Synset) {
        self.words.extend(other.words.iter().cloned());
        self.relations.extend(other.relations.iter().copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table() {
        assert_eq!(RelationKind::from_symbol("@"), Some(RelationKind::Hypernym));
        assert_eq!(
            RelationKind::from_symbol("@i"),
            Some(RelationKind::InstanceHypernym)
        );
        assert_eq!(RelationKind::from_symbol("$"), Some(RelationKind::VerbGroup));
        assert_eq!(RelationKind::from_symbol("??"), None);
    }

    #[test]
    fn test_merge_unions_words_and_relations() {
        let mut a = Synset::new(1, SynsetCategory::Verb(29));
        a.words.insert("walk".to_string());
        a.relations.insert((RelationKind::Hypernym, 2));
        let mut b = Synset::new(1, SynsetCategory::Verb(29));
        b.words.insert("stroll".to_string());
        b.relations.insert((RelationKind::AlsoSee, 3));
        a.merge(&b);
        assert_eq!(a.words.len(), 2);
        assert_eq!(a.relations.len(), 2);
    }
}
