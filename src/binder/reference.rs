//! Pronoun/reference binding pass.

use crate::lexicon::binding::ConstructId;
use crate::lexicon::document::Document;
use crate::lexicon::phrase::PhraseId;

/// Grammatical agreement class inferred from surface text.
///
/// The inference is heuristic and occasionally ambiguous for ungendered or
/// collective nouns; a mismatch leaves the pronoun unbound rather than being
/// silently corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Agreement {
    Masculine,
    Feminine,
    Neuter,
    Plural,
    Ambiguous,
}

/// Classify a pronoun from its own text.
pub fn pronoun_agreement(text: &str) -> Agreement {
    match text.to_lowercase().as_str() {
        "he" | "him" | "his" | "himself" => Agreement::Masculine,
        "she" | "her" | "hers" | "herself" => Agreement::Feminine,
        "it" | "its" | "itself" => Agreement::Neuter,
        "they" | "them" | "their" | "theirs" | "themselves" | "we" | "us" | "our" | "ours"
        | "ourselves" => Agreement::Plural,
        _ => Agreement::Ambiguous,
    }
}

/// Classify a candidate entity phrase from its head noun's derived kind.
/// Returns `None` for phrases without a noun head (e.g. a bare pronoun),
/// which are not antecedent candidates.
fn entity_agreement(document: &Document, phrase_id: PhraseId) -> Option<Agreement> {
    let head = document
        .phrase(phrase_id)
        .words
        .iter()
        .rev()
        .find(|&&w| document.word(w).kind.is_noun())
        .copied()?;
    let kind = document.word(head).kind;
    Some(if kind.is_plural_noun() {
        Agreement::Plural
    } else if kind.is_proper_noun() {
        // A proper noun's gender is unknown from text alone.
        Agreement::Ambiguous
    } else {
        Agreement::Neuter
    })
}

/// Number/gender compatibility between a pronoun and a candidate entity.
fn compatible(pronoun: Agreement, entity: Agreement) -> bool {
    match pronoun {
        Agreement::Ambiguous => true,
        Agreement::Masculine | Agreement::Feminine => entity == Agreement::Ambiguous,
        Agreement::Neuter => matches!(entity, Agreement::Neuter | Agreement::Ambiguous),
        Agreement::Plural => entity == Agreement::Plural,
    }
}

/// Resolve each pronoun to the nearest preceding compatible entity.
///
/// On resolution the pronoun's `refers_to` aggregate gains the entity and the
/// entity's `referencers` gains the pronoun. A pronoun with no compatible
/// candidate remains unbound; that is not an error.
pub fn bind_references(document: &mut Document) {
    let word_ids = document.words().to_vec();
    let entities = document.entities();
    for word_id in word_ids {
        let word = document.word(word_id);
        if !word.kind.is_pronoun() {
            continue;
        }
        let agreement = pronoun_agreement(&word.text);
        let position = word.position;
        let antecedent = entities
            .iter()
            .filter_map(|&entity| match entity {
                ConstructId::Phrase(phrase_id) => {
                    let entity_position = document.construct_position(entity);
                    if entity_position >= position {
                        return None;
                    }
                    let entity_kind = entity_agreement(document, phrase_id)?;
                    compatible(agreement, entity_kind).then_some((entity, entity_position))
                }
                ConstructId::Word(_) => None,
            })
            .max_by_key(|&(_, entity_position)| entity_position)
            .map(|(entity, _)| entity);
        if let Some(antecedent) = antecedent {
            document.bind_reference(antecedent, ConstructId::Word(word_id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::parser::DocumentParser;

    fn word_named(document: &Document, text: &str) -> ConstructId {
        document
            .words()
            .iter()
            .find(|&&w| document.word(w).text == text)
            .map(|&w| ConstructId::Word(w))
            .unwrap_or_else(|| panic!("no word {text:?}"))
    }

    #[test]
    fn test_masculine_pronoun_binds_proper_noun() {
        let parser = DocumentParser::new();
        let mut doc = parser.parse_tagged_text(
            "test",
            "John/NNP ran/VBD ./.\nhe/PRP slept/VBD ./.",
        );
        bind_references(&mut doc);
        let he = word_named(&doc, "he");
        let refers_to = &doc.relations(he).refers_to;
        assert_eq!(refers_to.len(), 1);
        assert_eq!(doc.construct_text(refers_to[0]), "John");
        assert!(doc.relations(refers_to[0]).referencers.contains(&he));
    }

    #[test]
    fn test_nearest_preceding_candidate_wins() {
        let parser = DocumentParser::new();
        let mut doc = parser.parse_tagged_text(
            "test",
            "John/NNP met/VBD Bill/NNP ./.\nhe/PRP laughed/VBD ./.",
        );
        bind_references(&mut doc);
        let he = word_named(&doc, "he");
        assert_eq!(doc.construct_text(doc.relations(he).refers_to[0]), "Bill");
    }

    #[test]
    fn test_plural_pronoun_requires_plural_entity() {
        let parser = DocumentParser::new();
        let mut doc = parser.parse_tagged_text(
            "test",
            "the/DT dog/NN saw/VBD the/DT cats/NNS ./.\nthey/PRP fled/VBD ./.",
        );
        bind_references(&mut doc);
        let they = word_named(&doc, "they");
        assert_eq!(
            doc.construct_text(doc.relations(they).refers_to[0]),
            "the cats"
        );
    }

    #[test]
    fn test_incompatible_pronoun_stays_unbound() {
        let parser = DocumentParser::new();
        let mut doc = parser.parse_tagged_text(
            "test",
            "the/DT dog/NN barked/VBD ./.\nthey/PRP fled/VBD ./.",
        );
        bind_references(&mut doc);
        let they = word_named(&doc, "they");
        assert!(doc.relations(they).refers_to.is_empty());
    }

    #[test]
    fn test_neuter_pronoun_binds_common_noun() {
        let parser = DocumentParser::new();
        let mut doc = parser.parse_tagged_text(
            "test",
            "the/DT dog/NN barked/VBD ./.\nit/PRP slept/VBD ./.",
        );
        bind_references(&mut doc);
        let it = word_named(&doc, "it");
        assert_eq!(
            doc.construct_text(doc.relations(it).refers_to[0]),
            "the dog"
        );
    }
}
