//! Subject/object binding pass.

use crate::lexicon::binding::ConstructId;
use crate::lexicon::document::Document;
use crate::lexicon::phrase::PhraseId;
use crate::thesaurus::Thesaurus;

/// Bind subjects and objects to every clause's verbal.
///
/// For each clause: the nearest noun phrase before the verb phrase becomes
/// its subject; noun phrases after it become objects — with two or more, the
/// first is the indirect object and the rest are direct objects. Verbals
/// synonymous with "have" additionally record every direct object as a
/// possession of every subject; verbals synonymous with "be" record a
/// classification alias between subjects and direct objects
/// ("A dog is an animal").
pub fn bind_predicates(document: &mut Document, thesaurus: &Thesaurus) {
    let sentence_ids = document.sentences().to_vec();
    for sentence_id in sentence_ids {
        let clause_ids = document.sentence(sentence_id).clauses.clone();
        for clause_id in clause_ids {
            let phrase_ids = document.clause(clause_id).phrases.clone();
            bind_clause(document, thesaurus, &phrase_ids);
        }
    }
}

fn bind_clause(document: &mut Document, thesaurus: &Thesaurus, phrase_ids: &[PhraseId]) {
    let Some(verb_index) = phrase_ids
        .iter()
        .position(|&p| document.phrase(p).kind.is_verbal())
    else {
        return;
    };
    let verbal = ConstructId::Phrase(phrase_ids[verb_index]);

    let subject = phrase_ids[..verb_index]
        .iter()
        .rev()
        .find(|&&p| document.phrase(p).kind.is_entity())
        .copied();
    if let Some(subject) = subject {
        document.bind_subject(verbal, ConstructId::Phrase(subject));
    }

    // Noun phrases following the verbal; entities inside prepositional
    // phrases are not object candidates.
    let objects: Vec<PhraseId> = phrase_ids[verb_index + 1..]
        .iter()
        .filter(|&&p| document.phrase(p).kind.is_entity())
        .copied()
        .collect();
    match objects.as_slice() {
        [] => {}
        [only] => document.bind_direct_object(verbal, ConstructId::Phrase(*only)),
        [indirect, directs @ ..] => {
            document.bind_indirect_object(verbal, ConstructId::Phrase(*indirect));
            for &direct in directs {
                document.bind_direct_object(verbal, ConstructId::Phrase(direct));
            }
        }
    }

    apply_verb_semantics(document, thesaurus, verbal, phrase_ids[verb_index]);
}

/// Possession and classification inference for "have"/"be" synonyms.
fn apply_verb_semantics(
    document: &mut Document,
    thesaurus: &Thesaurus,
    verbal: ConstructId,
    verb_phrase: PhraseId,
) {
    let head = head_verb_text(document, verb_phrase);
    if head.is_empty() {
        return;
    }
    let subjects = document.relations(verbal).subjects.clone();
    let direct_objects = document.relations(verbal).direct_objects.clone();
    if subjects.is_empty() || direct_objects.is_empty() {
        return;
    }
    if thesaurus.is_verb_synonym(&head, "have") {
        for &subject in &subjects {
            for &object in &direct_objects {
                document.bind_possession(subject, object);
            }
        }
    } else if thesaurus.is_verb_synonym(&head, "be") {
        // Classification semantics: the subject is aliased to the class term.
        for &subject in &subjects {
            for &object in &direct_objects {
                document.bind_reference(object, subject);
            }
        }
    }
}

/// Text of the last verb-tagged word in the phrase.
fn head_verb_text(document: &Document, phrase_id: PhraseId) -> String {
    let phrase = document.phrase(phrase_id);
    phrase
        .words
        .iter()
        .rev()
        .find(|&&w| document.word(w).kind.is_verb())
        .map(|&w| document.word(w).text.clone())
        .unwrap_or_default()
}
