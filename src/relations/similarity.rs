//! Graded similarity between verbal constructs.

use crate::lexicon::binding::ConstructId;
use crate::lexicon::document::Document;
use crate::lexicon::word::{WordId, WordKind};
use crate::thesaurus::Thesaurus;

/// Compute a graded similarity in `[0.0, 1.0]` between two verbal
/// constructs.
///
/// Identical text is maximal similarity. Between single words, similarity is
/// boolean: 1.0 iff one's text is in the other's synonym set. Between
/// phrases, it is the fraction of cross-product word pairs that are
/// individually similar. Comparing a single word to a phrase reduces to
/// checking the phrase's constituent verb words up to (but not past) an
/// infinitival marker.
pub fn similarity(
    document: &Document,
    a: ConstructId,
    b: ConstructId,
    thesaurus: &Thesaurus,
) -> f64 {
    let text_a = document.construct_text(a).to_lowercase();
    let text_b = document.construct_text(b).to_lowercase();
    if text_a == text_b {
        return 1.0;
    }
    match (a, b) {
        (ConstructId::Word(word_a), ConstructId::Word(word_b)) => {
            if words_similar(document, word_a, word_b, thesaurus) {
                1.0
            } else {
                0.0
            }
        }
        (ConstructId::Phrase(_), ConstructId::Phrase(_)) => {
            let words_a = document.construct_words(a);
            let words_b = document.construct_words(b);
            if words_a.is_empty() || words_b.is_empty() {
                return 0.0;
            }
            let mut similar_pairs = 0usize;
            for &word_a in &words_a {
                for &word_b in &words_b {
                    if words_similar(document, word_a, word_b, thesaurus) {
                        similar_pairs += 1;
                    }
                }
            }
            similar_pairs as f64 / (words_a.len() * words_b.len()) as f64
        }
        (ConstructId::Word(word), ConstructId::Phrase(phrase))
        | (ConstructId::Phrase(phrase), ConstructId::Word(word)) => {
            let any = pre_infinitival_verbs(document, phrase)
                .into_iter()
                .any(|phrase_word| words_similar(document, word, phrase_word, thesaurus));
            if any { 1.0 } else { 0.0 }
        }
    }
}

/// The phrase's verb words up to, but not past, an infinitival marker.
fn pre_infinitival_verbs(document: &Document, phrase: crate::lexicon::phrase::PhraseId) -> Vec<WordId> {
    let mut verbs = Vec::new();
    for &word_id in &document.phrase(phrase).words {
        let kind = document.word(word_id).kind;
        if kind == WordKind::InfinitivalTo {
            break;
        }
        if kind.is_verb() {
            verbs.push(word_id);
        }
    }
    verbs
}

/// Word-level similarity: identical text or mutual synonym-set membership.
fn words_similar(document: &Document, a: WordId, b: WordId, thesaurus: &Thesaurus) -> bool {
    let text_a = document.word(a).text.to_lowercase();
    let text_b = document.word(b).text.to_lowercase();
    if text_a == text_b {
        return true;
    }
    let verbish = document.word(a).kind.is_verb() || document.word(b).kind.is_verb();
    if verbish {
        thesaurus.is_verb_synonym(&text_a, &text_b) || thesaurus.is_verb_synonym(&text_b, &text_a)
    } else {
        thesaurus.is_noun_synonym(&text_a, &text_b) || thesaurus.is_noun_synonym(&text_b, &text_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::parser::DocumentParser;
    use crate::morphology::{ExceptionTable, Resolver};
    use crate::thesaurus::engine::{EngineConfig, SynonymEngine};
    use crate::thesaurus::progress::CancelToken;
    use std::io::Cursor;
    use std::sync::Arc;

    fn thesaurus_with_walk_stroll() -> Thesaurus {
        let verb_resolver = Arc::new(Resolver::verb(ExceptionTable::new()));
        let verbs = SynonymEngine::new(
            EngineConfig::verb().with_header_lines(0),
            verb_resolver,
        );
        verbs
            .load_from_reader(
                Cursor::new("00000001 29 v 02 walk 0 stroll 0 000\n".to_string()),
                None,
                None,
                &CancelToken::new(),
            )
            .unwrap();
        Thesaurus::with_engines(
            SynonymEngine::noun(Arc::new(Resolver::noun(ExceptionTable::new()))),
            verbs,
        )
    }

    fn doc(text: &str) -> Document {
        DocumentParser::new().parse_tagged_text("test", text)
    }

    fn phrase_named(document: &Document, text: &str) -> ConstructId {
        document
            .phrases()
            .iter()
            .find(|&&p| document.phrase_text(p) == text)
            .map(|&p| ConstructId::Phrase(p))
            .unwrap_or_else(|| panic!("no phrase {text:?}"))
    }

    #[test]
    fn test_identical_text_is_maximal() {
        let doc = doc("John/NNP walked/VBD and/CC Bill/NNP walked/VBD ./.");
        let thesaurus = Thesaurus::default();
        let phrases: Vec<ConstructId> = doc
            .phrases()
            .iter()
            .filter(|&&p| doc.phrase(p).kind.is_verbal())
            .map(|&p| ConstructId::Phrase(p))
            .collect();
        assert_eq!(similarity(&doc, phrases[0], phrases[1], &thesaurus), 1.0);
    }

    #[test]
    fn test_synonym_words_are_similar() {
        let doc = doc("John/NNP walks/VBZ and/CC Bill/NNP strolls/VBZ ./.");
        let thesaurus = thesaurus_with_walk_stroll();
        let walks = phrase_named(&doc, "walks");
        let strolls = phrase_named(&doc, "strolls");
        assert_eq!(similarity(&doc, walks, strolls, &thesaurus), 1.0);
    }

    #[test]
    fn test_unrelated_words_are_dissimilar() {
        let doc = doc("John/NNP walks/VBZ and/CC Bill/NNP eats/VBZ ./.");
        let thesaurus = thesaurus_with_walk_stroll();
        let walks = phrase_named(&doc, "walks");
        let eats = phrase_named(&doc, "eats");
        assert_eq!(similarity(&doc, walks, eats, &thesaurus), 0.0);
    }

    #[test]
    fn test_phrase_similarity_is_a_fraction() {
        let doc = doc("John/NNP quickly/RB walks/VBZ and/CC Bill/NNP quickly/RB eats/VBZ ./.");
        let thesaurus = thesaurus_with_walk_stroll();
        let a = phrase_named(&doc, "quickly walks");
        let b = phrase_named(&doc, "quickly eats");
        // 2x2 cross product, only (quickly, quickly) matches.
        let score = similarity(&doc, a, b, &thesaurus);
        assert!(score > 0.0 && score < 1.0);
        assert!((score - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_word_against_phrase_stops_at_infinitival_marker() {
        let doc = doc("John/NNP wanted/VBD to/TO stroll/VB ./.\nBill/NNP walked/VBD ./.");
        let thesaurus = thesaurus_with_walk_stroll();
        let wanted_to_stroll = phrase_named(&doc, "wanted to stroll");
        let walked = doc
            .words()
            .iter()
            .find(|&&w| doc.word(w).text == "walked")
            .map(|&w| ConstructId::Word(w))
            .unwrap();
        // "stroll" sits past the infinitival marker, so it must not count;
        // "wanted" is not a synonym of "walked".
        assert_eq!(similarity(&doc, walked, wanted_to_stroll, &thesaurus), 0.0);
    }
}
