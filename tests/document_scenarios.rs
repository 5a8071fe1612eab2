use glossa::error::GlossaError;
use glossa::lexicon::document::Document;
use glossa::lexicon::paragraph::ParagraphKind;
use glossa::lexicon::parser::DocumentParser;

fn parse(text: &str) -> Document {
    DocumentParser::new().parse_tagged_text("scenario", text)
}

/// A word-wrap measure: ceil(chars / line_length), at least one line.
fn wrapped_lines(text: &str, line_length: usize) -> usize {
    text.len().div_ceil(line_length).max(1)
}

#[test]
fn document_reification_links_the_primary_sequence() {
    let doc = parse(
        "John/NNP threw/VBD the/DT ball/NN ./.\n\
         the/DT dog/NN caught/VBD it/PRP ./.",
    );

    assert_eq!(doc.sentences().len(), 2);
    let words = doc.words();
    assert_eq!(doc.word(words[0]).text, "John");

    // Adjacency spans sentence boundaries within the primary sequence.
    for pair in words.windows(2) {
        assert_eq!(doc.word(pair[0]).next, Some(pair[1]));
        assert_eq!(doc.word(pair[1]).prev, Some(pair[0]));
    }
    assert_eq!(doc.word(words[0]).prev, None);
    assert_eq!(doc.word(*words.last().unwrap()).next, None);

    // Every word knows its sentence and paragraph.
    for &word_id in words {
        assert!(doc.word(word_id).sentence.is_some());
        assert!(doc.word(word_id).paragraph.is_some());
    }
}

#[test]
fn verbless_sentences_stay_out_of_the_primary_sequence() {
    let doc = parse(
        "the/DT red/JJ door/NN ./.\n\
         John/NNP opened/VBD it/PRP ./.",
    );
    // Only the verb-bearing sentence is in the primary sequence.
    assert_eq!(doc.sentences().len(), 1);
    assert!(doc.words().iter().any(|&w| doc.word(w).text == "opened"));
    assert!(!doc.words().iter().any(|&w| doc.word(w).text == "door"));
}

#[test]
fn reification_is_deterministic_for_identical_content() {
    let text = "John/NNP gave/VBD Mary/NNP a/DT book/NN ./.\n\
                \n\
                she/PRP quickly/RB read/VBD it/PRP ./.";
    let first = parse(text);
    let second = parse(text);

    // The derived sequences come out identical.
    assert_eq!(first.words(), second.words());
    assert_eq!(first.phrases(), second.phrases());
    assert_eq!(first.sentences(), second.sentences());
    assert_eq!(
        first.words().iter().map(|&w| &first.word(w).text).collect::<Vec<_>>(),
        second.words().iter().map(|&w| &second.word(w).text).collect::<Vec<_>>()
    );

    // So do the adjacency links on every word in the sequence.
    for (&a, &b) in first.words().iter().zip(second.words()) {
        assert_eq!(first.word(a).prev, second.word(b).prev);
        assert_eq!(first.word(a).next, second.word(b).next);
    }
}

#[test]
fn pagination_packs_paragraphs_greedily() {
    let doc = parse(
        "John/NNP ran/VBD ./.\n\
         \n\
         Mary/NNP slept/VBD ./.\n\
         \n\
         Bill/NNP laughed/VBD ./.",
    );
    assert_eq!(doc.paragraphs().len(), 3);

    // Each paragraph fits a page on its own; two fit together.
    let pages = doc.paginate(20, 2, &wrapped_lines).unwrap();
    assert!(!pages.is_empty());
    let placed: usize = pages.iter().map(|p| p.paragraphs.len()).sum();
    assert_eq!(placed, 3);

    // Order is preserved across pages.
    let flattened: Vec<_> = pages
        .iter()
        .flat_map(|p| p.paragraphs.iter().copied())
        .collect();
    let mut sorted = flattened.clone();
    sorted.sort_by_key(|p| p.0);
    assert_eq!(flattened, sorted);
}

#[test]
fn pagination_emits_an_oversized_paragraph_alone() {
    let doc = parse(
        "John/NNP gave/VBD Mary/NNP a/DT very/RB long/JJ book/NN ./.\n\
         \n\
         Bill/NNP slept/VBD ./.",
    );
    // One line per page forces the long paragraph onto its own page.
    let pages = doc.paginate(5, 1, &wrapped_lines).unwrap();
    let placed: usize = pages.iter().map(|p| p.paragraphs.len()).sum();
    assert_eq!(placed, doc.paragraphs().len());
}

#[test]
fn pagination_rejects_degenerate_dimensions() {
    let doc = parse("John/NNP ran/VBD ./.");
    let err = doc.paginate(0, 10, &wrapped_lines).unwrap_err();
    assert!(matches!(err, GlossaError::InvalidArgument(_)));
    let err = doc.paginate(80, 0, &wrapped_lines).unwrap_err();
    assert!(matches!(err, GlossaError::InvalidArgument(_)));
}

#[test]
fn paragraph_kinds_default_to_body() {
    let doc = parse("John/NNP ran/VBD ./.");
    assert!(
        doc.paragraphs()
            .iter()
            .all(|p| p.kind == ParagraphKind::Body)
    );
    assert_eq!(doc.body_paragraphs().count(), doc.paragraphs().len());
}
