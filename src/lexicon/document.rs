//! The root document aggregate and its reification pass.

use crate::error::{GlossaError, Result};
use crate::lexicon::binding::{ConstructId, Relations, push_unique, remove_binding};
use crate::lexicon::clause::{Clause, ClauseId};
use crate::lexicon::paragraph::{Paragraph, ParagraphId, ParagraphKind};
use crate::lexicon::phrase::{Phrase, PhraseId, PhraseKind};
use crate::lexicon::sentence::{Sentence, SentenceId};
use crate::lexicon::word::{Word, WordId};

/// The raw entity stores a parser hands to [`Document::from_parts`].
///
/// Ids inside each store must match the entity's index in its `Vec`.
#[derive(Debug, Default)]
pub struct DocumentParts {
    pub words: Vec<Word>,
    pub phrases: Vec<Phrase>,
    pub clauses: Vec<Clause>,
    pub sentences: Vec<Sentence>,
    pub paragraphs: Vec<Paragraph>,
}

/// A non-owning grouping of existing paragraphs, used for pagination.
/// A page never outlives its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Member paragraphs, in document order.
    pub paragraphs: Vec<ParagraphId>,
}

/// The root aggregate: an ordered sequence of paragraphs plus a title.
///
/// Owns all descendant entities transitively in flat id-indexed stores.
/// Construction triggers a one-time reification pass that computes and caches
/// the flattened sentence/phrase/word sequences, previous/next adjacency at
/// the word and phrase levels, and parent back-references from every
/// descendant. The parts must not be mutated after construction; reification
/// runs exactly once per document instance.
#[derive(Debug)]
pub struct Document {
    title: String,
    words: Vec<Word>,
    phrases: Vec<Phrase>,
    clauses: Vec<Clause>,
    sentences: Vec<Sentence>,
    paragraphs: Vec<Paragraph>,
    /// Primary sentence sequence: verb-bearing sentences in document order.
    sentence_order: Vec<SentenceId>,
    /// Flattened phrases of the primary sentence sequence.
    phrase_order: Vec<PhraseId>,
    /// Flattened words of the primary sentence sequence, including each
    /// sentence's terminal punctuation.
    word_order: Vec<WordId>,
}

impl Document {
    /// Build a document from parsed parts and reify it.
    ///
    /// An empty paragraph sequence yields a document with empty derived
    /// sequences, not an error.
    pub fn from_parts(parts: DocumentParts, title: impl Into<String>) -> Document {
        let mut doc = Document {
            title: title.into(),
            words: parts.words,
            phrases: parts.phrases,
            clauses: parts.clauses,
            sentences: parts.sentences,
            paragraphs: parts.paragraphs,
            sentence_order: Vec::new(),
            phrase_order: Vec::new(),
            word_order: Vec::new(),
        };
        doc.reify();
        doc
    }

    /// The one-time reification pass.
    fn reify(&mut self) {
        self.link_parents();
        self.cache_sentence_views();
        self.collect_primary_sequences();
        self.link_adjacency();
    }

    /// Set every descendant's paragraph/sentence/clause back-reference.
    fn link_parents(&mut self) {
        for paragraph_index in 0..self.paragraphs.len() {
            let paragraph_id = ParagraphId(paragraph_index as u32);
            for sentence_id in self.paragraphs[paragraph_index].sentences.clone() {
                self.sentences[sentence_id.0 as usize].paragraph = Some(paragraph_id);
                let clause_ids = self.sentences[sentence_id.0 as usize].clauses.clone();
                if let Some(terminator) = self.sentences[sentence_id.0 as usize].terminator {
                    let word = &mut self.words[terminator.0 as usize];
                    word.sentence = Some(sentence_id);
                    word.paragraph = Some(paragraph_id);
                }
                for clause_id in clause_ids {
                    self.clauses[clause_id.0 as usize].sentence = Some(sentence_id);
                    for phrase_id in self.clauses[clause_id.0 as usize].phrases.clone() {
                        let phrase = &mut self.phrases[phrase_id.0 as usize];
                        phrase.clause = Some(clause_id);
                        phrase.sentence = Some(sentence_id);
                        phrase.paragraph = Some(paragraph_id);
                        for word_id in phrase.words.clone() {
                            let word = &mut self.words[word_id.0 as usize];
                            word.phrase = Some(phrase_id);
                            word.sentence = Some(sentence_id);
                            word.paragraph = Some(paragraph_id);
                        }
                    }
                }
            }
        }
    }

    /// Compute each sentence's flattened word/phrase views and verb flag.
    fn cache_sentence_views(&mut self) {
        for sentence_index in 0..self.sentences.len() {
            let mut words = Vec::new();
            let mut phrases = Vec::new();
            let mut has_verb = false;
            for clause_id in self.sentences[sentence_index].clauses.clone() {
                for phrase_id in self.clauses[clause_id.0 as usize].phrases.clone() {
                    phrases.push(phrase_id);
                    for &word_id in &self.phrases[phrase_id.0 as usize].words {
                        if self.words[word_id.0 as usize].kind.is_verb() {
                            has_verb = true;
                        }
                        words.push(word_id);
                    }
                }
            }
            if let Some(terminator) = self.sentences[sentence_index].terminator {
                words.push(terminator);
            }
            let sentence = &mut self.sentences[sentence_index];
            sentence.words = words;
            sentence.phrases = phrases;
            sentence.has_verb = has_verb;
        }
    }

    /// Retain verb-bearing sentences and flatten their phrases and words.
    fn collect_primary_sequences(&mut self) {
        self.sentence_order.clear();
        self.phrase_order.clear();
        self.word_order.clear();
        for paragraph in &self.paragraphs {
            for &sentence_id in &paragraph.sentences {
                let sentence = &self.sentences[sentence_id.0 as usize];
                if !sentence.has_verb {
                    continue;
                }
                self.sentence_order.push(sentence_id);
                self.phrase_order.extend(sentence.phrases.iter().copied());
                self.word_order.extend(sentence.words.iter().copied());
            }
        }
    }

    /// Set previous/next links at the word and phrase levels by linear scan.
    fn link_adjacency(&mut self) {
        let word_order = self.word_order.clone();
        for (index, &word_id) in word_order.iter().enumerate() {
            let word = &mut self.words[word_id.0 as usize];
            word.prev = index.checked_sub(1).map(|i| word_order[i]);
            word.next = word_order.get(index + 1).copied();
        }
        let phrase_order = self.phrase_order.clone();
        for (index, &phrase_id) in phrase_order.iter().enumerate() {
            let phrase = &mut self.phrases[phrase_id.0 as usize];
            phrase.prev = index.checked_sub(1).map(|i| phrase_order[i]);
            phrase.next = phrase_order.get(index + 1).copied();
        }
    }

    // ------------------------------------------------------------------
    // Read-only traversal surface
    // ------------------------------------------------------------------

    /// Document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All paragraphs, in document order.
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Paragraphs counting toward the primary sequence (body text only).
    pub fn body_paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs
            .iter()
            .filter(|p| p.kind == ParagraphKind::Body)
    }

    /// The primary sentence sequence (verb-bearing sentences).
    pub fn sentences(&self) -> &[SentenceId] {
        &self.sentence_order
    }

    /// Flattened phrases of the primary sentence sequence.
    pub fn phrases(&self) -> &[PhraseId] {
        &self.phrase_order
    }

    /// Flattened words of the primary sentence sequence.
    pub fn words(&self) -> &[WordId] {
        &self.word_order
    }

    /// Look up a word by id.
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id.0 as usize]
    }

    /// Look up a word mutably by id.
    pub fn word_mut(&mut self, id: WordId) -> &mut Word {
        &mut self.words[id.0 as usize]
    }

    /// Look up a phrase by id.
    pub fn phrase(&self, id: PhraseId) -> &Phrase {
        &self.phrases[id.0 as usize]
    }

    /// Look up a clause by id.
    pub fn clause(&self, id: ClauseId) -> &Clause {
        &self.clauses[id.0 as usize]
    }

    /// Look up a sentence by id.
    pub fn sentence(&self, id: SentenceId) -> &Sentence {
        &self.sentences[id.0 as usize]
    }

    /// Look up a paragraph by id.
    pub fn paragraph(&self, id: ParagraphId) -> &Paragraph {
        &self.paragraphs[id.0 as usize]
    }

    /// Space-joined text of a phrase.
    pub fn phrase_text(&self, id: PhraseId) -> String {
        let phrase = self.phrase(id);
        let mut text = String::new();
        for (index, &word_id) in phrase.words.iter().enumerate() {
            if index > 0 {
                text.push(' ');
            }
            text.push_str(&self.word(word_id).text);
        }
        text
    }

    /// Text of a construct: the word's text, or the phrase's composed text.
    pub fn construct_text(&self, id: ConstructId) -> String {
        match id {
            ConstructId::Word(word_id) => self.word(word_id).text.clone(),
            ConstructId::Phrase(phrase_id) => self.phrase_text(phrase_id),
        }
    }

    /// Member words of a construct.
    pub fn construct_words(&self, id: ConstructId) -> Vec<WordId> {
        match id {
            ConstructId::Word(word_id) => vec![word_id],
            ConstructId::Phrase(phrase_id) => self.phrase(phrase_id).words.clone(),
        }
    }

    /// Document-relative position of a construct (its first word).
    pub fn construct_position(&self, id: ConstructId) -> u32 {
        match id {
            ConstructId::Word(word_id) => self.word(word_id).position,
            ConstructId::Phrase(phrase_id) => self
                .phrase(phrase_id)
                .words
                .first()
                .map(|&w| self.word(w).position)
                .unwrap_or(0),
        }
    }

    /// Constructs acting as predicates: verb phrases, plus verb words that
    /// ended up outside any phrase.
    pub fn verbals(&self) -> Vec<ConstructId> {
        let mut verbals = Vec::new();
        for &phrase_id in &self.phrase_order {
            if self.phrase(phrase_id).kind.is_verbal() {
                verbals.push(ConstructId::Phrase(phrase_id));
            }
        }
        for &word_id in &self.word_order {
            let word = self.word(word_id);
            if word.kind.is_verbal() && word.phrase.is_none() {
                verbals.push(ConstructId::Word(word_id));
            }
        }
        verbals
    }

    /// Constructs acting as nominals: noun phrases, plus entity words that
    /// ended up outside any phrase.
    pub fn entities(&self) -> Vec<ConstructId> {
        let mut entities = Vec::new();
        for &phrase_id in &self.phrase_order {
            if self.phrase(phrase_id).kind.is_entity() {
                entities.push(ConstructId::Phrase(phrase_id));
            }
        }
        for &word_id in &self.word_order {
            let word = self.word(word_id);
            if word.kind.is_entity() && word.phrase.is_none() {
                entities.push(ConstructId::Word(word_id));
            }
        }
        entities
    }

    /// Relationship bindings of a construct.
    pub fn relations(&self, id: ConstructId) -> &Relations {
        match id {
            ConstructId::Word(word_id) => &self.word(word_id).relations,
            ConstructId::Phrase(phrase_id) => &self.phrase(phrase_id).relations,
        }
    }

    fn relations_mut(&mut self, id: ConstructId) -> &mut Relations {
        match id {
            ConstructId::Word(word_id) => &mut self.words[word_id.0 as usize].relations,
            ConstructId::Phrase(phrase_id) => &mut self.phrases[phrase_id.0 as usize].relations,
        }
    }

    // ------------------------------------------------------------------
    // Binding methods: every binding is created in pairs, never one-sided.
    // ------------------------------------------------------------------

    /// Bind `entity` as a subject of `verbal`.
    pub fn bind_subject(&mut self, verbal: ConstructId, entity: ConstructId) {
        push_unique(&mut self.relations_mut(entity).subject_of, verbal);
        push_unique(&mut self.relations_mut(verbal).subjects, entity);
    }

    /// Bind `entity` as a direct object of `verbal`.
    pub fn bind_direct_object(&mut self, verbal: ConstructId, entity: ConstructId) {
        push_unique(&mut self.relations_mut(entity).direct_object_of, verbal);
        push_unique(&mut self.relations_mut(verbal).direct_objects, entity);
    }

    /// Bind `entity` as an indirect object of `verbal`.
    pub fn bind_indirect_object(&mut self, verbal: ConstructId, entity: ConstructId) {
        push_unique(&mut self.relations_mut(entity).indirect_object_of, verbal);
        push_unique(&mut self.relations_mut(verbal).indirect_objects, entity);
    }

    /// Bind `descriptor` as describing `entity`.
    ///
    /// `describes` is inherently singular: re-binding moves the descriptor to
    /// the new entity, unbinding the old pair so no one-sided binding remains.
    pub fn bind_descriptor(&mut self, entity: ConstructId, descriptor: ConstructId) {
        if let Some(previous) = self.relations_mut(descriptor).describes
            && previous != entity
        {
            remove_binding(&mut self.relations_mut(previous).descriptors, descriptor);
        }
        self.relations_mut(descriptor).describes = Some(entity);
        push_unique(&mut self.relations_mut(entity).descriptors, descriptor);
    }

    /// Bind `modifier` as modifying `target` (a verbal or a descriptor).
    ///
    /// `modifies` is inherently singular and overwrites like `describes`.
    pub fn bind_modifier(&mut self, target: ConstructId, modifier: ConstructId) {
        if let Some(previous) = self.relations_mut(modifier).modifies
            && previous != target
        {
            remove_binding(&mut self.relations_mut(previous).modifiers, modifier);
        }
        self.relations_mut(modifier).modifies = Some(target);
        push_unique(&mut self.relations_mut(target).modifiers, modifier);
    }

    /// Bind `referencer` (a pronoun, or an aliased subject) as referring to
    /// `entity`. `refers_to` is an aggregate: a referencer may accumulate
    /// several antecedents.
    pub fn bind_reference(&mut self, entity: ConstructId, referencer: ConstructId) {
        push_unique(&mut self.relations_mut(referencer).refers_to, entity);
        push_unique(&mut self.relations_mut(entity).referencers, referencer);
    }

    /// Bind `possession` as possessed by `possessor`.
    pub fn bind_possession(&mut self, possessor: ConstructId, possession: ConstructId) {
        push_unique(&mut self.relations_mut(possessor).possessions, possession);
        push_unique(&mut self.relations_mut(possession).possessors, possessor);
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    /// Text of a paragraph: its sentences' words, space-joined.
    pub fn paragraph_text(&self, id: ParagraphId) -> String {
        let mut text = String::new();
        for &sentence_id in &self.paragraph(id).sentences {
            for &word_id in &self.sentence(sentence_id).words {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(&self.word(word_id).text);
            }
        }
        text
    }

    /// Greedily pack consecutive paragraphs into pages.
    ///
    /// `measure` maps a paragraph's text and the line length to the number of
    /// lines the paragraph occupies. A paragraph whose own content already
    /// exceeds one page is force-emitted alone rather than looping forever.
    ///
    /// Pure and restartable: the layout is materialized eagerly into a `Vec`
    /// each call, and re-calling with different dimensions recomputes it from
    /// scratch. Fails fast with an invalid-argument error when `line_length`
    /// or `lines_per_page` is below 1, before touching any paragraph.
    pub fn paginate(
        &self,
        line_length: usize,
        lines_per_page: usize,
        measure: &dyn Fn(&str, usize) -> usize,
    ) -> Result<Vec<Page>> {
        if line_length < 1 {
            return Err(GlossaError::invalid_argument(format!(
                "line length must be at least 1, got {line_length}"
            )));
        }
        if lines_per_page < 1 {
            return Err(GlossaError::invalid_argument(format!(
                "lines per page must be at least 1, got {lines_per_page}"
            )));
        }

        let mut pages = Vec::new();
        let mut current = Vec::new();
        let mut used_lines = 0usize;
        for paragraph_index in 0..self.paragraphs.len() {
            let paragraph_id = ParagraphId(paragraph_index as u32);
            let lines = measure(&self.paragraph_text(paragraph_id), line_length);
            if !current.is_empty() && used_lines + lines > lines_per_page {
                pages.push(Page {
                    paragraphs: std::mem::take(&mut current),
                });
                used_lines = 0;
            }
            current.push(paragraph_id);
            used_lines += lines;
            if used_lines >= lines_per_page {
                pages.push(Page {
                    paragraphs: std::mem::take(&mut current),
                });
                used_lines = 0;
            }
        }
        if !current.is_empty() {
            pages.push(Page {
                paragraphs: current,
            });
        }
        Ok(pages)
    }
}
