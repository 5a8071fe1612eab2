//! Conversion of tagged token pairs into the lexical hierarchy.
//!
//! The parser consumes `(surface-text, grammatical-tag)` pairs already
//! produced by an external tagger, turns them into typed word variants, and
//! assembles phrases, clauses, sentences, and paragraphs. A malformed pair
//! yields a generic fallback word variant rather than failing the document.

use log::debug;

use crate::lexicon::clause::{Clause, ClauseId, ConjunctiveJoin};
use crate::lexicon::document::{Document, DocumentParts};
use crate::lexicon::paragraph::{Paragraph, ParagraphId, ParagraphKind};
use crate::lexicon::phrase::{Phrase, PhraseId, PhraseKind};
use crate::lexicon::sentence::{Sentence, SentenceId};
use crate::lexicon::word::{PronounKind, PunctuationKind, Word, WordId, WordKind};

/// One `(surface-text, grammatical-tag)` pair from the external tagger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> TaggedToken {
        TaggedToken {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

/// A sentence's worth of tagged tokens.
pub type TaggedSentence = Vec<TaggedToken>;

/// A paragraph's worth of tagged sentences, with its kind.
#[derive(Debug, Clone)]
pub struct TaggedParagraph {
    pub kind: ParagraphKind,
    pub sentences: Vec<TaggedSentence>,
}

impl TaggedParagraph {
    pub fn body(sentences: Vec<TaggedSentence>) -> TaggedParagraph {
        TaggedParagraph {
            kind: ParagraphKind::Body,
            sentences,
        }
    }
}

/// Parser that assembles a [`Document`] from tagged tokens.
#[derive(Debug, Clone, Default)]
pub struct DocumentParser;

impl DocumentParser {
    pub fn new() -> DocumentParser {
        DocumentParser
    }

    /// Parse tagged paragraphs into a reified document.
    pub fn parse(&self, title: &str, paragraphs: &[TaggedParagraph]) -> Document {
        let mut builder = PartsBuilder::default();
        for tagged_paragraph in paragraphs {
            builder.push_paragraph(tagged_paragraph);
        }
        Document::from_parts(builder.parts, title)
    }

    /// Parse `word/TAG` formatted text: one sentence per line, blank line
    /// between paragraphs.
    pub fn parse_tagged_text(&self, title: &str, text: &str) -> Document {
        let mut paragraphs = Vec::new();
        let mut sentences = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                if !sentences.is_empty() {
                    paragraphs.push(TaggedParagraph::body(std::mem::take(&mut sentences)));
                }
                continue;
            }
            let sentence: TaggedSentence = line
                .split_whitespace()
                .map(|token| match token.rsplit_once('/') {
                    Some((text, tag)) => TaggedToken::new(text, tag),
                    None => {
                        debug!("tagged token without a tag separator: {token}");
                        TaggedToken::new(token, "")
                    }
                })
                .collect();
            sentences.push(sentence);
        }
        if !sentences.is_empty() {
            paragraphs.push(TaggedParagraph::body(sentences));
        }
        self.parse(title, &paragraphs)
    }
}

/// Accumulates document parts while walking tagged input.
#[derive(Default)]
struct PartsBuilder {
    parts: DocumentParts,
    position: u32,
}

impl PartsBuilder {
    fn push_paragraph(&mut self, tagged: &TaggedParagraph) {
        let mut sentence_ids = Vec::new();
        for sentence in &tagged.sentences {
            if sentence.is_empty() {
                continue;
            }
            sentence_ids.push(self.push_sentence(sentence));
        }
        let paragraph_id = ParagraphId(self.parts.paragraphs.len() as u32);
        self.parts
            .paragraphs
            .push(Paragraph::new(paragraph_id, tagged.kind, sentence_ids));
    }

    fn new_word(&mut self, token: &TaggedToken) -> WordId {
        let kind = if token.text.is_empty() {
            debug!("malformed tagged pair with empty text, using fallback variant");
            WordKind::Unknown
        } else {
            WordKind::from_tag(&token.tag, &token.text)
        };
        let id = WordId(self.parts.words.len() as u32);
        self.parts
            .words
            .push(Word::new(id, token.text.clone(), kind, self.position));
        self.position += 1;
        id
    }

    fn new_phrase(&mut self, kind: PhraseKind, words: Vec<WordId>) -> PhraseId {
        let id = PhraseId(self.parts.phrases.len() as u32);
        for &word_id in &words {
            self.parts.words[word_id.0 as usize].phrase = Some(id);
        }
        self.parts.phrases.push(Phrase::new(id, kind, words));
        id
    }

    fn new_clause(&mut self, phrases: Vec<PhraseId>) -> ClauseId {
        let id = ClauseId(self.parts.clauses.len() as u32);
        self.parts.clauses.push(Clause::new(id, phrases));
        id
    }

    /// Chunk one tagged sentence into phrases and clauses.
    fn push_sentence(&mut self, tokens: &[TaggedToken]) -> SentenceId {
        let mut chunk_kind: Option<PhraseKind> = None;
        let mut chunk_words: Vec<WordId> = Vec::new();
        let mut clause_phrases: Vec<PhraseId> = Vec::new();
        let mut clause_ids: Vec<ClauseId> = Vec::new();
        // Conjunctions waiting for the clause to their right to close.
        let mut pending_joins: Vec<(WordId, ClauseId)> = Vec::new();
        let mut joins: Vec<ConjunctiveJoin> = Vec::new();
        let mut terminator: Option<WordId> = None;

        // Tag lookahead for clause splitting at conjunctions.
        let verb_ahead: Vec<bool> = {
            let mut ahead = vec![false; tokens.len() + 1];
            for index in (0..tokens.len()).rev() {
                let is_verb = WordKind::from_tag(&tokens[index].tag, &tokens[index].text).is_verb();
                ahead[index] = is_verb || ahead[index + 1];
            }
            ahead
        };

        for (index, token) in tokens.iter().enumerate() {
            let word_id = self.new_word(token);
            let kind = self.parts.words[word_id.0 as usize].kind;
            match kind {
                WordKind::Determiner
                | WordKind::Number
                | WordKind::PossessiveMarker
                | WordKind::Pronoun(PronounKind::Possessive) => {
                    // A determiner after a completed noun head ("Mary a book")
                    // starts the next noun phrase.
                    let head_complete = chunk_words.iter().any(|&w| {
                        let kind = self.parts.words[w.0 as usize].kind;
                        kind.is_noun() || kind.is_pronoun()
                    });
                    match chunk_kind {
                        Some(PhraseKind::Noun) if !head_complete => chunk_words.push(word_id),
                        Some(PhraseKind::Prepositional) => chunk_words.push(word_id),
                        _ => {
                            self.flush_chunk(&mut chunk_kind, &mut chunk_words, &mut clause_phrases);
                            chunk_kind = Some(PhraseKind::Noun);
                            chunk_words.push(word_id);
                        }
                    }
                }
                WordKind::Adjective(_) => match chunk_kind {
                    Some(PhraseKind::Noun)
                    | Some(PhraseKind::Prepositional)
                    | Some(PhraseKind::Adjective) => chunk_words.push(word_id),
                    _ => {
                        self.flush_chunk(&mut chunk_kind, &mut chunk_words, &mut clause_phrases);
                        chunk_kind = Some(PhraseKind::Adjective);
                        chunk_words.push(word_id);
                    }
                },
                WordKind::Noun(_) | WordKind::Pronoun(_) => match chunk_kind {
                    Some(PhraseKind::Noun) | Some(PhraseKind::Prepositional) => {
                        chunk_words.push(word_id);
                    }
                    Some(PhraseKind::Adjective) => {
                        // "red book": the adjective run was the front of a
                        // noun phrase after all.
                        chunk_kind = Some(PhraseKind::Noun);
                        chunk_words.push(word_id);
                    }
                    _ => {
                        self.flush_chunk(&mut chunk_kind, &mut chunk_words, &mut clause_phrases);
                        chunk_kind = Some(PhraseKind::Noun);
                        chunk_words.push(word_id);
                    }
                },
                WordKind::Verb(_) => match chunk_kind {
                    Some(PhraseKind::Verb) => chunk_words.push(word_id),
                    Some(PhraseKind::Adverb) => {
                        // "quickly ran": adverb run opened a verb phrase.
                        chunk_kind = Some(PhraseKind::Verb);
                        chunk_words.push(word_id);
                    }
                    _ => {
                        self.flush_chunk(&mut chunk_kind, &mut chunk_words, &mut clause_phrases);
                        chunk_kind = Some(PhraseKind::Verb);
                        chunk_words.push(word_id);
                    }
                },
                WordKind::Adverb(_) => match chunk_kind {
                    Some(PhraseKind::Verb) => chunk_words.push(word_id),
                    _ => {
                        self.flush_chunk(&mut chunk_kind, &mut chunk_words, &mut clause_phrases);
                        chunk_kind = Some(PhraseKind::Adverb);
                        chunk_words.push(word_id);
                    }
                },
                WordKind::InfinitivalTo => match chunk_kind {
                    Some(PhraseKind::Verb) => chunk_words.push(word_id),
                    _ => {
                        self.flush_chunk(&mut chunk_kind, &mut chunk_words, &mut clause_phrases);
                        chunk_kind = Some(PhraseKind::Verb);
                        chunk_words.push(word_id);
                    }
                },
                WordKind::Preposition => {
                    self.flush_chunk(&mut chunk_kind, &mut chunk_words, &mut clause_phrases);
                    chunk_kind = Some(PhraseKind::Prepositional);
                    chunk_words.push(word_id);
                }
                WordKind::Conjunction => {
                    self.flush_chunk(&mut chunk_kind, &mut chunk_words, &mut clause_phrases);
                    // Split the clause when a predication follows.
                    if !clause_phrases.is_empty() && verb_ahead[index + 1] {
                        let clause_id = self.new_clause(std::mem::take(&mut clause_phrases));
                        clause_ids.push(clause_id);
                        // Earlier conjunctions were waiting on this clause as
                        // their right side.
                        for (word, left) in pending_joins.drain(..) {
                            joins.push(ConjunctiveJoin {
                                word,
                                left: Some(left),
                                right: Some(clause_id),
                            });
                        }
                        pending_joins.push((word_id, clause_id));
                    }
                }
                WordKind::Punctuation(PunctuationKind::SentenceTerminal) => {
                    self.flush_chunk(&mut chunk_kind, &mut chunk_words, &mut clause_phrases);
                    terminator = Some(word_id);
                }
                WordKind::Punctuation(_) => {
                    self.flush_chunk(&mut chunk_kind, &mut chunk_words, &mut clause_phrases);
                }
                WordKind::Interjection | WordKind::Unknown => {
                    self.flush_chunk(&mut chunk_kind, &mut chunk_words, &mut clause_phrases);
                    let phrase_id = self.new_phrase(PhraseKind::Unknown, vec![word_id]);
                    clause_phrases.push(phrase_id);
                }
            }
        }

        self.flush_chunk(&mut chunk_kind, &mut chunk_words, &mut clause_phrases);
        if !clause_phrases.is_empty() || clause_ids.is_empty() {
            let clause_id = self.new_clause(clause_phrases);
            clause_ids.push(clause_id);
        }
        let last_clause = *clause_ids.last().expect("at least one clause");
        // Remaining conjunctions close against the final clause; a trailing
        // conjunction with nothing to its right stays half-open.
        for (word, left) in pending_joins {
            let right = if left == last_clause {
                None
            } else {
                Some(last_clause)
            };
            joins.push(ConjunctiveJoin {
                word,
                left: Some(left),
                right,
            });
        }

        let sentence_id = SentenceId(self.parts.sentences.len() as u32);
        let mut sentence = Sentence::new(sentence_id, clause_ids);
        sentence.joins = joins;
        sentence.terminator = terminator;
        self.parts.sentences.push(sentence);
        sentence_id
    }

    fn flush_chunk(
        &mut self,
        chunk_kind: &mut Option<PhraseKind>,
        chunk_words: &mut Vec<WordId>,
        clause_phrases: &mut Vec<PhraseId>,
    ) {
        if let Some(kind) = chunk_kind.take()
            && !chunk_words.is_empty()
        {
            let phrase_id = self.new_phrase(kind, std::mem::take(chunk_words));
            clause_phrases.push(phrase_id);
        }
        chunk_words.clear();
    }
}
