//! Construction-time index over bound verbals.

use crate::lexicon::binding::ConstructId;
use crate::lexicon::document::Document;

/// A read-only index of (performer, receiver, verbal) triples built from a
/// fixed collection of already-bound verbals.
///
/// Every query is a pure function over the indexed collection and may be
/// evaluated repeatedly and concurrently. Performers are a verbal's subjects;
/// receivers are its direct objects.
#[derive(Debug, Clone)]
pub struct RelationshipLookup {
    triples: Vec<Triple>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Triple {
    performer: ConstructId,
    receiver: ConstructId,
    verbal: ConstructId,
}

impl RelationshipLookup {
    /// Index a collection of bound verbals once.
    pub fn new(
        document: &Document,
        verbals: impl IntoIterator<Item = ConstructId>,
    ) -> RelationshipLookup {
        let mut triples = Vec::new();
        for verbal in verbals {
            let relations = document.relations(verbal);
            for &performer in &relations.subjects {
                for &receiver in &relations.direct_objects {
                    triples.push(Triple {
                        performer,
                        receiver,
                        verbal,
                    });
                }
            }
        }
        RelationshipLookup { triples }
    }

    /// Index every verbal of a bound document.
    pub fn from_document(document: &Document) -> RelationshipLookup {
        RelationshipLookup::new(document, document.verbals())
    }

    /// Verbals relating a given (performer, receiver) pair.
    pub fn verbals_relating(
        &self,
        performer: ConstructId,
        receiver: ConstructId,
    ) -> Vec<ConstructId> {
        self.verbals_relating_where(performer, receiver, |a, b| a == b)
    }

    /// Verbals relating a (performer, receiver) pair under a caller-supplied
    /// equivalence, supporting fuzzy/coreference-aware matching.
    pub fn verbals_relating_where<F>(
        &self,
        performer: ConstructId,
        receiver: ConstructId,
        eq: F,
    ) -> Vec<ConstructId>
    where
        F: Fn(ConstructId, ConstructId) -> bool,
    {
        let mut verbals = Vec::new();
        for triple in &self.triples {
            if eq(triple.performer, performer)
                && eq(triple.receiver, receiver)
                && !verbals.contains(&triple.verbal)
            {
                verbals.push(triple.verbal);
            }
        }
        verbals
    }

    /// Receivers for a given (performer, verbal) pair.
    pub fn receivers_for(&self, performer: ConstructId, verbal: ConstructId) -> Vec<ConstructId> {
        self.receivers_for_where(performer, verbal, |a, b| a == b)
    }

    /// Receivers for a (performer, verbal) pair under a caller-supplied
    /// equivalence.
    pub fn receivers_for_where<F>(
        &self,
        performer: ConstructId,
        verbal: ConstructId,
        eq: F,
    ) -> Vec<ConstructId>
    where
        F: Fn(ConstructId, ConstructId) -> bool,
    {
        let mut receivers = Vec::new();
        for triple in &self.triples {
            if eq(triple.performer, performer)
                && eq(triple.verbal, verbal)
                && !receivers.contains(&triple.receiver)
            {
                receivers.push(triple.receiver);
            }
        }
        receivers
    }

    /// All (performer, receiver) pairs for a given verbal.
    pub fn pairs_for(&self, verbal: ConstructId) -> Vec<(ConstructId, ConstructId)> {
        self.pairs_for_where(verbal, |a, b| a == b)
    }

    /// All (performer, receiver) pairs for a verbal under a caller-supplied
    /// equivalence.
    pub fn pairs_for_where<F>(
        &self,
        verbal: ConstructId,
        eq: F,
    ) -> Vec<(ConstructId, ConstructId)>
    where
        F: Fn(ConstructId, ConstructId) -> bool,
    {
        let mut pairs = Vec::new();
        for triple in &self.triples {
            if eq(triple.verbal, verbal) {
                let pair = (triple.performer, triple.receiver);
                if !pairs.contains(&pair) {
                    pairs.push(pair);
                }
            }
        }
        pairs
    }

    /// Number of indexed triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// True when nothing was indexed.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}
