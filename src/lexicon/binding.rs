//! Relationship binding attributes shared by words and phrases.

use serde::{Deserialize, Serialize};

use crate::lexicon::phrase::PhraseId;
use crate::lexicon::word::WordId;

/// Identifier of a construct that can participate in a grammatical
/// relationship: either a single word or a whole phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConstructId {
    Word(WordId),
    Phrase(PhraseId),
}

/// Bidirectional relationship bindings of a word or phrase.
///
/// Every binding is created in pairs by the binder (through the document's
/// `bind_*` methods) and never exists on only one side. Most relationships
/// are additive sets; `describes` and `modifies` are inherently singular and
/// overwrite on re-binding.
#[derive(Debug, Clone, Default)]
pub struct Relations {
    /// Verbals this entity is the subject of.
    pub subject_of: Vec<ConstructId>,
    /// Entities that are subjects of this verbal.
    pub subjects: Vec<ConstructId>,
    /// Verbals this entity is the direct object of.
    pub direct_object_of: Vec<ConstructId>,
    /// Entities that are direct objects of this verbal.
    pub direct_objects: Vec<ConstructId>,
    /// Verbals this entity is the indirect object of.
    pub indirect_object_of: Vec<ConstructId>,
    /// Entities that are indirect objects of this verbal.
    pub indirect_objects: Vec<ConstructId>,
    /// Descriptors (adjectives) describing this entity.
    pub descriptors: Vec<ConstructId>,
    /// The entity this descriptor describes.
    pub describes: Option<ConstructId>,
    /// Modifiers (adverbs) modifying this verbal or descriptor.
    pub modifiers: Vec<ConstructId>,
    /// The target this modifier modifies.
    pub modifies: Option<ConstructId>,
    /// Referencers (pronouns) that refer to this entity.
    pub referencers: Vec<ConstructId>,
    /// Antecedents this referencer refers to. A pronoun may be bound to more
    /// than one antecedent (e.g. "they").
    pub refers_to: Vec<ConstructId>,
    /// Entities possessed by this entity.
    pub possessions: Vec<ConstructId>,
    /// Entities that possess this entity.
    pub possessors: Vec<ConstructId>,
}

impl Relations {
    /// True if no binding of any kind has been recorded.
    pub fn is_empty(&self) -> bool {
        self.subject_of.is_empty()
            && self.subjects.is_empty()
            && self.direct_object_of.is_empty()
            && self.direct_objects.is_empty()
            && self.indirect_object_of.is_empty()
            && self.indirect_objects.is_empty()
            && self.descriptors.is_empty()
            && self.describes.is_none()
            && self.modifiers.is_empty()
            && self.modifies.is_none()
            && self.referencers.is_empty()
            && self.refers_to.is_empty()
            && self.possessions.is_empty()
            && self.possessors.is_empty()
    }
}

/// Append `id` unless already present, preserving insertion order.
pub(crate) fn push_unique(list: &mut Vec<ConstructId>, id: ConstructId) {
    if !list.contains(&id) {
        list.push(id);
    }
}

/// Remove `id` from `list` if present.
pub(crate) fn remove_binding(list: &mut Vec<ConstructId>, id: ConstructId) {
    list.retain(|&existing| existing != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_unique_is_additive_not_duplicating() {
        let mut list = Vec::new();
        let a = ConstructId::Word(WordId(0));
        push_unique(&mut list, a);
        push_unique(&mut list, a);
        push_unique(&mut list, ConstructId::Word(WordId(1)));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_empty_relations() {
        let relations = Relations::default();
        assert!(relations.is_empty());
    }
}
