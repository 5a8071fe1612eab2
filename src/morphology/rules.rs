//! Ordered suffix transformation rule tables, one per part of speech.

/// A single `(suffix, replacement-ending)` transformation rule.
///
/// Root finding strips `suffix` and appends `replacement`; form generation is
/// the syntactic inverse, stripping `replacement` and appending `suffix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
}

const fn rule(suffix: &'static str, replacement: &'static str) -> SuffixRule {
    SuffixRule {
        suffix,
        replacement,
    }
}

/// An ordered rule table for one part of speech.
///
/// Order matters: root finding returns the first rule whose suffix matches
/// the input, so longer and more specific suffixes come first.
#[derive(Debug, Clone, Copy)]
pub struct PosRules {
    pub name: &'static str,
    pub rules: &'static [SuffixRule],
}

/// Noun detachment rules.
pub const NOUN_RULES: PosRules = PosRules {
    name: "noun",
    rules: &[
        rule("ches", "ch"),
        rule("shes", "sh"),
        rule("ses", "s"),
        rule("xes", "x"),
        rule("zes", "z"),
        rule("ies", "y"),
        rule("men", "man"),
        rule("s", ""),
    ],
};

/// Verb detachment rules.
pub const VERB_RULES: PosRules = PosRules {
    name: "verb",
    rules: &[
        rule("ies", "y"),
        rule("ing", "e"),
        rule("ing", ""),
        rule("ches", "ch"),
        rule("shes", "sh"),
        rule("es", "e"),
        rule("es", ""),
        rule("ed", "e"),
        rule("ed", ""),
        rule("s", ""),
    ],
};

/// Adverb and adjective detachment rules.
pub const ADVERB_RULES: PosRules = PosRules {
    name: "adverb",
    rules: &[
        rule("iest", "y"),
        rule("ier", "y"),
        rule("est", "e"),
        rule("est", ""),
        rule("er", "e"),
        rule("er", ""),
    ],
};

impl PosRules {
    /// Apply the first matching rule to `word`, or return `None` when no
    /// suffix matches.
    pub fn strip(&self, word: &str) -> Option<String> {
        for rule in self.rules {
            if word.len() > rule.suffix.len() && word.ends_with(rule.suffix) {
                let stem = &word[..word.len() - rule.suffix.len()];
                return Some(format!("{stem}{}", rule.replacement));
            }
        }
        None
    }

    /// Apply every rule forward to `root`, emitting each derived surface
    /// form.
    pub fn derive(&self, root: &str) -> Vec<String> {
        let mut forms = Vec::new();
        for rule in self.rules {
            if root.len() > rule.replacement.len() && root.ends_with(rule.replacement) {
                let stem = &root[..root.len() - rule.replacement.len()];
                let form = format!("{stem}{}", rule.suffix);
                if !forms.contains(&form) {
                    forms.push(form);
                }
            }
        }
        forms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noun_strip_first_match_wins() {
        assert_eq!(NOUN_RULES.strip("churches"), Some("church".to_string()));
        assert_eq!(NOUN_RULES.strip("flies"), Some("fly".to_string()));
        assert_eq!(NOUN_RULES.strip("dogs"), Some("dog".to_string()));
        assert_eq!(NOUN_RULES.strip("firemen"), Some("fireman".to_string()));
        assert_eq!(NOUN_RULES.strip("dog"), None);
    }

    #[test]
    fn test_verb_derive_covers_inflections() {
        let forms = VERB_RULES.derive("walk");
        assert!(forms.contains(&"walks".to_string()));
        assert!(forms.contains(&"walked".to_string()));
        assert!(forms.contains(&"walking".to_string()));
    }

    #[test]
    fn test_verb_derive_e_final_root() {
        let forms = VERB_RULES.derive("love");
        assert!(forms.contains(&"loves".to_string()));
        assert!(forms.contains(&"loved".to_string()));
        assert!(forms.contains(&"loving".to_string()));
    }

    #[test]
    fn test_strip_never_empties_the_word() {
        // "s" alone must not strip to an empty string.
        assert_eq!(NOUN_RULES.strip("s"), None);
    }
}
