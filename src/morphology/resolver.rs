//! Per-part-of-speech morphological resolution.

use crate::morphology::exceptions::ExceptionTable;
use crate::morphology::rules::{ADVERB_RULES, NOUN_RULES, PosRules, VERB_RULES};

/// Root-finding and form-generation for one part of speech.
///
/// Both operations are total: an unresolvable word round-trips to itself.
#[derive(Debug, Clone)]
pub struct Resolver {
    rules: PosRules,
    exceptions: ExceptionTable,
}

impl Resolver {
    /// Create a resolver from a rule table and an exception table.
    pub fn new(rules: PosRules, exceptions: ExceptionTable) -> Resolver {
        Resolver { rules, exceptions }
    }

    /// Noun resolver.
    pub fn noun(exceptions: ExceptionTable) -> Resolver {
        Resolver::new(NOUN_RULES, exceptions)
    }

    /// Verb resolver.
    pub fn verb(exceptions: ExceptionTable) -> Resolver {
        Resolver::new(VERB_RULES, exceptions)
    }

    /// Adverb/adjective resolver.
    pub fn adverb(exceptions: ExceptionTable) -> Resolver {
        Resolver::new(ADVERB_RULES, exceptions)
    }

    /// Name of the part of speech this resolver handles.
    pub fn name(&self) -> &'static str {
        self.rules.name
    }

    /// Find the root of a surface form.
    ///
    /// Checks the exception table first (irregular forms bypass rule-based
    /// transformation entirely), then applies the first matching suffix rule,
    /// and otherwise returns the input unchanged.
    pub fn find_root(&self, word: &str) -> String {
        let word = word.trim().to_lowercase();
        if let Some(root) = self.exceptions.root_of(&word) {
            return root.to_string();
        }
        self.rules.strip(&word).unwrap_or(word)
    }

    /// All plausible roots of a surface form, most specific first: the
    /// exception entry when present, then each matching suffix rule's result
    /// in table order, then the input itself.
    ///
    /// The synonym engine probes its word index with every candidate, which
    /// stands in for dictionary validation of the rule-derived stems.
    pub fn candidate_roots(&self, word: &str) -> Vec<String> {
        let word = word.trim().to_lowercase();
        let mut candidates = Vec::new();
        if let Some(root) = self.exceptions.root_of(&word) {
            candidates.push(root.to_string());
        }
        for rule in self.rules.rules {
            if word.len() > rule.suffix.len() && word.ends_with(rule.suffix) {
                let stem = &word[..word.len() - rule.suffix.len()];
                let candidate = format!("{stem}{}", rule.replacement);
                if !candidates.contains(&candidate) {
                    candidates.push(candidate);
                }
            }
        }
        if !candidates.contains(&word) {
            candidates.push(word);
        }
        candidates
    }

    /// Generate every derived surface form of a root.
    ///
    /// The result contains the root itself, the forward application of every
    /// suffix rule, and any exception-table entries that list the root as
    /// their value.
    pub fn get_forms(&self, root: &str) -> Vec<String> {
        let root = root.trim().to_lowercase();
        let mut forms = vec![root.clone()];
        for form in self.exceptions.forms_of(&root) {
            if !forms.contains(form) {
                forms.push(form.clone());
            }
        }
        for form in self.rules.derive(&root) {
            if !forms.contains(&form) {
                forms.push(form);
            }
        }
        forms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verb_resolver() -> Resolver {
        Resolver::verb(ExceptionTable::from_lines([
            "ran run",
            "running run",
            "was were be",
            "is be",
            "are be",
            "been being be",
            "has have",
            "had have",
        ]))
    }

    #[test]
    fn test_exception_bypasses_rules() {
        let resolver = verb_resolver();
        assert_eq!(resolver.find_root("ran"), "run");
        assert_eq!(resolver.find_root("was"), "be");
        // "has" matches the bare "s" rule, but the exception entry wins.
        assert_eq!(resolver.find_root("has"), "have");
    }

    #[test]
    fn test_rule_application() {
        let resolver = verb_resolver();
        assert_eq!(resolver.find_root("walks"), "walk");
        assert_eq!(resolver.find_root("carries"), "carry");
        // First matching rule wins; dictionary validation happens at lookup
        // time via candidate_roots.
        assert_eq!(resolver.find_root("walked"), "walke");
    }

    #[test]
    fn test_candidate_roots_cover_every_matching_rule() {
        let resolver = verb_resolver();
        let candidates = resolver.candidate_roots("walked");
        assert!(candidates.contains(&"walked".to_string()));
        assert!(candidates.contains(&"walke".to_string()));
        assert!(candidates.contains(&"walk".to_string()));
        let candidates = resolver.candidate_roots("ran");
        assert_eq!(candidates[0], "run");
    }

    #[test]
    fn test_unresolvable_round_trips() {
        let resolver = verb_resolver();
        assert_eq!(resolver.find_root("go"), "go");
        assert_eq!(resolver.find_root("xyzzy"), "xyzzy");
    }

    #[test]
    fn test_forms_include_root_exceptions_and_rules() {
        let resolver = verb_resolver();
        let forms = resolver.get_forms("run");
        assert!(forms.contains(&"run".to_string()));
        assert!(forms.contains(&"ran".to_string()));
        assert!(forms.contains(&"running".to_string()));
        assert!(forms.contains(&"runs".to_string()));
    }

    #[test]
    fn test_exception_round_trip_property() {
        // For every entry mapping forms {f1..fn} to root r:
        // find_root(fi) == r and r is in get_forms(fi)'s root expansion.
        let resolver = verb_resolver();
        for form in ["was", "were"] {
            assert_eq!(resolver.find_root(form), "be");
            let forms = resolver.get_forms(&resolver.find_root(form));
            assert!(forms.contains(&form.to_string()));
        }
    }

    #[test]
    fn test_case_insensitive() {
        let resolver = verb_resolver();
        assert_eq!(resolver.find_root("Ran"), "run");
        assert_eq!(resolver.find_root("WALKS"), "walk");
    }

    #[test]
    fn test_noun_resolver() {
        let resolver = Resolver::noun(ExceptionTable::from_lines(["geese goose"]));
        assert_eq!(resolver.find_root("geese"), "goose");
        assert_eq!(resolver.find_root("churches"), "church");
        let forms = resolver.get_forms("goose");
        assert!(forms.contains(&"geese".to_string()));
        assert!(forms.contains(&"gooses".to_string()));
    }
}
