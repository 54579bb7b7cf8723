//! Universal head/dependent POS attachment rules.
//!
//! Directional (head-POS, dependent-POS) pairs, case-normalized to upper
//! case, consulted as a boolean membership predicate during tree
//! construction. The tags are expected to follow the universal tagset of
//! Petrov, Das and McDonald (2011).

use rustc_hash::FxHashSet;

/// A set of universal dependency rules.
#[derive(Debug, Clone, Default)]
pub struct UniversalRuleSet {
    rules: FxHashSet<(String, String)>,
}

impl UniversalRuleSet {
    /// An empty rule set — `matches` is always `false`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in rule set, a close variant of Søgaard (2012), Fig. 5
    /// (not identical to the paper).
    pub fn default_rules() -> Self {
        let mut rules = Self::empty();
        for (head, dependent) in [
            ("VERB", "VERB"),
            ("VERB", "NOUN"),
            ("VERB", "ADV"),
            ("VERB", "ADP"),
            ("VERB", "CONJ"),
            ("VERB", "."),
            ("VERB", "X"),
            ("VERB", "ADJ"),
            ("NOUN", "ADJ"),
            ("NOUN", "DET"),
            ("NOUN", "NOUN"),
            ("NOUN", "NUM"),
            ("ADP", "NOUN"),
            ("ADJ", "ADV"),
        ] {
            rules.add_rule(head, dependent);
        }
        rules
    }

    /// Add a rule allowing `head_pos` to govern `dependent_pos`. Cases are
    /// normalized.
    pub fn add_rule(&mut self, head_pos: &str, dependent_pos: &str) {
        self.rules
            .insert((head_pos.to_uppercase(), dependent_pos.to_uppercase()));
    }

    /// Whether a rule lets the first POS act as head of the second.
    /// A missing POS on either side never matches.
    pub fn matches(&self, head_pos: Option<&str>, dependent_pos: Option<&str>) -> bool {
        match (head_pos, dependent_pos) {
            (Some(head), Some(dependent)) => self
                .rules
                .contains(&(head.to_uppercase(), dependent.to_uppercase())),
            _ => false,
        }
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_are_directional() {
        let rules = UniversalRuleSet::default_rules();
        assert!(rules.matches(Some("NOUN"), Some("DET")));
        assert!(!rules.matches(Some("DET"), Some("NOUN")));
    }

    #[test]
    fn test_case_normalization() {
        let mut rules = UniversalRuleSet::empty();
        rules.add_rule("verb", "noun");
        assert!(rules.matches(Some("VERB"), Some("noun")));
        assert!(rules.matches(Some("Verb"), Some("Noun")));
    }

    #[test]
    fn test_missing_pos_never_matches() {
        let rules = UniversalRuleSet::default_rules();
        assert!(!rules.matches(None, Some("NOUN")));
        assert!(!rules.matches(Some("VERB"), None));
        assert!(!rules.matches(None, None));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let rules = UniversalRuleSet::empty();
        assert!(!rules.matches(Some("VERB"), Some("NOUN")));
    }

    #[test]
    fn test_default_rule_count() {
        assert_eq!(UniversalRuleSet::default_rules().len(), 14);
    }
}
