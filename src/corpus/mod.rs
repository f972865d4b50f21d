pub mod defaults;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Rule grouping. Only `Sponsorship`, `StudentFriendly` and `Experience`
/// participate in scoring; `Openness` and `Programs` exist for reporting
/// breakdowns and are never consulted by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RuleCategory {
    Sponsorship,
    StudentFriendly,
    Experience,
    Openness,
    Programs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RulePolarity {
    Positive,
    Negative,
}

/// One weighted keyword rule. The weight is always stored as a positive
/// magnitude; negative-polarity rules are applied with a minus sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub phrase: String,
    pub category: RuleCategory,
    pub polarity: RulePolarity,
    pub weight: f64,
}

impl KeywordRule {
    pub fn new(
        phrase: impl Into<String>,
        category: RuleCategory,
        polarity: RulePolarity,
        weight: f64,
    ) -> Self {
        Self {
            phrase: phrase.into().trim().to_lowercase(),
            category,
            polarity,
            weight: weight.abs(),
        }
    }

    /// Weight with the polarity sign applied.
    pub fn signed_weight(&self) -> f64 {
        match self.polarity {
            RulePolarity::Positive => self.weight,
            RulePolarity::Negative => -self.weight,
        }
    }
}

/// Insertion-ordered collection of keyword rules.
///
/// Order never changes a score (scoring sums rule contributions
/// independently), but deterministic iteration keeps reporting and test
/// output reproducible. Loaded once per scoring session and treated as
/// read-only for the duration of a batch; concurrent readers never race.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordCorpus {
    rules: Vec<KeywordRule>,
}

impl KeywordCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Corpus seeded with the built-in default rule table.
    pub fn with_default_rules() -> Self {
        Self::from_rules(defaults::default_rules())
    }

    /// Build a corpus from loaded rows. Duplicate `(phrase, category,
    /// polarity)` rows collapse to the last weight seen, matching the
    /// upsert semantics of `add_rule`.
    pub fn from_rules(rules: impl IntoIterator<Item = KeywordRule>) -> Self {
        let mut corpus = Self::new();
        for rule in rules {
            corpus.add_rule(rule.phrase, rule.category, rule.polarity, rule.weight);
        }
        corpus
    }

    /// Insert or update a rule. The `(phrase, category, polarity)` key is
    /// case-insensitive on phrase; an existing rule keeps its position and
    /// takes the new weight.
    pub fn add_rule(
        &mut self,
        phrase: impl Into<String>,
        category: RuleCategory,
        polarity: RulePolarity,
        weight: f64,
    ) {
        let rule = KeywordRule::new(phrase, category, polarity, weight);
        if rule.phrase.is_empty() {
            return;
        }

        match self.position_of(&rule.phrase, category, polarity) {
            Some(idx) => self.rules[idx].weight = rule.weight,
            None => self.rules.push(rule),
        }
    }

    /// Delete a rule if present; no-op otherwise.
    pub fn remove_rule(&mut self, phrase: &str, category: RuleCategory, polarity: RulePolarity) {
        let phrase = phrase.trim().to_lowercase();
        if let Some(idx) = self.position_of(&phrase, category, polarity) {
            self.rules.remove(idx);
        }
    }

    /// Rules of one category, in insertion order.
    pub fn rules_for(&self, category: RuleCategory) -> impl Iterator<Item = &KeywordRule> {
        self.rules.iter().filter(move |r| r.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule counts per `(category, polarity)`, for reporting only.
    pub fn category_counts(&self) -> HashMap<(RuleCategory, RulePolarity), usize> {
        let mut counts = HashMap::new();
        for rule in &self.rules {
            *counts.entry((rule.category, rule.polarity)).or_insert(0) += 1;
        }
        counts
    }

    fn position_of(
        &self,
        phrase: &str,
        category: RuleCategory,
        polarity: RulePolarity,
    ) -> Option<usize> {
        self.rules
            .iter()
            .position(|r| r.phrase == phrase && r.category == category && r.polarity == polarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rule_lowercases_and_upserts() {
        let mut corpus = KeywordCorpus::new();
        corpus.add_rule(
            "Visa Sponsorship",
            RuleCategory::Sponsorship,
            RulePolarity::Positive,
            3.0,
        );
        corpus.add_rule(
            "visa sponsorship",
            RuleCategory::Sponsorship,
            RulePolarity::Positive,
            2.0,
        );

        assert_eq!(corpus.len(), 1);
        let rule = corpus.iter().next().unwrap();
        assert_eq!(rule.phrase, "visa sponsorship");
        assert_eq!(rule.weight, 2.0);
    }

    #[test]
    fn same_phrase_in_different_categories_coexists() {
        let mut corpus = KeywordCorpus::new();
        corpus.add_rule(
            "graduate",
            RuleCategory::StudentFriendly,
            RulePolarity::Positive,
            1.0,
        );
        corpus.add_rule(
            "graduate",
            RuleCategory::Experience,
            RulePolarity::Positive,
            2.0,
        );

        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.rules_for(RuleCategory::StudentFriendly).count(), 1);
        assert_eq!(corpus.rules_for(RuleCategory::Experience).count(), 1);
    }

    #[test]
    fn remove_rule_is_noop_when_absent() {
        let mut corpus = KeywordCorpus::with_default_rules();
        let before = corpus.len();

        corpus.remove_rule(
            "does not exist",
            RuleCategory::Sponsorship,
            RulePolarity::Positive,
        );
        assert_eq!(corpus.len(), before);

        corpus.remove_rule(
            "Visa Sponsorship",
            RuleCategory::Sponsorship,
            RulePolarity::Positive,
        );
        assert_eq!(corpus.len(), before - 1);
    }

    #[test]
    fn negative_weights_store_magnitude() {
        let rule = KeywordRule::new(
            "citizens only",
            RuleCategory::Sponsorship,
            RulePolarity::Negative,
            -3.0,
        );
        assert_eq!(rule.weight, 3.0);
        assert_eq!(rule.signed_weight(), -3.0);
    }

    #[test]
    fn empty_phrases_are_rejected() {
        let mut corpus = KeywordCorpus::new();
        corpus.add_rule(
            "   ",
            RuleCategory::Sponsorship,
            RulePolarity::Positive,
            1.0,
        );
        assert!(corpus.is_empty());
    }

    #[test]
    fn rules_for_preserves_insertion_order() {
        let mut corpus = KeywordCorpus::new();
        for (i, phrase) in ["alpha", "bravo", "charlie"].iter().enumerate() {
            corpus.add_rule(
                *phrase,
                RuleCategory::Sponsorship,
                RulePolarity::Positive,
                i as f64 + 1.0,
            );
        }

        let phrases: Vec<_> = corpus
            .rules_for(RuleCategory::Sponsorship)
            .map(|r| r.phrase.as_str())
            .collect();
        assert_eq!(phrases, vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn category_counts_group_by_polarity() {
        let corpus = KeywordCorpus::with_default_rules();
        let counts = corpus.category_counts();

        assert!(counts[&(RuleCategory::Sponsorship, RulePolarity::Positive)] > 0);
        assert!(counts[&(RuleCategory::Sponsorship, RulePolarity::Negative)] > 0);
        assert!(counts[&(RuleCategory::StudentFriendly, RulePolarity::Positive)] > 0);
        assert!(!counts.contains_key(&(RuleCategory::StudentFriendly, RulePolarity::Negative)));
    }

    #[test]
    fn category_parses_from_store_strings() {
        use std::str::FromStr;

        assert_eq!(
            RuleCategory::from_str("student_friendly").unwrap(),
            RuleCategory::StudentFriendly
        );
        assert_eq!(
            RulePolarity::from_str("negative").unwrap(),
            RulePolarity::Negative
        );
        assert!(RuleCategory::from_str("typo_category").is_err());
    }
}
