use serde::{Deserialize, Serialize};

use super::{employers::is_known_graduate_employer, job_level::is_entry_level_title};
use crate::corpus::{KeywordCorpus, RuleCategory};
use crate::JobPosting;

/// Outcome of one scoring pass over a posting. Computed fresh per job,
/// never mutated; the storage collaborator persists it next to the job row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreVerdict {
    pub is_visa_friendly: bool,
    /// Clamped to [0.0, 1.0]; 0.0 whenever `raw_score <= 0`.
    pub confidence: f64,
    pub is_student_friendly: bool,
    /// Unclamped weighted sponsorship sum, retained for tuning.
    pub raw_score: f64,
}

impl ScoreVerdict {
    fn negative() -> Self {
        Self {
            is_visa_friendly: false,
            confidence: 0.0,
            is_student_friendly: false,
            raw_score: 0.0,
        }
    }
}

/// Scoring thresholds and bonus magnitudes.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    /// Sponsorship score a posting must exceed to count as visa friendly.
    pub visa_friendly_threshold: f64,
    /// Sponsorship score at which confidence saturates at 1.0.
    pub confidence_saturation: f64,
    /// Student score a posting must exceed to count as student friendly.
    pub student_friendly_threshold: f64,
    /// Student-score bump for known graduate-program employers.
    pub graduate_employer_bonus: f64,
    /// Student-score bump for entry-level titles.
    pub entry_level_title_bonus: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            visa_friendly_threshold: 0.5,
            confidence_saturation: 5.0,
            student_friendly_threshold: 1.0,
            graduate_employer_bonus: 0.5,
            entry_level_title_bonus: 1.0,
        }
    }
}

/// Score a posting against a corpus with the default thresholds.
pub fn score_job(job: &JobPosting, corpus: &KeywordCorpus) -> ScoreVerdict {
    score_with(corpus, &ScoringConfig::default(), job)
}

/// Pure rule-based classifier for visa friendliness and student
/// friendliness. Holds an immutable corpus for the duration of a batch;
/// `score` takes only immutable inputs, so calls may run in parallel with
/// no coordination.
pub struct VisaScoringEngine {
    corpus: KeywordCorpus,
    config: ScoringConfig,
}

impl VisaScoringEngine {
    pub fn new(corpus: KeywordCorpus) -> Self {
        Self::with_config(corpus, ScoringConfig::default())
    }

    pub fn with_config(corpus: KeywordCorpus, config: ScoringConfig) -> Self {
        Self { corpus, config }
    }

    pub fn corpus(&self) -> &KeywordCorpus {
        &self.corpus
    }

    /// One scoring pass: lowercase the concatenated title and description,
    /// sum matching rule weights per category, then apply the employer and
    /// job-level bonuses to the student score before the final check.
    pub fn score(&self, job: &JobPosting) -> ScoreVerdict {
        score_with(&self.corpus, &self.config, job)
    }
}

fn score_with(corpus: &KeywordCorpus, config: &ScoringConfig, job: &JobPosting) -> ScoreVerdict {
    // With zero rules the verdict is all-false regardless of text; the
    // heuristic bonuses alone must never flip a posting to student friendly.
    if corpus.is_empty() {
        return ScoreVerdict::negative();
    }

    let text = format!(
        "{} {}",
        job.title.as_deref().unwrap_or_default(),
        job.description.as_deref().unwrap_or_default()
    )
    .to_lowercase();

    let sponsorship_score = category_score(corpus, &text, RuleCategory::Sponsorship);
    let mut student_score = category_score(corpus, &text, RuleCategory::StudentFriendly)
        + category_score(corpus, &text, RuleCategory::Experience);

    let is_visa_friendly = sponsorship_score > config.visa_friendly_threshold;
    let confidence = (sponsorship_score / config.confidence_saturation).clamp(0.0, 1.0);

    if is_known_graduate_employer(job.company.as_deref()) {
        student_score += config.graduate_employer_bonus;
    }
    if is_entry_level_title(job.title.as_deref()) {
        student_score += config.entry_level_title_bonus;
    }
    let is_student_friendly = student_score > config.student_friendly_threshold;

    ScoreVerdict {
        is_visa_friendly,
        confidence,
        is_student_friendly,
        raw_score: sponsorship_score,
    }
}

/// Sum of signed weights for every rule of `category` whose phrase occurs in
/// `text`. Phrases are stored lowercase and `text` is lowercased by the
/// caller, so this is a plain substring check.
fn category_score(corpus: &KeywordCorpus, text: &str, category: RuleCategory) -> f64 {
    corpus
        .rules_for(category)
        .filter(|rule| text.contains(rule.phrase.as_str()))
        .map(|rule| rule.signed_weight())
        .sum()
}
