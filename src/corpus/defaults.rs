//! Built-in default keyword table.
//!
//! Used whenever the persistent keyword store is confirmed empty. The
//! phrases and weights are load-bearing: downstream compatibility tests
//! assert exact confidence values against this table, so edits here must
//! go through the persisted store instead.

use super::{KeywordRule, RuleCategory, RulePolarity};

const SPONSORSHIP_POSITIVE: &[(&str, f64)] = &[
    ("visa sponsorship", 3.0),
    ("sponsor visa", 3.0),
    ("482 visa", 2.5),
    ("186 visa", 2.5),
    ("187 visa", 2.5),
    ("temporary skill shortage", 2.5),
    ("tss visa", 2.5),
    ("employer nomination", 2.0),
    ("skilled migration", 2.0),
    ("work visa", 1.5),
    ("international candidates", 2.0),
    ("overseas applicants", 2.0),
    ("global talent", 1.8),
    ("relocation assistance", 1.5),
];

const SPONSORSHIP_NEGATIVE: &[(&str, f64)] = &[
    ("australian citizens only", 3.0),
    ("pr holders only", 3.0),
    ("permanent residents only", 3.0),
    ("no visa sponsorship", 3.0),
    ("citizenship required", 2.5),
    ("security clearance", 2.0),
    ("must be eligible to work", 1.0),
];

const STUDENT_FRIENDLY: &[(&str, f64)] = &[
    ("graduate program", 3.0),
    ("graduate opportunity", 2.5),
    ("recent graduate", 2.5),
    ("new graduate", 2.5),
    ("entry level", 2.0),
    ("junior", 2.0),
    ("trainee", 2.0),
    ("internship", 2.5),
    ("student", 1.5),
    ("mentorship", 1.0),
    ("training provided", 1.5),
];

const EXPERIENCE: &[(&str, f64)] = &[
    ("0-2 years", 2.0),
    ("1-3 years", 1.5),
    ("no experience required", 2.5),
    ("fresh graduate", 2.0),
];

/// The full default rule set, in table order.
pub fn default_rules() -> Vec<KeywordRule> {
    let groups = [
        (
            RuleCategory::Sponsorship,
            RulePolarity::Positive,
            SPONSORSHIP_POSITIVE,
        ),
        (
            RuleCategory::Sponsorship,
            RulePolarity::Negative,
            SPONSORSHIP_NEGATIVE,
        ),
        (
            RuleCategory::StudentFriendly,
            RulePolarity::Positive,
            STUDENT_FRIENDLY,
        ),
        (RuleCategory::Experience, RulePolarity::Positive, EXPERIENCE),
    ];

    groups
        .into_iter()
        .flat_map(|(category, polarity, phrases)| {
            phrases
                .iter()
                .map(move |(phrase, weight)| KeywordRule::new(*phrase, category, polarity, *weight))
        })
        .collect()
}
