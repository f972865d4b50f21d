//! Entry-level detection from the job title.

const ENTRY_INDICATORS: &[&str] = &[
    "graduate",
    "junior",
    "entry",
    "trainee",
    "intern",
    "assistant",
    "associate",
    "coordinator",
];

const SENIOR_INDICATORS: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "manager",
    "director",
    "head of",
    "chief",
];

/// True when the title carries at least one entry indicator and no senior
/// indicator. A title like "Senior Graduate Advisor" is not entry level.
pub fn is_entry_level_title(title: Option<&str>) -> bool {
    let Some(title) = title else {
        return false;
    };
    let title = title.to_lowercase();

    let has_entry = ENTRY_INDICATORS.iter().any(|word| title.contains(word));
    let has_senior = SENIOR_INDICATORS.iter().any(|word| title.contains(word));

    has_entry && !has_senior
}
