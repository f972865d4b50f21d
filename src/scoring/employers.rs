//! Known large Australian graduate-program employers.
//!
//! Companies on this list run structured graduate intakes, so a posting
//! from one of them gets a small student-friendliness bump even when the
//! ad text itself does not mention a program.

/// Fixed allow-list, matched case-insensitively as a substring of the
/// company name. Entries are kept multi-word or distinctive where possible
/// to limit accidental substring hits.
const GRADUATE_EMPLOYERS: &[&str] = &[
    // Banks and financial services
    "commonwealth bank",
    "westpac",
    "anz",
    "nab",
    "macquarie",
    // Telcos
    "telstra",
    "optus",
    "tpg telecom",
    // Retail and consumer
    "woolworths",
    "coles",
    "wesfarmers",
    "bunnings",
    "kmart",
    // Mining and resources
    "bhp",
    "rio tinto",
    "fortescue",
    // Airlines
    "qantas",
    "virgin australia",
    // Tech and professional services
    "atlassian",
    "canva",
    "xero",
    "rea group",
    "seek",
    "google",
    "microsoft",
    "amazon",
    "ibm",
    "accenture",
    "deloitte",
    "kpmg",
    "pwc",
];

/// True when the company name matches the graduate-employer allow-list.
/// Unknown or missing company names are simply not a match.
pub fn is_known_graduate_employer(company: Option<&str>) -> bool {
    let Some(company) = company else {
        return false;
    };

    let normalized = company.trim().to_lowercase();
    if normalized.is_empty() {
        return false;
    }

    GRADUATE_EMPLOYERS
        .iter()
        .any(|employer| normalized.contains(employer))
}
