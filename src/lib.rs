pub mod api;
pub mod corpus;
pub mod db;
pub mod logging;
pub mod normalize;
pub mod ranking;
pub mod scoring;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// Coarse classification of a job seeker's legal right to work in Australia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WorkAuthorization {
    Citizen,
    PermanentResident,
    StudentVisa,
    WorkVisa,
    SponsorshipRequired,
}

impl WorkAuthorization {
    pub fn is_citizen_or_pr(&self) -> bool {
        matches!(
            self,
            WorkAuthorization::Citizen | WorkAuthorization::PermanentResident
        )
    }

    /// Anyone who is not a citizen or permanent resident needs a visa to work.
    pub fn requires_visa(&self) -> bool {
        !self.is_citizen_or_pr()
    }

    pub fn is_student_visa(&self) -> bool {
        matches!(self, WorkAuthorization::StudentVisa)
    }

    /// Explicitly depends on an employer-sponsored visa (482/186 pathways).
    pub fn requires_sponsorship(&self) -> bool {
        matches!(self, WorkAuthorization::SponsorshipRequired)
    }
}

// Commonly used data models for the scoring and ranking functions.
// Raw postings arrive from the scraper/storage collaborators, so every
// text field is optional and degrades to "absent" rather than erroring.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPosting {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub company: Option<String>,
    /// Comma-separated skill list as supplied by the source.
    pub required_skills: Option<String>,
    pub location: Option<String>,
    pub salary_min: Option<i32>,
    pub salary_max: Option<i32>,
    pub source: Option<String>,
}

/// Read-only projection of a user, consumed by the match ranker.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequesterProfile {
    pub id: Option<i64>,
    pub work_authorization: Option<WorkAuthorization>,
    /// Comma-separated skill list.
    pub skills: Option<String>,
    pub experience_level: Option<String>,
    pub preferred_locations: Vec<String>,
    pub salary_expectation_min: Option<i32>,
    pub salary_expectation_max: Option<i32>,
}
