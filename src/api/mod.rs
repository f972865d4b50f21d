//! Response shapes handed to the web layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ranking::RankedJob;

/// One recommendation entry as serialized for the recommendation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationDto {
    pub job_id: Option<i64>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub match_score: u32,
    pub is_visa_friendly: bool,
    pub visa_confidence: f64,
    pub is_student_friendly: bool,
    pub matched_at: DateTime<Utc>,
}

impl RecommendationDto {
    pub fn from_ranked(ranked: &RankedJob, matched_at: DateTime<Utc>) -> Self {
        Self {
            job_id: ranked.job.id,
            title: ranked.job.title.clone(),
            company: ranked.job.company.clone(),
            match_score: ranked.match_score,
            is_visa_friendly: ranked.verdict.is_visa_friendly,
            visa_confidence: ranked.verdict.confidence,
            is_student_friendly: ranked.verdict.is_student_friendly,
            matched_at,
        }
    }
}

impl From<&RankedJob> for RecommendationDto {
    fn from(ranked: &RankedJob) -> Self {
        Self::from_ranked(ranked, Utc::now())
    }
}
