pub mod weights;

use crate::normalize::skill_overlap;
use crate::scoring::ScoreVerdict;
use crate::{JobPosting, RequesterProfile};

pub use weights::{MatchWeights, DEFAULT_MATCH_WEIGHTS};

/// One entry of a ranked recommendation list.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedJob {
    pub job: JobPosting,
    pub verdict: ScoreVerdict,
    pub match_score: u32,
}

/// Integer match score for one `(requester, scored job)` pair, using the
/// default weights. Missing optional profile fields skip their
/// contribution instead of erroring.
pub fn match_score(profile: &RequesterProfile, job: &JobPosting, verdict: &ScoreVerdict) -> u32 {
    match_score_with_weights(profile, job, verdict, &DEFAULT_MATCH_WEIGHTS)
}

pub fn match_score_with_weights(
    profile: &RequesterProfile,
    job: &JobPosting,
    verdict: &ScoreVerdict,
    weights: &MatchWeights,
) -> u32 {
    let mut score = weights.base;

    if let Some(auth) = profile.work_authorization {
        if auth.requires_visa() && verdict.is_visa_friendly {
            score += weights.visa_required_bonus;
        }
        if auth.is_student_visa() && verdict.is_student_friendly {
            score += weights.student_visa_bonus;
        }
        if auth.is_citizen_or_pr() && !verdict.is_visa_friendly {
            score += weights.citizen_low_competition_bonus;
        }
        // Stacks with the visa_required bonus for sponsorship-dependent
        // requesters; see weights.rs.
        if auth.requires_sponsorship() && verdict.is_visa_friendly {
            score += weights.sponsorship_required_bonus;
        }
    }

    let overlap = skill_overlap(profile.skills.as_deref(), job.required_skills.as_deref());
    score += weights.skill_overlap_per_skill * overlap as u32;

    score
}

/// Order a candidate list for one requester, highest match score first.
///
/// The sort is stable: jobs with equal scores keep their input order, so
/// top-K recommendation lists are reproducible run to run.
pub fn rank_jobs(
    profile: &RequesterProfile,
    jobs: Vec<(JobPosting, ScoreVerdict)>,
) -> Vec<RankedJob> {
    let mut ranked: Vec<RankedJob> = jobs
        .into_iter()
        .map(|(job, verdict)| {
            let match_score = match_score(profile, &job, &verdict);
            RankedJob {
                job,
                verdict,
                match_score,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    ranked
}
