/// Match-score contributions.
///
/// The score is an opaque, relative-only integer used to order one
/// requester's candidate list; the absolute value carries no meaning
/// across requesters.
pub const DEFAULT_MATCH_WEIGHTS: MatchWeights = MatchWeights {
    base: 10,
    visa_required_bonus: 30,
    student_visa_bonus: 25,
    skill_overlap_per_skill: 5,
    citizen_low_competition_bonus: 10,
    sponsorship_required_bonus: 25,
};

#[derive(Debug, Clone, Copy)]
pub struct MatchWeights {
    /// Flat score for any active, visible job.
    pub base: u32,
    /// Visa-requiring requester on a visa-friendly job.
    pub visa_required_bonus: u32,
    /// Study-visa holder on a student-friendly job.
    pub student_visa_bonus: u32,
    /// Per shared skill token between requester and job.
    pub skill_overlap_per_skill: u32,
    /// Citizen/PR on a job that does not attract sponsorship seekers.
    pub citizen_low_competition_bonus: u32,
    /// Sponsorship-requiring requester on a visa-friendly job. Stacks with
    /// `visa_required_bonus` on purpose; observed production behavior.
    pub sponsorship_required_bonus: u32,
}
