pub mod employers;
pub mod job_level;

mod visa;

pub use visa::{score_job, ScoreVerdict, ScoringConfig, VisaScoringEngine};
